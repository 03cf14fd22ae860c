use prism_core::Token;

use super::RprimKind;
use crate::change_tracker::DirtyBits;

/// State shared by every renderable primitive regardless of its type.
#[derive(Debug, Clone, Copy)]
pub struct BaseRprimKind {
    common: DirtyBits,
}

impl BaseRprimKind {
    pub const DEFAULT_COMMON_BITS: DirtyBits = DirtyBits::PRIM_ID
        .union(DirtyBits::EXTENT)
        .union(DirtyBits::TRANSFORM)
        .union(DirtyBits::VISIBILITY)
        .union(DirtyBits::INSTANCER)
        .union(DirtyBits::INSTANCE_INDEX)
        .union(DirtyBits::REPR);

    #[must_use]
    pub fn with_common_bits(common: DirtyBits) -> Self {
        Self { common }
    }

    #[must_use]
    pub fn common_bits(&self) -> DirtyBits {
        self.common
    }
}

impl Default for BaseRprimKind {
    fn default() -> Self {
        Self::with_common_bits(Self::DEFAULT_COMMON_BITS)
    }
}

impl RprimKind for BaseRprimKind {
    fn type_name(&self) -> &'static str {
        "rprim"
    }

    // Applies to any named style; the unspecified style tracks nothing.
    fn dirty_bits_mask(&self, style_name: Token) -> DirtyBits {
        if style_name.is_empty() {
            DirtyBits::CLEAN
        } else {
            self.common
        }
    }
}
