//! Change Tracking Bits
//!
//! [`DirtyBits`] names the categories of primitive state that can change
//! between frames. A primitive whose dirty bits intersect the mask of the
//! collection it is drawn through must be re-synced before drawing.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Per-primitive change categories.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirtyBits: u32 {
        const INIT_REPR          = 1 << 0;
        const VARYING            = 1 << 1;
        const PRIM_ID            = 1 << 2;
        const EXTENT             = 1 << 3;
        const REFINE_LEVEL       = 1 << 4;
        const POINTS             = 1 << 5;
        const PRIMVAR            = 1 << 6;
        const MATERIAL_ID        = 1 << 7;
        const TOPOLOGY           = 1 << 8;
        const TRANSFORM          = 1 << 9;
        const VISIBILITY         = 1 << 10;
        const NORMALS            = 1 << 11;
        const DOUBLE_SIDED       = 1 << 12;
        const CULL_STYLE         = 1 << 13;
        const SUBDIV_TAGS        = 1 << 14;
        const WIDTHS             = 1 << 15;
        const INSTANCER          = 1 << 16;
        const INSTANCE_INDEX     = 1 << 17;
        const REPR               = 1 << 18;
    }
}

impl DirtyBits {
    /// Nothing changed.
    pub const CLEAN: Self = Self::empty();

    /// Every tracked category.
    pub const ALL_DIRTY: Self = Self::all();

    /// Bit position from which renderer backends may define their own bits.
    pub const CUSTOM_BITS_BEGIN: u32 = 19;

    #[inline]
    #[must_use]
    pub fn is_clean(self) -> bool {
        self.is_empty()
    }

    /// Whether any bit of `mask` is set, i.e. a primitive with these bits
    /// must be re-synced for a collection tracking `mask`.
    #[inline]
    #[must_use]
    pub fn needs_sync(self, mask: Self) -> bool {
        self.intersects(mask)
    }
}

impl fmt::Debug for DirtyBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("DirtyBits(CLEAN)");
        }
        f.write_str("DirtyBits(")?;
        bitflags::parser::to_writer(self, &mut *f)?;
        f.write_str(")")
    }
}
