//! Renderable Primitive Kinds
//!
//! Every kind of renderable primitive (mesh, curves, points, ...) knows which
//! state changes matter to it under a given render style. A mesh drawn as
//! `"wire"` does not care about its normals; the same mesh drawn as
//! `"smoothHull"` does.
//!
//! - [`RprimKind`]: the per-kind provider interface
//! - [`ReprTable`]: style → dirty-bit table backing the built-in kinds
//! - [`PrimKindRegistry`]: the explicit list of kinds a collection aggregates over

mod base;
mod basis_curves;
mod mesh;
mod points;
mod registry;

pub use base::BaseRprimKind;
pub use basis_curves::BasisCurvesKind;
pub use mesh::MeshKind;
pub use points::PointsKind;
pub use registry::PrimKindRegistry;

use std::fmt;

use prism_core::Token;
use rustc_hash::FxHashMap;

use crate::change_tracker::DirtyBits;

/// Standard render style names.
pub mod styles {
    pub const HULL: &str = "hull";
    pub const SMOOTH_HULL: &str = "smoothHull";
    pub const WIRE: &str = "wire";
    pub const WIRE_ON_SURF: &str = "wireOnSurf";
    pub const REFINED: &str = "refined";
    pub const REFINED_WIRE: &str = "refinedWire";
    pub const REFINED_WIRE_ON_SURF: &str = "refinedWireOnSurf";
    pub const POINTS: &str = "points";

    /// All standard styles.
    pub const ALL: [&str; 8] = [
        HULL,
        SMOOTH_HULL,
        WIRE,
        WIRE_ON_SURF,
        REFINED,
        REFINED_WIRE,
        REFINED_WIRE_ON_SURF,
        POINTS,
    ];
}

/// Provider of the change bits a primitive kind tracks for a render style.
///
/// Implementations must be pure: the same style always yields the same bits.
pub trait RprimKind: Send + Sync + fmt::Debug {
    /// Name of the primitive type, e.g. `"mesh"`.
    fn type_name(&self) -> &'static str;

    /// Change bits relevant to this kind when drawn with `style_name`.
    /// Unknown styles yield [`DirtyBits::CLEAN`].
    fn dirty_bits_mask(&self, style_name: Token) -> DirtyBits;
}

// ============================================================================
// ReprTable
// ============================================================================

/// Style name → dirty bits lookup.
#[derive(Debug, Clone, Default)]
pub struct ReprTable {
    masks: FxHashMap<Token, DirtyBits>,
}

impl ReprTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_entries(entries: &[(&str, DirtyBits)]) -> Self {
        let mut table = Self::new();
        for &(style, bits) in entries {
            table.set(Token::new(style), bits);
        }
        table
    }

    /// Sets the bits of `style`, returning the previous entry.
    pub fn set(&mut self, style: Token, bits: DirtyBits) -> Option<DirtyBits> {
        self.masks.insert(style, bits)
    }

    pub fn remove(&mut self, style: Token) -> Option<DirtyBits> {
        self.masks.remove(&style)
    }

    /// Bits of `style`, clean when the style is unknown.
    #[must_use]
    pub fn get(&self, style: Token) -> DirtyBits {
        self.masks.get(&style).copied().unwrap_or(DirtyBits::CLEAN)
    }

    #[must_use]
    pub fn contains(&self, style: Token) -> bool {
        self.masks.contains_key(&style)
    }

    pub fn styles(&self) -> impl Iterator<Item = Token> + '_ {
        self.masks.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}
