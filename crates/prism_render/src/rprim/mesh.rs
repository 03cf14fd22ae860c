use prism_core::Token;

use super::{ReprTable, RprimKind, styles};
use crate::change_tracker::DirtyBits;

const SURFACE: DirtyBits = DirtyBits::POINTS
    .union(DirtyBits::TOPOLOGY)
    .union(DirtyBits::PRIMVAR)
    .union(DirtyBits::MATERIAL_ID)
    .union(DirtyBits::DOUBLE_SIDED)
    .union(DirtyBits::CULL_STYLE);

const SMOOTH_SURFACE: DirtyBits = SURFACE.union(DirtyBits::NORMALS);

const WIREFRAME: DirtyBits = DirtyBits::POINTS
    .union(DirtyBits::TOPOLOGY)
    .union(DirtyBits::CULL_STYLE);

const SUBDIVISION: DirtyBits = DirtyBits::SUBDIV_TAGS.union(DirtyBits::REFINE_LEVEL);

/// Polygonal and subdivision meshes.
#[derive(Debug, Clone)]
pub struct MeshKind {
    styles: ReprTable,
}

impl MeshKind {
    /// Adds or replaces the bits tracked for `style`.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<Token>, bits: DirtyBits) -> Self {
        self.styles.set(style.into(), bits);
        self
    }

    #[must_use]
    pub fn styles(&self) -> &ReprTable {
        &self.styles
    }
}

impl Default for MeshKind {
    fn default() -> Self {
        Self {
            styles: ReprTable::from_entries(&[
                (styles::HULL, SURFACE),
                (styles::SMOOTH_HULL, SMOOTH_SURFACE),
                (styles::WIRE, WIREFRAME),
                (styles::WIRE_ON_SURF, SMOOTH_SURFACE),
                (styles::REFINED, SMOOTH_SURFACE.union(SUBDIVISION)),
                (styles::REFINED_WIRE, WIREFRAME.union(SUBDIVISION)),
                (styles::REFINED_WIRE_ON_SURF, SMOOTH_SURFACE.union(SUBDIVISION)),
                (styles::POINTS, DirtyBits::POINTS.union(DirtyBits::PRIMVAR)),
            ]),
        }
    }
}

impl RprimKind for MeshKind {
    fn type_name(&self) -> &'static str {
        "mesh"
    }

    fn dirty_bits_mask(&self, style_name: Token) -> DirtyBits {
        self.styles.get(style_name)
    }
}
