use prism_core::Token;

use super::{ReprTable, RprimKind, styles};
use crate::change_tracker::DirtyBits;

const POINT_CLOUD: DirtyBits = DirtyBits::POINTS
    .union(DirtyBits::WIDTHS)
    .union(DirtyBits::PRIMVAR)
    .union(DirtyBits::MATERIAL_ID);

/// Point clouds. Wireframe styles have nothing to draw and track nothing.
#[derive(Debug, Clone)]
pub struct PointsKind {
    styles: ReprTable,
}

impl PointsKind {
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

impl Default for PointsKind {
    fn default() -> Self {
        Self {
            styles: ReprTable::from_entries(&[
                (styles::HULL, POINT_CLOUD),
                (styles::SMOOTH_HULL, POINT_CLOUD),
                (styles::REFINED, POINT_CLOUD),
                (styles::POINTS, POINT_CLOUD),
            ]),
        }
    }
}

impl RprimKind for PointsKind {
    fn type_name(&self) -> &'static str {
        "points"
    }

    fn dirty_bits_mask(&self, style_name: Token) -> DirtyBits {
        self.styles.get(style_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_styles_are_clean() {
        let points = PointsKind::default();
        assert!(points.dirty_bits_mask(Token::new(styles::WIRE)).is_clean());
        assert!(points.dirty_bits_mask(Token::new(styles::REFINED_WIRE)).is_clean());
    }

    #[test]
    fn test_surface_styles_track_widths() {
        let points = PointsKind::default();
        assert_eq!(points.dirty_bits_mask(Token::new(styles::POINTS)), POINT_CLOUD);
        assert!(
            points
                .dirty_bits_mask(Token::new(styles::HULL))
                .contains(DirtyBits::WIDTHS)
        );
    }
}
