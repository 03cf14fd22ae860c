use prism_core::Token;

use super::{ReprTable, RprimKind, styles};
use crate::change_tracker::DirtyBits;

const CURVES: DirtyBits = DirtyBits::POINTS
    .union(DirtyBits::TOPOLOGY)
    .union(DirtyBits::WIDTHS)
    .union(DirtyBits::PRIMVAR)
    .union(DirtyBits::MATERIAL_ID);

const REFINED_CURVES: DirtyBits = CURVES
    .union(DirtyBits::NORMALS)
    .union(DirtyBits::REFINE_LEVEL);

/// Linear and cubic basis curves (hair, guides, strokes).
#[derive(Debug, Clone)]
pub struct BasisCurvesKind {
    styles: ReprTable,
}

impl BasisCurvesKind {
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

impl Default for BasisCurvesKind {
    fn default() -> Self {
        Self {
            styles: ReprTable::from_entries(&[
                (styles::HULL, CURVES),
                (styles::SMOOTH_HULL, CURVES),
                (styles::WIRE, CURVES),
                (styles::WIRE_ON_SURF, CURVES),
                (styles::REFINED, REFINED_CURVES),
                (styles::REFINED_WIRE, REFINED_CURVES),
                (styles::REFINED_WIRE_ON_SURF, REFINED_CURVES),
                (
                    styles::POINTS,
                    DirtyBits::POINTS
                        .union(DirtyBits::WIDTHS)
                        .union(DirtyBits::PRIMVAR),
                ),
            ]),
        }
    }
}

impl RprimKind for BasisCurvesKind {
    fn type_name(&self) -> &'static str {
        "basisCurves"
    }

    fn dirty_bits_mask(&self, style_name: Token) -> DirtyBits {
        self.styles.get(style_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_always_track_widths() {
        let curves = BasisCurvesKind::default();
        for style in styles::ALL {
            assert!(
                curves
                    .dirty_bits_mask(Token::new(style))
                    .contains(DirtyBits::WIDTHS),
                "{style}"
            );
        }
    }

    #[test]
    fn test_only_refined_curves_track_refine_level() {
        let curves = BasisCurvesKind::default();
        assert!(
            curves
                .dirty_bits_mask(Token::new(styles::REFINED))
                .contains(DirtyBits::REFINE_LEVEL)
        );
        assert!(
            !curves
                .dirty_bits_mask(Token::new(styles::HULL))
                .contains(DirtyBits::REFINE_LEVEL)
        );
    }
}
