use std::sync::{Arc, LazyLock};

use prism_core::Token;

use super::{BaseRprimKind, BasisCurvesKind, MeshKind, PointsKind, RprimKind};
use crate::change_tracker::DirtyBits;

static GLOBAL: LazyLock<PrimKindRegistry> = LazyLock::new(PrimKindRegistry::builtin);

/// Explicit list of primitive kinds a collection's dirty-bit mask is
/// aggregated over.
///
/// Aggregation is a bitwise OR, so registration order has no effect on the
/// result.
#[derive(Debug, Clone)]
pub struct PrimKindRegistry {
    kinds: Vec<Arc<dyn RprimKind>>,
}

impl PrimKindRegistry {
    /// A registry with no kinds; every style aggregates to clean.
    #[must_use]
    pub fn empty() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Generic rprim, mesh, basis curves and points with their standard tables.
    #[must_use]
    pub fn builtin() -> Self {
        let registry = Self::empty()
            .with_kind(BaseRprimKind::default())
            .with_kind(MeshKind::default())
            .with_kind(BasisCurvesKind::default())
            .with_kind(PointsKind::default());
        log::debug!(
            "Built-in primitive kinds: {:?}",
            registry.type_names().collect::<Vec<_>>()
        );
        registry
    }

    /// Process-wide registry holding the built-in kinds.
    ///
    /// Built on first use and never mutated afterwards.
    pub fn global() -> &'static PrimKindRegistry {
        &GLOBAL
    }

    pub fn register(&mut self, kind: impl RprimKind + 'static) {
        log::trace!("Registering primitive kind '{}'", kind.type_name());
        self.kinds.push(Arc::new(kind));
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl RprimKind + 'static) -> Self {
        self.register(kind);
        self
    }

    pub fn kinds(&self) -> impl Iterator<Item = &Arc<dyn RprimKind>> {
        self.kinds.iter()
    }

    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.iter().map(|kind| kind.type_name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Union of every registered kind's bits for `style_name`.
    #[must_use]
    pub fn dirty_bits_mask(&self, style_name: Token) -> DirtyBits {
        self.kinds
            .iter()
            .fold(DirtyBits::CLEAN, |mask, kind| {
                mask | kind.dirty_bits_mask(style_name)
            })
    }
}
