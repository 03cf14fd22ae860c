//! Render-Item Collections
//!
//! An [`RprimCollection`] names the subset of renderable primitives drawn by
//! one render pass, and the change bits that must be watched for them.
//!
//! # Contents
//!
//! - **Identity**: a name, a render-style name and a forced-style flag.
//! - **Roots / excludes**: absolute scene paths. A primitive belongs to the
//!   collection when it lives under some root and under no exclude path;
//!   resolving that is left to the scene traversal that consumes the
//!   collection.
//! - **Dirty-bit mask**: the union, over every registered primitive kind, of
//!   the bits that kind tracks for the style. Derived from the style name at
//!   construction and on every style change, and never otherwise.
//!
//! # Cache keys
//!
//! Collections are used as keys for cached draw batches. Equality compares
//! name, style, forced flag, roots and excludes. The dirty-bit mask is
//! **not** compared, since it follows from the style, but it **is** fed to
//! [`Hash`]. Two collections built against different registries can
//! therefore be equal and still hash differently.
//!
//! ```rust,ignore
//! use prism_core::{ScenePath, Token};
//! use prism_render::RprimCollection;
//!
//! let mut geometry = RprimCollection::new("geometry", "refined", false);
//! geometry.set_exclude_paths(&["/World/Proxies".parse()?])?;
//! let key = geometry.compute_hash();
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use prism_core::{ScenePath, Token, coding_error};
use smallvec::{SmallVec, smallvec};

use crate::change_tracker::DirtyBits;
use crate::errors::CollectionError;
use crate::rprim::PrimKindRegistry;

/// Sorted path storage. Most collections have a single root.
pub type PathVector = SmallVec<[ScenePath; 1]>;

/// Descriptor of the primitives drawn by a render pass.
#[derive(Debug, Clone)]
pub struct RprimCollection {
    name: Token,
    style_name: Token,
    forced_style: bool,
    root_paths: PathVector,
    exclude_paths: PathVector,
    dirty_bits_mask: DirtyBits,
}

impl Default for RprimCollection {
    /// Unnamed, unstyled collection rooted at `/`. The mask is clean; no
    /// registry is consulted.
    fn default() -> Self {
        Self {
            name: Token::empty(),
            style_name: Token::empty(),
            forced_style: false,
            root_paths: smallvec![ScenePath::absolute_root()],
            exclude_paths: PathVector::new(),
            dirty_bits_mask: DirtyBits::CLEAN,
        }
    }
}

impl RprimCollection {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Collection rooted at `/`, with its mask taken from the global registry.
    #[must_use]
    pub fn new(name: impl Into<Token>, style_name: impl Into<Token>, forced_style: bool) -> Self {
        Self::new_in(name, style_name, forced_style, PrimKindRegistry::global())
    }

    /// Like [`new`](Self::new), aggregating over `registry`.
    #[must_use]
    pub fn new_in(
        name: impl Into<Token>,
        style_name: impl Into<Token>,
        forced_style: bool,
        registry: &PrimKindRegistry,
    ) -> Self {
        let mut collection = Self {
            name: name.into(),
            style_name: style_name.into(),
            forced_style,
            ..Self::default()
        };
        collection.compute_dirty_bits_mask(registry);
        collection
    }

    /// Collection with a single root.
    ///
    /// A relative `root_path` is reported as a coding error and replaced by
    /// `/`, so the collection never ends up without a root.
    #[must_use]
    pub fn with_root_path(
        name: impl Into<Token>,
        style_name: impl Into<Token>,
        root_path: ScenePath,
        forced_style: bool,
    ) -> Self {
        Self::with_root_path_in(
            name,
            style_name,
            root_path,
            forced_style,
            PrimKindRegistry::global(),
        )
    }

    /// Like [`with_root_path`](Self::with_root_path), aggregating over `registry`.
    #[must_use]
    pub fn with_root_path_in(
        name: impl Into<Token>,
        style_name: impl Into<Token>,
        root_path: ScenePath,
        forced_style: bool,
        registry: &PrimKindRegistry,
    ) -> Self {
        let root = if root_path.is_absolute() {
            root_path
        } else {
            report(CollectionError::NonAbsoluteRootPath { path: root_path });
            ScenePath::absolute_root()
        };

        let mut collection = Self {
            name: name.into(),
            style_name: style_name.into(),
            forced_style,
            root_paths: smallvec![root],
            ..Self::default()
        };
        collection.compute_dirty_bits_mask(registry);
        collection
    }

    fn compute_dirty_bits_mask(&mut self, registry: &PrimKindRegistry) {
        self.dirty_bits_mask = registry.dirty_bits_mask(self.style_name);
        log::trace!(
            "Collection '{}' style '{}' tracks {:?}",
            self.name,
            self.style_name,
            self.dirty_bits_mask
        );
    }

    // ========================================================================
    // Identity
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn name(&self) -> Token {
        self.name
    }

    pub fn set_name(&mut self, name: impl Into<Token>) {
        self.name = name.into();
    }

    #[inline]
    #[must_use]
    pub fn style_name(&self) -> Token {
        self.style_name
    }

    /// Changes the render style and recomputes the mask from the global
    /// registry.
    pub fn set_style_name(&mut self, style_name: impl Into<Token>) {
        self.set_style_name_in(style_name, PrimKindRegistry::global());
    }

    pub fn set_style_name_in(&mut self, style_name: impl Into<Token>, registry: &PrimKindRegistry) {
        self.style_name = style_name.into();
        self.compute_dirty_bits_mask(registry);
    }

    /// Whether the collection's style overrides per-primitive style opinions.
    #[inline]
    #[must_use]
    pub fn is_forced_style(&self) -> bool {
        self.forced_style
    }

    pub fn set_forced_style(&mut self, forced_style: bool) {
        self.forced_style = forced_style;
    }

    /// Change bits that make a member primitive dirty under this style.
    #[inline]
    #[must_use]
    pub fn dirty_bits_mask(&self) -> DirtyBits {
        self.dirty_bits_mask
    }

    // ========================================================================
    // Root paths
    // ========================================================================

    /// Roots in ascending order.
    #[inline]
    #[must_use]
    pub fn root_paths(&self) -> &[ScenePath] {
        &self.root_paths
    }

    /// Replaces all roots with a sorted copy of `paths`.
    ///
    /// If any path is relative, the first one is reported and the current
    /// roots are kept untouched.
    pub fn set_root_paths(&mut self, paths: &[ScenePath]) -> Result<(), CollectionError> {
        if let Some(&path) = paths.iter().find(|path| !path.is_absolute()) {
            return Err(report(CollectionError::NonAbsoluteRootPath { path }));
        }
        self.root_paths = sorted(paths);
        Ok(())
    }

    /// Replaces all roots with `path`.
    ///
    /// A relative path is reported and the current roots are kept; unlike
    /// [`with_root_path`](Self::with_root_path), nothing is substituted.
    pub fn set_root_path(&mut self, path: ScenePath) -> Result<(), CollectionError> {
        if !path.is_absolute() {
            return Err(report(CollectionError::NonAbsoluteRootPath { path }));
        }
        self.root_paths = smallvec![path];
        Ok(())
    }

    /// Exact membership among the roots; ancestry is not considered.
    #[must_use]
    pub fn has_root_path(&self, path: ScenePath) -> bool {
        self.root_paths.binary_search(&path).is_ok()
    }

    // ========================================================================
    // Exclude paths
    // ========================================================================

    /// Excludes in ascending order.
    #[inline]
    #[must_use]
    pub fn exclude_paths(&self) -> &[ScenePath] {
        &self.exclude_paths
    }

    /// Replaces all excludes with a sorted copy of `paths`, with the same
    /// all-or-nothing validation as [`set_root_paths`](Self::set_root_paths).
    pub fn set_exclude_paths(&mut self, paths: &[ScenePath]) -> Result<(), CollectionError> {
        if let Some(&path) = paths.iter().find(|path| !path.is_absolute()) {
            return Err(report(CollectionError::NonAbsoluteExcludePath { path }));
        }
        self.exclude_paths = sorted(paths);
        Ok(())
    }

    /// Exact membership among the excludes; ancestry is not considered.
    #[must_use]
    pub fn has_exclude_path(&self, path: ScenePath) -> bool {
        self.exclude_paths.binary_search(&path).is_ok()
    }

    // ========================================================================
    // Hashing
    // ========================================================================

    /// Cache-key hash of the collection, see [`Hash`] for the fed fields.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        rustc_hash::FxBuildHasher.hash_one(self)
    }
}

fn sorted(paths: &[ScenePath]) -> PathVector {
    let mut paths = PathVector::from_slice(paths);
    paths.sort_unstable();
    paths
}

fn report(error: CollectionError) -> CollectionError {
    coding_error!("{error}");
    error
}

// Field order is part of the hash; keep the mask between roots and excludes.
impl Hash for RprimCollection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.style_name.hash(state);
        self.forced_style.hash(state);
        for path in &self.root_paths {
            path.hash(state);
        }
        self.dirty_bits_mask.hash(state);
        for path in &self.exclude_paths {
            path.hash(state);
        }
    }
}

impl PartialEq for RprimCollection {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.style_name == other.style_name
            && self.forced_style == other.forced_style
            && self.root_paths == other.root_paths
            && self.exclude_paths == other.exclude_paths
    }
}

impl Eq for RprimCollection {}

impl fmt::Display for RprimCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use prism_core::DiagnosticCollector;
    use prism_core::diagnostics::with_sink;

    use super::*;
    use crate::rprim::{MeshKind, styles};

    fn path(text: &str) -> ScenePath {
        ScenePath::parse(text).unwrap()
    }

    fn capture<R>(f: impl FnOnce() -> R) -> (R, Arc<DiagnosticCollector>) {
        let collector = Arc::new(DiagnosticCollector::new());
        let result = with_sink(collector.clone(), f);
        (result, collector)
    }

    #[test]
    fn test_default() {
        let collection = RprimCollection::default();
        assert!(collection.name().is_empty());
        assert!(collection.style_name().is_empty());
        assert!(!collection.is_forced_style());
        assert_eq!(collection.root_paths(), [ScenePath::absolute_root()]);
        assert!(collection.exclude_paths().is_empty());
        assert!(collection.dirty_bits_mask().is_clean());
    }

    #[test]
    fn test_new_computes_mask() {
        let collection = RprimCollection::new("geometry", styles::HULL, false);
        assert_eq!(
            collection.dirty_bits_mask(),
            PrimKindRegistry::global().dirty_bits_mask(Token::new(styles::HULL))
        );
        assert_eq!(collection.root_paths(), [ScenePath::absolute_root()]);
    }

    #[test]
    fn test_with_root_path_substitutes_root_for_relative_path() {
        let (collection, errors) = capture(|| {
            RprimCollection::with_root_path("geometry", styles::HULL, path("World"), false)
        });
        assert_eq!(collection.root_paths(), [ScenePath::absolute_root()]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_set_root_path_keeps_state_for_relative_path() {
        let mut collection =
            RprimCollection::with_root_path("geometry", styles::HULL, path("/World"), false);

        let (result, errors) = capture(|| collection.set_root_path(path("Props")));

        assert_eq!(
            result,
            Err(CollectionError::NonAbsoluteRootPath { path: path("Props") })
        );
        assert_eq!(collection.root_paths(), [path("/World")]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_set_root_paths_is_atomic() {
        let mut collection = RprimCollection::new("geometry", styles::HULL, false);
        collection.set_root_paths(&[path("/B"), path("/A")]).unwrap();

        let (result, errors) =
            capture(|| collection.set_root_paths(&[path("/C"), path("rel/a"), path("rel/b")]));

        assert!(result.is_err());
        assert_eq!(collection.root_paths(), [path("/A"), path("/B")]);
        let errors = errors.take();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Root path must be absolute (<rel/a>)");
    }

    #[test]
    fn test_set_paths_sorts_and_keeps_duplicates() {
        let mut collection = RprimCollection::default();
        collection
            .set_exclude_paths(&[path("/Z"), path("/A/B"), path("/A"), path("/A")])
            .unwrap();
        assert_eq!(
            collection.exclude_paths(),
            [path("/A"), path("/A"), path("/A/B"), path("/Z")]
        );
    }

    #[test]
    fn test_set_exclude_paths_reports_exclude_error() {
        let mut collection = RprimCollection::default();
        let (result, errors) = capture(|| collection.set_exclude_paths(&[path("Proxy")]));

        assert_eq!(
            result,
            Err(CollectionError::NonAbsoluteExcludePath { path: path("Proxy") })
        );
        assert!(collection.exclude_paths().is_empty());
        assert_eq!(errors.take()[0].message, "Exclude path must be absolute (<Proxy>)");
    }

    #[test]
    fn test_path_updates_leave_mask_alone() {
        let mut collection = RprimCollection::new("geometry", styles::REFINED, false);
        let mask = collection.dirty_bits_mask();
        collection.set_root_path(path("/World")).unwrap();
        collection.set_exclude_paths(&[path("/World/Proxy")]).unwrap();
        assert_eq!(collection.dirty_bits_mask(), mask);
    }

    #[test]
    fn test_set_style_name_recomputes_mask() {
        let mut collection = RprimCollection::new("geometry", styles::WIRE, false);
        assert!(!collection.dirty_bits_mask().contains(DirtyBits::NORMALS));

        collection.set_style_name(styles::SMOOTH_HULL);
        assert!(collection.dirty_bits_mask().contains(DirtyBits::NORMALS));
    }

    #[test]
    fn test_membership_queries() {
        let mut collection = RprimCollection::default();
        collection.set_root_paths(&[path("/B"), path("/A")]).unwrap();
        assert!(collection.has_root_path(path("/A")));
        assert!(!collection.has_root_path(path("/A/Child")));
        assert!(!collection.has_exclude_path(path("/A")));
    }

    #[test]
    fn test_equality_ignores_mask_but_hash_does_not() {
        let custom = PrimKindRegistry::builtin()
            .with_kind(MeshKind::default().with_style(styles::HULL, DirtyBits::VARYING));

        let a = RprimCollection::new("geometry", styles::HULL, false);
        let b = RprimCollection::new_in("geometry", styles::HULL, false, &custom);

        assert_ne!(a.dirty_bits_mask(), b.dirty_bits_mask());
        assert_eq!(a, b);
        assert_ne!(a.compute_hash(), b.compute_hash());
    }

    #[test]
    fn test_hash_follows_fields() {
        let a = RprimCollection::new("geometry", styles::HULL, false);
        let mut b = a.clone();
        assert_eq!(a.compute_hash(), b.compute_hash());

        b.set_forced_style(true);
        assert_ne!(a, b);
        assert_ne!(a.compute_hash(), b.compute_hash());
    }

    #[test]
    fn test_display_is_name() {
        let collection = RprimCollection::new("shadowCasters", styles::HULL, true);
        assert_eq!(collection.to_string(), "shadowCasters");
    }
}
