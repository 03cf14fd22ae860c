use prism_core::ScenePath;
use thiserror::Error;

/// Rejected mutation of an [`RprimCollection`](crate::RprimCollection).
///
/// Every variant is also reported once as a coding error before it is
/// returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Root path must be absolute (<{path}>)")]
    NonAbsoluteRootPath { path: ScenePath },

    #[error("Exclude path must be absolute (<{path}>)")]
    NonAbsoluteExcludePath { path: ScenePath },
}
