//! Prism
//!
//! Umbrella crate re-exporting the Prism crates.
//!
//! ```rust,ignore
//! use prism::{RprimCollection, ScenePath};
//!
//! let mut shadow_casters = RprimCollection::with_root_path(
//!     "shadowCasters",
//!     "hull",
//!     "/World".parse::<ScenePath>()?,
//!     true,
//! );
//! shadow_casters.set_exclude_paths(&["/World/Sky".parse()?])?;
//! ```

pub use prism_core::diagnostics;
pub use prism_core::{
    CodingError, DiagnosticCollector, DiagnosticSink, LogSink, PathError, ScenePath, Token,
};
pub use prism_render::rprim::{self, styles};
pub use prism_render::{
    CollectionError, DirtyBits, PrimKindRegistry, ReprTable, RprimCollection, RprimKind,
};
