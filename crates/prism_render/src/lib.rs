//! Prism Render
//!
//! Draw-batching inputs for the renderer:
//!
//! - [`RprimCollection`]: which primitives a render pass draws, and which of
//!   their changes it must react to
//! - [`DirtyBits`]: change categories tracked per primitive
//! - [`rprim`]: primitive kinds and the registry their dirty bits are
//!   aggregated from

pub mod change_tracker;
pub mod collection;
pub mod errors;
pub mod rprim;

pub use change_tracker::DirtyBits;
pub use collection::{PathVector, RprimCollection};
pub use errors::CollectionError;
pub use rprim::{
    BaseRprimKind, BasisCurvesKind, MeshKind, PointsKind, PrimKindRegistry, ReprTable, RprimKind,
};
