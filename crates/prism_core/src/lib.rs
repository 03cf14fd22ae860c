//! Prism Core
//!
//! Foundational types shared by the Prism crates:
//!
//! - [`Token`]: interned string identifiers (collection and render-style names)
//! - [`ScenePath`]: hierarchical scene graph paths
//! - [`diagnostics`]: the coding-error reporting channel
//! - [`errors`]: error types

pub mod diagnostics;
pub mod errors;
pub mod interner;
pub mod path;

pub use diagnostics::{CodingError, DiagnosticCollector, DiagnosticSink, LogSink};
pub use errors::{PathError, Result};
pub use interner::{Symbol, Token};
pub use path::ScenePath;
