//! Error Types
//!
//! Errors produced by the foundational types of this crate.
//!
//! All fallible constructors return [`Result<T>`], an alias for
//! `std::result::Result<T, PathError>`.
//!
//! ```rust,ignore
//! use prism_core::{ScenePath, Result};
//!
//! fn parse_root() -> Result<ScenePath> {
//!     "/World/Geometry".parse()
//! }
//! ```

use thiserror::Error;

/// Failure to build a [`ScenePath`](crate::ScenePath) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Two consecutive separators, e.g. `/World//Mesh`.
    #[error("Empty path element in <{path}>")]
    EmptyElement {
        /// The rejected path text
        path: String,
    },

    /// An element that is not a valid identifier.
    #[error("Invalid path element '{element}' in <{path}>")]
    InvalidElement {
        /// The rejected path text
        path: String,
        /// The offending element
        element: String,
    },

    /// A separator at the end of any path other than the absolute root.
    #[error("Trailing separator in <{path}>")]
    TrailingSeparator {
        /// The rejected path text
        path: String,
    },
}

/// Alias for `Result<T, PathError>`.
pub type Result<T> = std::result::Result<T, PathError>;
