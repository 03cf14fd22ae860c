//! Global String Interner
//!
//! Provides process-wide string interning. Strings are converted to compact
//! integer symbols so that comparison and hashing are O(1).
//!
//! Collection names, render-style names and scene path text are all stored as
//! interned symbols. [`Token`] is the public, typed face of a symbol.

use std::fmt;
use std::sync::LazyLock;

use lasso::{Spur, ThreadedRodeo};

/// Global interner instance
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);

/// Symbol type alias
///
/// A Symbol is a compact integer identifier with cheap equality and hashing.
pub type Symbol = Spur;

/// Interns a string and returns its Symbol.
///
/// Returns the existing Symbol if the string is already interned.
#[inline]
pub fn intern(s: &str) -> Symbol {
    INTERNER.get_or_intern(s)
}

/// Looks up the Symbol of an already interned string without allocating.
#[inline]
pub fn get(s: &str) -> Option<Symbol> {
    INTERNER.get(s)
}

/// Resolves a Symbol back to its string.
#[inline]
pub fn resolve(sym: Symbol) -> &'static str {
    INTERNER.resolve(&sym)
}

// ============================================================================
// Token
// ============================================================================

/// An interned, immutable string identifier.
///
/// Tokens name things: collections (`"geometry"`, `"shadowCasters"`) and
/// render styles (`"hull"`, `"refinedWire"`). Two tokens are equal exactly
/// when their text is equal; equality and hashing never touch the text.
///
/// The default token is the empty string, which stands for "unspecified".
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(Symbol);

impl Token {
    #[inline]
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(intern(text))
    }

    /// The empty token.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::new("")
    }

    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        resolve(self.0)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.as_str().is_empty()
    }

    /// Raw interner symbol backing this token.
    #[inline]
    #[must_use]
    pub fn symbol(self) -> Symbol {
        self.0
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<&String> for Token {
    fn from(text: &String) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?})", self.as_str())
    }
}
