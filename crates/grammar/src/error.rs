//! Errors raised while validating a grammar definition.

use thiserror::Error;

/// A grammar that fails validation is rejected whole; no partially
/// constructed grammar is ever returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A right-hand-side symbol is neither a declared terminal nor a
    /// declared non-terminal.
    #[error("production {production}: `{symbol}` is not a declared terminal or non-terminal")]
    UndeclaredSymbol { production: usize, symbol: String },

    /// A production's left-hand side is not a declared non-terminal.
    #[error("production {production}: left-hand side `{symbol}` is not a declared non-terminal")]
    InvalidLeftHandSide { production: usize, symbol: String },

    /// The start symbol is not a declared non-terminal.
    #[error("start symbol `{0}` is not a declared non-terminal")]
    UndeclaredStart(String),

    /// A symbol is declared both as a terminal and as a non-terminal.
    #[error("`{0}` is declared both as a terminal and as a non-terminal")]
    AmbiguousSymbol(String),
}
