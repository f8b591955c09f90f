//! Error types for the pattern compiler
//!
//! This module provides error handling using the `thiserror` crate.
//! Compilation is all-or-nothing; every failure is one of three kinds:
//! the pattern violates the Vim grammar, the pattern uses a Vim construct
//! this crate deliberately refuses to translate, or one of the
//! `isfname`-style option strings is malformed.

use thiserror::Error;

/// The error type for pattern compilation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The input is not a valid Vim pattern (or an invalid flag string)
    #[error("{message} at offset {offset} in `{pattern}`")]
    InvalidPattern {
        /// What is wrong with the pattern
        message: String,
        /// The offending source text
        pattern: String,
        /// Byte offset of the bad atom within the source
        offset: usize,
    },

    /// A recognised Vim construct that is deliberately not translated
    #[error("unsupported Vim construct `{token}` at offset {offset} in `{pattern}`")]
    UnsupportedFeature {
        /// The Vim token text (e.g. `\zs`, `\@>`, `\%V`)
        token: String,
        /// The offending source text
        pattern: String,
        /// Byte offset of the token within the source
        offset: usize,
    },

    /// A malformed `isfname`/`isident`/`iskeyword`/`isprint` option string
    #[error("{message} at offset {offset} in option string `{option}`")]
    InvalidOptionString {
        /// What is wrong with the option string
        message: String,
        /// The offending option string
        option: String,
        /// Byte offset of the bad entry within the option string
        offset: usize,
    },
}

impl CompileError {
    /// Create an `InvalidPattern` error
    pub fn invalid(message: impl Into<String>, pattern: impl Into<String>, offset: usize) -> Self {
        CompileError::InvalidPattern {
            message: message.into(),
            pattern: pattern.into(),
            offset,
        }
    }

    /// Create an `UnsupportedFeature` error
    pub fn unsupported(token: impl Into<String>, pattern: impl Into<String>, offset: usize) -> Self {
        CompileError::UnsupportedFeature {
            token: token.into(),
            pattern: pattern.into(),
            offset,
        }
    }

    /// Create an `InvalidOptionString` error
    pub fn bad_option(message: impl Into<String>, option: impl Into<String>, offset: usize) -> Self {
        CompileError::InvalidOptionString {
            message: message.into(),
            option: option.into(),
            offset,
        }
    }

    /// The source string the error refers to (pattern or option string)
    pub fn source_text(&self) -> &str {
        match self {
            CompileError::InvalidPattern { pattern, .. } => pattern,
            CompileError::UnsupportedFeature { pattern, .. } => pattern,
            CompileError::InvalidOptionString { option, .. } => option,
        }
    }

    /// Byte offset of the offending atom within [`source_text`](Self::source_text)
    pub fn offset(&self) -> usize {
        match self {
            CompileError::InvalidPattern { offset, .. } => *offset,
            CompileError::UnsupportedFeature { offset, .. } => *offset,
            CompileError::InvalidOptionString { offset, .. } => *offset,
        }
    }
}

/// Result type alias for pattern compilation
pub type Result<T> = std::result::Result<T, CompileError>;
