//! Vimgex
//!
//! Compiles patterns written in Vim's regular-expression dialect into
//! the dialect of a native host engine, preserving Vim's matching
//! semantics as closely as the host allows.
//!
//! The pipeline: a pattern plus an [`Options`] bundle goes through the
//! single-pass [`transpiler`], which leans on the [`charclass`] compiler
//! for the option-string-driven classes (`\i`, `\k`, `\f`, `\p`, word
//! boundaries); the resulting host source and flag set are wrapped in a
//! [`VimRegex`] that delegates matching to the host. Vim constructs
//! that depend on editor state are refused with an explicit error
//! rather than mistranslated.

pub mod charclass;
mod collection;
pub mod engine;
pub mod error;
pub mod magic;
pub mod options;
mod tokens;
pub mod transpiler;

pub use charclass::{compile_char_class, compile_char_class_with, CharClassKind};
pub use engine::VimRegex;
pub use error::{CompileError, Result};
pub use magic::Magic;
pub use options::Options;
pub use transpiler::{transpile, Compiled};

/// Compile a Vim pattern into a ready-to-match [`VimRegex`]
///
/// # Example
/// ```
/// use vimgex::{compile, Options};
///
/// let regex = compile("\\<\\k\\+\\>", Options::new()).unwrap();
/// assert!(regex.is_match("hello"));
/// ```
pub fn compile(pattern: &str, options: Options) -> Result<VimRegex> {
    VimRegex::with_options(pattern, options)
}
