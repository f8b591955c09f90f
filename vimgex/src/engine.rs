//! The public pattern wrapper
//!
//! [`VimRegex`] owns the original Vim source, the merged options, the
//! compiled host source and flag set, and the host regex built from
//! them. It is immutable after construction and delegates all matching
//! to the host engine.
//!
//! The host engine reports pathological backtracking as a runtime
//! error; the delegating methods here treat that as "no match".

use crate::error::{CompileError, Result};
use crate::options::{self, Options};
use crate::transpiler::{transpile, Compiled};

/// A compiled Vim pattern bound to a host regex
#[derive(Debug, Clone)]
pub struct VimRegex {
    vim_source: String,
    options: Options,
    compiled: Compiled,
    caller_flags: String,
    regex: fancy_regex::Regex,
}

impl VimRegex {
    /// Compile a pattern with default options
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_options(pattern, Options::new())
    }

    /// Compile a pattern with a flag string (`"gi"` style)
    pub fn with_flags(pattern: &str, flags: &str) -> Result<Self> {
        Self::with_options(pattern, Options::new().flags(flags))
    }

    /// Compile a pattern with an explicit options bundle
    pub fn with_options(pattern: &str, options: Options) -> Result<Self> {
        let caller_flags = options::validate_flags(options.flags_or_default())?;
        let compiled = transpile(pattern, &options)?;
        // the flag characters map onto the host as inline settings:
        // `s` so the emitted bare `.` matches newline, `i` for case
        let engine_source = if compiled.flags.contains('i') {
            format!("(?si){}", compiled.source)
        } else {
            format!("(?s){}", compiled.source)
        };
        let regex = fancy_regex::Regex::new(&engine_source).map_err(|err| {
            CompileError::invalid(format!("Rejected by host engine: {err}"), pattern, 0)
        })?;
        Ok(VimRegex {
            vim_source: pattern.to_string(),
            options,
            compiled,
            caller_flags,
            regex,
        })
    }

    /// Recompile this pattern with `options` layered on top of the
    /// stored ones (the new options win)
    pub fn rebuild(&self, options: Options) -> Result<Self> {
        Self::with_options(&self.vim_source, self.options.merge(&options))
    }

    // ----- introspection -----

    /// The original Vim pattern
    pub fn vim_source(&self) -> &str {
        &self.vim_source
    }

    /// The merged options (a copy; the wrapper stays immutable)
    pub fn options(&self) -> Options {
        self.options.clone()
    }

    /// The compiled host-dialect source
    pub fn host_source(&self) -> &str {
        &self.compiled.source
    }

    /// The full flag set, including the always-present `s` and `v`
    pub fn flags(&self) -> &str {
        &self.compiled.flags
    }

    /// Did the caller ask for match indices (`d`)?
    pub fn has_indices(&self) -> bool {
        self.caller_flags.contains('d')
    }

    /// Did the caller ask for global matching (`g`)?
    pub fn global(&self) -> bool {
        self.caller_flags.contains('g')
    }

    /// Did the caller ask for case-insensitive matching (`i`)?
    ///
    /// Reflects the caller's flags only; an `\c` in the pattern shows up
    /// in [`flags`](Self::flags) but not here.
    pub fn ignore_case(&self) -> bool {
        self.caller_flags.contains('i')
    }

    /// Did the caller ask for sticky matching (`y`)?
    pub fn sticky(&self) -> bool {
        self.caller_flags.contains('y')
    }

    // ----- delegated matching -----

    /// Does the pattern match anywhere in `text`?
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text).unwrap_or(false)
    }

    /// Alias for [`is_match`](Self::is_match)
    pub fn test(&self, text: &str) -> bool {
        self.is_match(text)
    }

    /// The first match in `text`
    pub fn find<'t>(&self, text: &'t str) -> Option<fancy_regex::Match<'t>> {
        self.regex.find(text).ok().flatten()
    }

    /// The first match with its capture groups
    pub fn captures<'t>(&self, text: &'t str) -> Option<fancy_regex::Captures<'t>> {
        self.regex.captures(text).ok().flatten()
    }

    /// All non-overlapping matches
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<fancy_regex::Match<'t>> {
        self.regex.find_iter(text).filter_map(|m| m.ok()).collect()
    }

    /// The next match at or after `start`.
    ///
    /// Under the sticky flag the match must begin exactly at `start`.
    pub fn exec<'t>(&self, text: &'t str, start: usize) -> Option<fancy_regex::Match<'t>> {
        let found = self.regex.find_from_pos(text, start).ok().flatten()?;
        if self.sticky() && found.start() != start {
            return None;
        }
        Some(found)
    }
}
