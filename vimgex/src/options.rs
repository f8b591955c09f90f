//! Caller-facing options bundle
//!
//! Mirrors the handful of Vim settings that influence how a pattern is
//! interpreted: the four character-class option strings, the initial
//! magicness, case handling, and the host-engine flag characters. Every
//! field is optional; unset fields fall back to Vim's stock defaults.

use crate::error::{CompileError, Result};

/// Vim's default 'isfname' (unix flavour)
pub const DEFAULT_ISFNAME: &str = "@,48-57,/,.,-,_,+,,,#,$,%,~,=";
/// Vim's default 'isident'
pub const DEFAULT_ISIDENT: &str = "@,48-57,_,192-255";
/// Vim's default 'iskeyword'
pub const DEFAULT_ISKEYWORD: &str = "@,48-57,_,192-255";
/// Vim's default 'isprint'
pub const DEFAULT_ISPRINT: &str = "@,161-255";

/// Flag characters a caller may pass, in canonical output order.
///
/// `s` and `v` are accepted as no-ops since the compiler always emits
/// them; `m` and `u` (and anything else) are rejected.
const ACCEPTED_FLAGS: &str = "dgisvy";

/// Options controlling pattern compilation
///
/// All fields are optional; [`merge`](Options::merge) combines two
/// bundles field-wise with the newer bundle winning, which is how a
/// wrapper re-build layers caller options over stored ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Host flag characters (`d`, `g`, `i`, `y`, plus no-op `s`, `v`)
    pub flags: Option<String>,
    /// The 'isfname' option string (`\f`, `[[:fname:]]`)
    pub isfname: Option<String>,
    /// The 'isident' option string (`\i`, `[[:ident:]]`)
    pub isident: Option<String>,
    /// The 'iskeyword' option string (`\k`, `\<`, `\>`, `[[:keyword:]]`)
    pub iskeyword: Option<String>,
    /// The 'isprint' option string (`\p`, `[[:print:]]`)
    pub isprint: Option<String>,
    /// Initial magicness level (default true = magic)
    pub magic: Option<bool>,
    /// Case-insensitive matching (default false)
    pub ignorecase: Option<bool>,
    /// Ignore 'ignorecase' when the pattern contains an upper-case letter
    pub smartcase: Option<bool>,
    /// Treat the input as a single line: `^`/`$` anchor only at the
    /// string boundaries (default false)
    pub string_match: Option<bool>,
}

impl Options {
    /// An empty bundle; every field falls back to its default
    pub fn new() -> Self {
        Options::default()
    }

    /// Set the flag string
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    /// Set the 'isfname' option string
    pub fn isfname(mut self, value: impl Into<String>) -> Self {
        self.isfname = Some(value.into());
        self
    }

    /// Set the 'isident' option string
    pub fn isident(mut self, value: impl Into<String>) -> Self {
        self.isident = Some(value.into());
        self
    }

    /// Set the 'iskeyword' option string
    pub fn iskeyword(mut self, value: impl Into<String>) -> Self {
        self.iskeyword = Some(value.into());
        self
    }

    /// Set the 'isprint' option string
    pub fn isprint(mut self, value: impl Into<String>) -> Self {
        self.isprint = Some(value.into());
        self
    }

    /// Set the initial magicness
    pub fn magic(mut self, magic: bool) -> Self {
        self.magic = Some(magic);
        self
    }

    /// Set case-insensitive matching
    pub fn ignorecase(mut self, ignorecase: bool) -> Self {
        self.ignorecase = Some(ignorecase);
        self
    }

    /// Set smart case handling
    pub fn smartcase(mut self, smartcase: bool) -> Self {
        self.smartcase = Some(smartcase);
        self
    }

    /// Set single-line anchor semantics
    pub fn string_match(mut self, string_match: bool) -> Self {
        self.string_match = Some(string_match);
        self
    }

    /// Layer `over` on top of `self`; set fields in `over` win
    pub fn merge(&self, over: &Options) -> Options {
        Options {
            flags: over.flags.clone().or_else(|| self.flags.clone()),
            isfname: over.isfname.clone().or_else(|| self.isfname.clone()),
            isident: over.isident.clone().or_else(|| self.isident.clone()),
            iskeyword: over.iskeyword.clone().or_else(|| self.iskeyword.clone()),
            isprint: over.isprint.clone().or_else(|| self.isprint.clone()),
            magic: over.magic.or(self.magic),
            ignorecase: over.ignorecase.or(self.ignorecase),
            smartcase: over.smartcase.or(self.smartcase),
            string_match: over.string_match.or(self.string_match),
        }
    }

    /// Resolved flag string (may still be invalid; see [`validate_flags`])
    pub fn flags_or_default(&self) -> &str {
        self.flags.as_deref().unwrap_or("")
    }

    /// Resolved 'isfname' value
    pub fn isfname_or_default(&self) -> &str {
        self.isfname.as_deref().unwrap_or(DEFAULT_ISFNAME)
    }

    /// Resolved 'isident' value
    pub fn isident_or_default(&self) -> &str {
        self.isident.as_deref().unwrap_or(DEFAULT_ISIDENT)
    }

    /// Resolved 'iskeyword' value
    pub fn iskeyword_or_default(&self) -> &str {
        self.iskeyword.as_deref().unwrap_or(DEFAULT_ISKEYWORD)
    }

    /// Resolved 'isprint' value
    pub fn isprint_or_default(&self) -> &str {
        self.isprint.as_deref().unwrap_or(DEFAULT_ISPRINT)
    }

    /// Resolved magicness
    pub fn magic_or_default(&self) -> bool {
        self.magic.unwrap_or(true)
    }

    /// Resolved 'ignorecase'
    pub fn ignorecase_or_default(&self) -> bool {
        self.ignorecase.unwrap_or(false)
    }

    /// Resolved 'smartcase'
    pub fn smartcase_or_default(&self) -> bool {
        self.smartcase.unwrap_or(false)
    }

    /// Resolved single-line semantics
    pub fn string_match_or_default(&self) -> bool {
        self.string_match.unwrap_or(false)
    }
}

/// Validate a caller flag string and return it in canonical order.
///
/// Duplicates collapse; an unknown character (including `m` and `u`,
/// which the host would accept but this dialect forbids) is an
/// `InvalidPattern` "Invalid flags" error carrying the flag string and
/// the byte offset of the bad character.
pub fn validate_flags(flags: &str) -> Result<String> {
    for (offset, c) in flags.char_indices() {
        if !ACCEPTED_FLAGS.contains(c) {
            return Err(CompileError::invalid("Invalid flags", flags, offset));
        }
    }
    Ok(canonical_flags(flags.chars()))
}

/// Collect flag characters into the canonical `d g i s v y` order
pub(crate) fn canonical_flags(chars: impl Iterator<Item = char> + Clone) -> String {
    ACCEPTED_FLAGS
        .chars()
        .filter(|f| chars.clone().any(|c| c == *f))
        .collect()
}
