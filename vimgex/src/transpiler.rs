//! The Vim-to-host pattern transpiler
//!
//! A single-pass scanner over the Vim pattern source. Every atom,
//! quantifier, grouping, assertion, collection, escape and magicness
//! switch is recognised and its host-dialect translation is emitted into
//! a [`TokenBuffer`]; the source is never read twice. Three constructs
//! rewrite tokens that were already emitted (see `tokens`): the
//! context-sensitive `$`, the `\@`-lookaround suffixes, and `\&`.
//!
//! Vim constructs that depend on editor state (cursor, marks, visual
//! area, buffer lines, external matches, composing characters) are
//! refused with `UnsupportedFeature` rather than mistranslated.

use crate::charclass::{self, CharClassKind, EMPTY_CLASS};
use crate::collection;
use crate::error::{CompileError, Result};
use crate::magic::Magic;
use crate::options::{self, Options};
use crate::tokens::{bol_anchor, eol_anchor, GroupHead, HostToken, TokenBuffer};

/// A quantifiable sub-expression that can never match.
///
/// The host rejects the empty class `[]`, so this group around a
/// never-succeeding assertion stands in for it.
pub(crate) const NEVER_MATCH: &str = "(?:(?!))";

/// The transpiler output: a host-dialect source string plus its flag set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    /// Host-dialect pattern source
    pub source: String,
    /// Flag characters in canonical order; always contains `s` and `v`
    pub flags: String,
}

/// Compile a Vim pattern to host source and flags
///
/// # Example
/// ```
/// use vimgex::{transpile, Options};
///
/// let compiled = transpile("\\(foo\\|bar\\)", &Options::new()).unwrap();
/// assert_eq!(compiled.source, "(foo|bar)");
/// assert_eq!(compiled.flags, "sv");
/// ```
pub fn transpile(pattern: &str, options: &Options) -> Result<Compiled> {
    let caller_flags = options::validate_flags(options.flags_or_default())?;

    let mut transpiler = Transpiler::new(pattern, options);
    transpiler.run()?;
    let source = transpiler.buf.render(options.string_match_or_default());

    let ignore_case = match transpiler.case_override {
        Some(on) => on,
        None => {
            options.ignorecase_or_default()
                && !(options.smartcase_or_default() && has_upper(pattern))
        }
    };
    let mut flag_chars: Vec<char> = caller_flags.chars().collect();
    flag_chars.push('s');
    flag_chars.push('v');
    if ignore_case {
        flag_chars.push('i');
    }
    let flags = options::canonical_flags(flag_chars.iter().copied());

    Ok(Compiled { source, flags })
}

/// Does the pattern contain an upper-case letter outside an escape?
fn has_upper(pattern: &str) -> bool {
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c.is_uppercase() {
            return true;
        }
    }
    false
}

/// One open group (or the top level) during scanning
struct Frame {
    /// Token index of the emitted `(`; `None` for the top level
    open_index: Option<usize>,
    /// Source offset of the opening token, for error reporting
    open_offset: usize,
    /// Token index of the current segment's `SegmentStart` marker
    segment_marker: usize,
}

struct Transpiler<'a> {
    pattern: &'a str,
    options: &'a Options,
    chars: Vec<(usize, char)>,
    pos: usize,
    buf: TokenBuffer,
    frames: Vec<Frame>,
    magic: Magic,
    string_match: bool,
    /// `^` is an anchor only here: at the start of a branch
    at_branch_start: bool,
    /// Token index of the most recent quantifiable atom, if any
    last_atom: Option<usize>,
    /// `GroupOpen` index of a group that just closed; a `\@` suffix
    /// consumes it
    last_group: Option<usize>,
    /// A `$` emitted as an anchor that a following atom would demote
    pending_eol: Option<usize>,
    /// The latest `\c`/`\C` seen, if any
    case_override: Option<bool>,
    /// A backref was just emitted; a literal digit after it must not
    /// extend the host's backref number
    digit_guard: bool,
    keyword_memo: Option<String>,
}

impl<'a> Transpiler<'a> {
    fn new(pattern: &'a str, options: &'a Options) -> Self {
        let mut buf = TokenBuffer::new();
        let segment_marker = buf.push(HostToken::SegmentStart { lookahead: false });
        Transpiler {
            pattern,
            options,
            chars: pattern.char_indices().collect(),
            pos: 0,
            buf,
            frames: vec![Frame {
                open_index: None,
                open_offset: 0,
                segment_marker,
            }],
            magic: Magic::from_option(options.magic_or_default()),
            string_match: options.string_match_or_default(),
            at_branch_start: true,
            last_atom: None,
            last_group: None,
            pending_eol: None,
            case_override: None,
            digit_guard: false,
            keyword_memo: None,
        }
    }

    // ----- cursor -----

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn peek_second(&self) -> Option<char> {
        self.chars.get(self.pos + 1).map(|&(_, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Byte offset of the next unread character
    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map(|&(o, _)| o)
            .unwrap_or(self.pattern.len())
    }

    fn advance_to(&mut self, byte: usize) {
        while self.offset() < byte {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// The source text consumed since `start`
    fn text_from(&self, start: usize) -> &str {
        &self.pattern[start..self.offset()]
    }

    fn invalid(&self, message: &str, offset: usize) -> CompileError {
        CompileError::invalid(message, self.pattern, offset)
    }

    fn unsupported(&self, start: usize) -> CompileError {
        CompileError::unsupported(self.text_from(start), self.pattern, start)
    }

    // ----- emission -----

    /// A new atom is about to be emitted: a tentatively-anchored `$`
    /// earlier in the branch turns out to be a literal, and a closed
    /// group is no longer eligible for a `\@` suffix.
    fn begin_atom(&mut self) {
        if let Some(index) = self.pending_eol.take() {
            self.buf.demote_eol(index);
        }
        self.last_group = None;
        self.digit_guard = false;
    }

    fn push_atom(&mut self, text: impl Into<String>) {
        self.begin_atom();
        let index = self.buf.push_text(text);
        self.last_atom = Some(index);
        self.at_branch_start = false;
    }

    /// Emit a zero-width assertion; it is not quantifiable
    fn push_assertion(&mut self, text: impl Into<String>) {
        self.begin_atom();
        self.buf.push_text(text);
        self.last_atom = None;
        self.at_branch_start = false;
    }

    fn push_literal(&mut self, c: char) {
        if self.digit_guard && c.is_ascii_digit() {
            self.push_atom(format!("\\x{:02x}", c as u32));
        } else {
            self.push_atom(escape_literal(c));
        }
    }

    /// Leave a pending `$` as the anchor it was emitted as
    fn commit_pending_eol(&mut self) {
        self.pending_eol = None;
    }

    // ----- main loop -----

    fn run(&mut self) -> Result<()> {
        while let Some(c) = self.peek() {
            let start = self.offset();
            if c == '\\' {
                self.bump();
                match self.bump() {
                    Some(escaped) => self.escaped(escaped, start)?,
                    None => self.push_literal('\\'),
                }
            } else {
                self.bump();
                if self.magic.is_meta(c, false) {
                    self.meta(c, start)?;
                } else {
                    self.push_literal(c);
                }
            }
        }
        self.commit_pending_eol();
        if self.frames.len() > 1 {
            let offset = self.frames.last().map(|f| f.open_offset).unwrap_or(0);
            return Err(self.invalid("Unmatched opening group", offset));
        }
        Ok(())
    }

    /// A backslash-prefixed character
    fn escaped(&mut self, c: char, start: usize) -> Result<()> {
        if let Some(level) = Magic::switch(c) {
            self.magic = level;
            return Ok(());
        }
        match c {
            'c' => {
                self.case_override = Some(true);
                Ok(())
            }
            'C' => {
                self.case_override = Some(false);
                Ok(())
            }
            'e' => {
                self.push_atom("\\x1b");
                Ok(())
            }
            't' => {
                self.push_atom("\\t");
                Ok(())
            }
            'r' => {
                self.push_atom("\\r");
                Ok(())
            }
            'b' => {
                self.push_atom("\\x08");
                Ok(())
            }
            'n' => {
                self.push_atom("\\n");
                // `^` right after `\n` is still an anchor
                self.at_branch_start = true;
                Ok(())
            }
            '1'..='9' => {
                self.push_atom(format!("\\{c}"));
                self.digit_guard = true;
                Ok(())
            }
            '_' => self.underscore(start),
            'z' => {
                if matches!(self.peek(), Some('s') | Some('e') | Some('('))
                    || self.peek().map_or(false, |c| c.is_ascii_digit())
                {
                    self.bump();
                }
                Err(self.unsupported(start))
            }
            'Z' => Err(self.unsupported(start)),
            _ => {
                if let Some(class) = simple_class(c, false) {
                    self.push_atom(class);
                    return Ok(());
                }
                if let Some((kind, skip_digits)) = option_class_kind(c) {
                    let class = self.option_class(kind, skip_digits, false)?;
                    self.push_atom(class);
                    return Ok(());
                }
                if self.magic.is_meta(c, true) {
                    self.meta(c, start)
                } else {
                    self.push_literal(c);
                    Ok(())
                }
            }
        }
    }

    /// A character acting as a metacharacter at the current magic level
    fn meta(&mut self, c: char, start: usize) -> Result<()> {
        match c {
            '^' => {
                if self.at_branch_start {
                    self.push_assertion(bol_anchor(self.string_match));
                } else {
                    self.push_literal('^');
                }
                Ok(())
            }
            '$' => {
                self.tentative_eol();
                Ok(())
            }
            '.' => {
                self.push_atom("[^\\n]");
                Ok(())
            }
            '*' => self.quantifier("*", start),
            '+' => self.quantifier("+", start),
            '=' | '?' => self.quantifier("?", start),
            '{' => self.braces(start),
            '(' => {
                self.open_group(GroupHead::Capture, start);
                Ok(())
            }
            ')' => self.close_group(start),
            '|' => {
                self.alternation();
                Ok(())
            }
            '&' => {
                self.intersection();
                Ok(())
            }
            '<' => self.word_boundary(true),
            '>' => self.word_boundary(false),
            '@' => self.lookaround(start),
            '%' => self.percent(start),
            '[' => self.collection(false),
            '~' => Err(self.unsupported(start)),
            _ => {
                self.push_literal(c);
                Ok(())
            }
        }
    }

    // ----- anchors -----

    /// `$` in anchor position; demoted to a literal if the branch goes on
    fn tentative_eol(&mut self) {
        self.begin_atom();
        let index = self.buf.push(HostToken::Eol { anchored: true });
        self.pending_eol = Some(index);
        self.last_atom = None;
        self.at_branch_start = false;
    }

    // ----- quantifiers -----

    fn quantifier(&mut self, q: &str, start: usize) -> Result<()> {
        // a pending `$` is mid-branch after all, and the quantifier
        // applies to the demoted literal
        if let Some(index) = self.pending_eol.take() {
            self.buf.demote_eol(index);
            self.last_atom = Some(index);
        }
        if self.last_atom.is_none() {
            return Err(self.invalid("Nothing to repeat", start));
        }
        self.buf.push_text(q);
        self.last_atom = None;
        self.last_group = None;
        Ok(())
    }

    /// `\{n,m}` and its lazy/open-ended forms
    fn braces(&mut self, start: usize) -> Result<()> {
        let lazy = self.eat('-');
        let min = self.digits();
        let comma = self.eat(',');
        let max = self.digits();
        let closed = if self.eat('}') {
            true
        } else if self.peek() == Some('\\') && self.peek_second() == Some('}') {
            self.bump();
            self.bump();
            true
        } else {
            false
        };
        if !closed {
            return Err(self.invalid("Incomplete quantifier", start));
        }
        let q = match (min, comma, max) {
            (None, _, None) => "*".to_string(),
            (Some(n), false, _) => format!("{{{n}}}"),
            (Some(n), true, None) => format!("{{{n},}}"),
            (None, _, Some(m)) => format!("{{0,{m}}}"),
            (Some(n), true, Some(m)) => {
                let n = n.min(m);
                format!("{{{n},{m}}}")
            }
        };
        let q = if lazy { format!("{q}?") } else { q };
        self.quantifier(&q, start)
    }

    fn digits(&mut self) -> Option<u32> {
        let mut value: u32 = 0;
        let mut any = false;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value.saturating_mul(10).saturating_add(d);
            any = true;
            self.bump();
        }
        any.then_some(value)
    }

    // ----- groups, alternation, segments -----

    fn open_group(&mut self, head: GroupHead, start: usize) {
        self.begin_atom();
        let open_index = self.buf.push(HostToken::GroupOpen(head));
        let segment_marker = self.buf.push(HostToken::SegmentStart { lookahead: false });
        self.frames.push(Frame {
            open_index: Some(open_index),
            open_offset: start,
            segment_marker,
        });
        self.at_branch_start = true;
        self.last_atom = None;
    }

    fn close_group(&mut self, start: usize) -> Result<()> {
        self.commit_pending_eol();
        if self.frames.len() < 2 {
            return Err(self.invalid("Unmatched closing group", start));
        }
        let Some(frame) = self.frames.pop() else {
            return Err(self.invalid("Unmatched closing group", start));
        };
        self.buf.push(HostToken::GroupClose);
        self.last_group = frame.open_index;
        self.last_atom = frame.open_index;
        self.at_branch_start = false;
        self.digit_guard = false;
        Ok(())
    }

    fn alternation(&mut self) {
        self.commit_pending_eol();
        self.buf.push_text("|");
        let segment_marker = self.buf.push(HostToken::SegmentStart { lookahead: false });
        if let Some(frame) = self.frames.last_mut() {
            frame.segment_marker = segment_marker;
        }
        self.at_branch_start = true;
        self.last_atom = None;
        self.last_group = None;
    }

    /// `\&`: every concat segment of a branch must match at the same
    /// position, so the segment emitted so far becomes a lookahead
    fn intersection(&mut self) {
        self.commit_pending_eol();
        if let Some(frame) = self.frames.last() {
            let marker = frame.segment_marker;
            self.buf
                .replace(marker, HostToken::SegmentStart { lookahead: true });
        }
        self.buf.push_text(")");
        let segment_marker = self.buf.push(HostToken::SegmentStart { lookahead: false });
        if let Some(frame) = self.frames.last_mut() {
            frame.segment_marker = segment_marker;
        }
        self.at_branch_start = true;
        self.last_atom = None;
        self.last_group = None;
    }

    /// `\@=` / `\@!` / `\@<=` / `\@<!` applied to the preceding group
    fn lookaround(&mut self, start: usize) -> Result<()> {
        // a numeric prefix (`\@123<=`) is accepted; the byte bound Vim
        // would enforce has no host counterpart and is dropped
        let bound = self.digits();
        let head = match self.peek() {
            Some('=') if bound.is_none() => {
                self.bump();
                GroupHead::Lookahead { negated: false }
            }
            Some('!') if bound.is_none() => {
                self.bump();
                GroupHead::Lookahead { negated: true }
            }
            Some('>') if bound.is_none() => {
                self.bump();
                return Err(self.unsupported(start));
            }
            Some('<') => {
                self.bump();
                match self.peek() {
                    Some('=') => {
                        self.bump();
                        GroupHead::Lookbehind { negated: false }
                    }
                    Some('!') => {
                        self.bump();
                        GroupHead::Lookbehind { negated: true }
                    }
                    _ => return Err(self.invalid("Invalid character after \\@", start)),
                }
            }
            _ => return Err(self.invalid("Invalid character after \\@", start)),
        };
        let Some(open_index) = self.last_group.take() else {
            return Err(self.invalid("Nothing to repeat", start));
        };
        self.buf.set_group_head(open_index, head);
        self.last_atom = None;
        Ok(())
    }

    // ----- the \% family -----

    fn percent(&mut self, start: usize) -> Result<()> {
        match self.peek() {
            Some('(') => {
                self.bump();
                self.open_group(GroupHead::NonCapture, start);
                Ok(())
            }
            // string anchors: only the absolute start/end, never an
            // embedded newline
            Some('^') => {
                self.bump();
                self.push_assertion("^");
                Ok(())
            }
            Some('$') => {
                self.bump();
                self.push_assertion("$");
                Ok(())
            }
            Some('[') => {
                self.bump();
                Err(self.unsupported(start))
            }
            Some('V') | Some('C') => {
                self.bump();
                Err(self.unsupported(start))
            }
            Some('#') => {
                self.bump();
                if self.eat('=') {
                    self.digits();
                }
                Err(self.unsupported(start))
            }
            Some('\'') => {
                self.bump();
                self.bump();
                Err(self.unsupported(start))
            }
            Some('d') => {
                self.bump();
                match self.digits() {
                    Some(code) => {
                        self.push_code_atom(code);
                        Ok(())
                    }
                    None => Err(self.invalid("Invalid character after \\%", start)),
                }
            }
            Some('o') => {
                self.bump();
                self.char_ref_octal(start)
            }
            Some('x') => {
                self.bump();
                self.char_ref_hex(start, 2)
            }
            Some('u') => {
                self.bump();
                self.char_ref_hex(start, 4)
            }
            Some('U') => {
                self.bump();
                self.char_ref_hex(start, 8)
            }
            Some('<') | Some('>') => {
                self.bump();
                self.position_anchor(start)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.position_anchor(start),
            _ => Err(self.invalid("Invalid character after \\%", start)),
        }
    }

    /// `\%23l`-style line/column/virtual-column anchors and `\%'m`
    /// mark anchors: all editor-state dependent, all refused
    fn position_anchor(&mut self, start: usize) -> Result<()> {
        if self.eat('\'') {
            self.bump();
            return Err(self.unsupported(start));
        }
        let has_position = if self.eat('.') { true } else { self.digits().is_some() };
        if !has_position {
            return Err(self.invalid("Invalid character after \\%", start));
        }
        match self.peek() {
            Some('l') | Some('c') | Some('v') => {
                self.bump();
                Err(self.unsupported(start))
            }
            _ => Err(self.invalid("Invalid character after \\%", start)),
        }
    }

    fn char_ref_octal(&mut self, start: usize) -> Result<()> {
        let mut value: u32 = 0;
        let mut any = false;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(8)) {
            if value * 8 + d > 0o377 {
                break;
            }
            value = value * 8 + d;
            any = true;
            self.bump();
        }
        if !any {
            return Err(self.invalid("Invalid character after \\%", start));
        }
        self.push_code_atom(value);
        Ok(())
    }

    fn char_ref_hex(&mut self, start: usize, max_digits: usize) -> Result<()> {
        let mut value: u32 = 0;
        let mut digits = 0;
        while digits < max_digits {
            match self.peek().and_then(|c| c.to_digit(16)) {
                Some(d) => {
                    value = value.saturating_mul(16).saturating_add(d);
                    digits += 1;
                    self.bump();
                }
                None => break,
            }
        }
        if digits == 0 {
            return Err(self.invalid("Invalid character after \\%", start));
        }
        self.push_code_atom(value);
        Ok(())
    }

    /// Emit a numeric character reference as an atom
    fn push_code_atom(&mut self, code: u32) {
        if code > 0x10ffff {
            // beyond the Unicode maximum nothing can ever match
            self.push_atom(NEVER_MATCH);
        } else if code <= 0xff {
            self.push_atom(format!("\\x{code:02x}"));
        } else {
            self.push_atom(format!("\\u{{{code:x}}}"));
        }
    }

    // ----- \_ variants -----

    fn underscore(&mut self, start: usize) -> Result<()> {
        match self.bump() {
            Some('.') => {
                self.push_atom(".");
                Ok(())
            }
            Some('^') => {
                self.push_assertion(bol_anchor(self.string_match));
                Ok(())
            }
            Some('$') => {
                self.push_assertion(eol_anchor(self.string_match));
                Ok(())
            }
            Some('[') => self.collection(true),
            Some(c) => {
                if let Some(class) = simple_class(c, true) {
                    self.push_atom(class);
                    return Ok(());
                }
                if let Some((kind, skip_digits)) = option_class_kind(c) {
                    let class = self.option_class(kind, skip_digits, true)?;
                    self.push_atom(class);
                    return Ok(());
                }
                Err(self.invalid("Invalid use of \\_", start))
            }
            None => Err(self.invalid("Invalid use of \\_", start)),
        }
    }

    // ----- word boundaries and option classes -----

    fn word_boundary(&mut self, start_side: bool) -> Result<()> {
        let class = self.keyword_class()?;
        let text = if start_side {
            format!("(?<!{class})(?={class})")
        } else {
            format!("(?<={class})(?!{class})")
        };
        self.push_assertion(text);
        Ok(())
    }

    /// The iskeyword class, compiled once per pattern
    fn keyword_class(&mut self) -> Result<String> {
        if let Some(class) = &self.keyword_memo {
            return Ok(class.clone());
        }
        let class = charclass::compile_char_class(
            self.options.iskeyword_or_default(),
            CharClassKind::Keyword,
        )?;
        self.keyword_memo = Some(class.clone());
        Ok(class)
    }

    /// `\i`/`\k`/`\f`/`\p` and friends
    fn option_class(
        &mut self,
        kind: CharClassKind,
        skip_digits: bool,
        newline: bool,
    ) -> Result<String> {
        let class = match kind {
            CharClassKind::Keyword => self.keyword_class()?,
            CharClassKind::Ident => {
                charclass::compile_char_class(self.options.isident_or_default(), kind)?
            }
            CharClassKind::Fname => {
                charclass::compile_char_class(self.options.isfname_or_default(), kind)?
            }
            CharClassKind::Print => {
                charclass::compile_char_class(self.options.isprint_or_default(), kind)?
            }
            CharClassKind::None => EMPTY_CLASS.to_string(),
        };
        let class = if skip_digits && class != EMPTY_CLASS {
            format!("[{class}--[0-9]]")
        } else {
            class
        };
        Ok(if newline {
            if class == EMPTY_CLASS {
                "[\\n]".to_string()
            } else {
                format!("[\\n{class}]")
            }
        } else if class == EMPTY_CLASS {
            NEVER_MATCH.to_string()
        } else {
            class
        })
    }

    // ----- collections -----

    fn collection(&mut self, include_newline: bool) -> Result<()> {
        let pattern = self.pattern;
        let rest_start = self.offset();
        let rest = &pattern[rest_start..];
        match collection::find_collection_end(rest) {
            None => {
                // no closing bracket: the `[` is an ordinary character
                self.push_literal('[');
                Ok(())
            }
            Some(end) => {
                let class = collection::compile_collection(
                    pattern,
                    &rest[..end],
                    rest_start,
                    include_newline,
                    self.options,
                )?;
                self.advance_to(rest_start + end + 1);
                self.push_atom(class);
                Ok(())
            }
        }
    }
}

/// Escape a literal character for the host dialect
fn escape_literal(c: char) -> String {
    match c {
        '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{' | '}' => {
            format!("\\{c}")
        }
        _ => c.to_string(),
    }
}

/// The fixed single-character classes and their `\_` newline variants
fn simple_class(c: char, newline: bool) -> Option<&'static str> {
    Some(match (c, newline) {
        ('s', false) => "[ \\t]",
        ('s', true) => "[ \\t\\n]",
        ('S', false) => "[^ \\t\\n]",
        ('S', true) => "[^ \\t]",
        ('d', false) => "[0-9]",
        ('d', true) => "[0-9\\n]",
        ('D', false) => "[^0-9\\n]",
        ('D', true) => "[^0-9]",
        ('x', false) => "[0-9A-Fa-f]",
        ('x', true) => "[0-9A-Fa-f\\n]",
        ('X', false) => "[^0-9A-Fa-f\\n]",
        ('X', true) => "[^0-9A-Fa-f]",
        ('o', false) => "[0-7]",
        ('o', true) => "[0-7\\n]",
        ('O', false) => "[^0-7\\n]",
        ('O', true) => "[^0-7]",
        ('w', false) => "[0-9A-Za-z_]",
        ('w', true) => "[0-9A-Za-z_\\n]",
        ('W', false) => "[^0-9A-Za-z_\\n]",
        ('W', true) => "[^0-9A-Za-z_]",
        ('h', false) => "[A-Za-z_]",
        ('h', true) => "[A-Za-z_\\n]",
        ('H', false) => "[^A-Za-z_\\n]",
        ('H', true) => "[^A-Za-z_]",
        ('a', false) => "[A-Za-z]",
        ('a', true) => "[A-Za-z\\n]",
        ('A', false) => "[^A-Za-z\\n]",
        ('A', true) => "[^A-Za-z]",
        // exclusion keeps these one-cased even under the `i` flag
        ('l', false) => "[[a-z]--[A-Z]]",
        ('l', true) => "[\\n[[a-z]--[A-Z]]]",
        ('L', false) => "[^a-z\\n]",
        ('L', true) => "[^a-z]",
        ('u', false) => "[[A-Z]--[a-z]]",
        ('u', true) => "[\\n[[A-Z]--[a-z]]]",
        ('U', false) => "[^A-Z\\n]",
        ('U', true) => "[^A-Z]",
        _ => return None,
    })
}

/// The option-string-backed classes; the second field is the
/// digit-excluding upper-case variant
fn option_class_kind(c: char) -> Option<(CharClassKind, bool)> {
    Some(match c {
        'i' => (CharClassKind::Ident, false),
        'I' => (CharClassKind::Ident, true),
        'k' => (CharClassKind::Keyword, false),
        'K' => (CharClassKind::Keyword, true),
        'f' => (CharClassKind::Fname, false),
        'F' => (CharClassKind::Fname, true),
        'p' => (CharClassKind::Print, false),
        'P' => (CharClassKind::Print, true),
        _ => return None,
    })
}
