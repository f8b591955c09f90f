//! Output buffer of host-dialect tokens
//!
//! The transpiler emits into a buffer of variant tokens rather than a
//! plain string because three Vim constructs rewrite output that was
//! already emitted: a `$` tentatively emitted as an anchor becomes a
//! literal when more atoms follow in its branch, a group head becomes a
//! lookaround head when a `\@=`-style suffix follows its `\)`, and `\&`
//! wraps the whole preceding concat segment in a lookahead. Each rewrite
//! is a replace-at-index on this buffer; a final render pass turns the
//! tokens into the host source string.

/// How an emitted `(` renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GroupHead {
    /// `(`
    Capture,
    /// `(?:`
    NonCapture,
    /// `(?=` / `(?!`
    Lookahead { negated: bool },
    /// `(?<=` / `(?<!`
    Lookbehind { negated: bool },
}

impl GroupHead {
    fn as_str(self) -> &'static str {
        match self {
            GroupHead::Capture => "(",
            GroupHead::NonCapture => "(?:",
            GroupHead::Lookahead { negated: false } => "(?=",
            GroupHead::Lookahead { negated: true } => "(?!",
            GroupHead::Lookbehind { negated: false } => "(?<=",
            GroupHead::Lookbehind { negated: true } => "(?<!",
        }
    }
}

/// One emitted host token
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostToken {
    /// Finalised host text
    Text(String),
    /// Placeholder at the start of a concat segment; becomes the `(?=`
    /// head when the segment turns out to be followed by `\&`
    SegmentStart { lookahead: bool },
    /// An opening parenthesis whose head may still be rewritten
    GroupOpen(GroupHead),
    /// The matching `)`
    GroupClose,
    /// A `$` that is an end-of-line anchor unless later demoted
    Eol { anchored: bool },
}

/// The transpiler's output buffer
#[derive(Debug, Default)]
pub(crate) struct TokenBuffer {
    tokens: Vec<HostToken>,
}

impl TokenBuffer {
    pub fn new() -> Self {
        TokenBuffer::default()
    }

    /// Append a token, returning its index
    pub fn push(&mut self, token: HostToken) -> usize {
        self.tokens.push(token);
        self.tokens.len() - 1
    }

    /// Append finalised host text
    pub fn push_text(&mut self, text: impl Into<String>) -> usize {
        self.push(HostToken::Text(text.into()))
    }

    /// Replace the token at `index`
    pub fn replace(&mut self, index: usize, token: HostToken) {
        self.tokens[index] = token;
    }

    /// Rewrite the group head at `index`
    pub fn set_group_head(&mut self, index: usize, head: GroupHead) {
        self.tokens[index] = HostToken::GroupOpen(head);
    }

    /// Demote the tentative anchor at `index` to a literal `$`
    pub fn demote_eol(&mut self, index: usize) {
        self.tokens[index] = HostToken::Eol { anchored: false };
    }

    /// Render the buffer to the host source string
    pub fn render(&self, string_match: bool) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                HostToken::Text(text) => out.push_str(text),
                HostToken::SegmentStart { lookahead: true } => out.push_str("(?="),
                HostToken::SegmentStart { lookahead: false } => {}
                HostToken::GroupOpen(head) => out.push_str(head.as_str()),
                HostToken::GroupClose => out.push(')'),
                HostToken::Eol { anchored: true } => out.push_str(eol_anchor(string_match)),
                HostToken::Eol { anchored: false } => out.push_str("\\$"),
            }
        }
        out
    }
}

/// The start-of-line anchor emission
pub(crate) fn bol_anchor(string_match: bool) -> &'static str {
    if string_match {
        "^"
    } else {
        "(?:^|(?<=\\n))"
    }
}

/// The end-of-line anchor emission
pub(crate) fn eol_anchor(string_match: bool) -> &'static str {
    if string_match {
        "$"
    } else {
        "(?:(?=\\n)|$)"
    }
}
