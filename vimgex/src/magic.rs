//! Magicness levels for Vim patterns
//!
//! Vim interprets its metacharacters relative to one of four "magic"
//! levels. Each metacharacter has a threshold level: at or above the
//! threshold the bare character is special and the backslashed form is
//! literal; below it the roles swap. The level can change mid-pattern
//! with `\v`, `\m`, `\M` and `\V`, applying from that point rightward.

/// The four magic levels, in increasing order of magicness
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Magic {
    /// `\V` - every character except `\` is literal
    VeryNomagic,
    /// `\M` - like 'nomagic': `^` and `$` are still special
    Nomagic,
    /// `\m` - the default: `.`, `*`, `[]`, `~` are also special
    Magic,
    /// `\v` - every ASCII punctuation character is special
    VeryMagic,
}

impl Magic {
    /// Initial level from the `magic` option
    pub fn from_option(magic: bool) -> Self {
        if magic { Magic::Magic } else { Magic::Nomagic }
    }

    /// The level selected by a `\v`/`\m`/`\M`/`\V` switch, if `c` is one
    pub fn switch(c: char) -> Option<Magic> {
        match c {
            'v' => Some(Magic::VeryMagic),
            'm' => Some(Magic::Magic),
            'M' => Some(Magic::Nomagic),
            'V' => Some(Magic::VeryNomagic),
            _ => None,
        }
    }

    /// The threshold at which the bare character becomes a metacharacter,
    /// or `None` for characters that are never magic on their own.
    pub fn threshold(c: char) -> Option<Magic> {
        match c {
            '^' | '$' => Some(Magic::Nomagic),
            '.' | '*' | '[' | '~' => Some(Magic::Magic),
            '(' | ')' | '|' | '&' | '+' | '=' | '?' | '{' | '<' | '>' | '%' | '@' => {
                Some(Magic::VeryMagic)
            }
            _ => None,
        }
    }

    /// Whether `c` acts as a metacharacter at this level, given whether it
    /// was written with a backslash prefix. Escaping flips the role.
    pub fn is_meta(self, c: char, escaped: bool) -> bool {
        match Magic::threshold(c) {
            Some(threshold) => (self >= threshold) != escaped,
            None => false,
        }
    }
}
