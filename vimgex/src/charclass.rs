//! Character-class compiler for Vim option strings
//!
//! Compiles the comma-separated pattern format used by Vim's 'isfname',
//! 'isident', 'iskeyword' and 'isprint' options into a host character
//! class. The option string is executed left to right against a set of
//! code points 1-255 (entries add, `^`-prefixed entries remove), a
//! type-specific overlay is applied, and the result is emitted as a
//! sorted, range-compressed class, optionally followed by a fixed
//! Unicode tail sub-expression.

use crate::error::{CompileError, Result};

/// Which option the class is compiled for
///
/// The kind selects the forcing overlay applied after the user's entries
/// and the Unicode tail appended to the emitted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClassKind {
    /// 'isfname'
    Fname,
    /// 'isident'
    Ident,
    /// 'iskeyword'
    Keyword,
    /// 'isprint'
    Print,
    /// No overlay, no tail
    None,
}

/// The class emitted for an empty code-point set with no tail.
///
/// The host engine rejects empty classes, so the transpiler substitutes
/// a never-matching sub-expression wherever this shows up standalone.
pub(crate) const EMPTY_CLASS: &str = "[]";

/// The `@` shorthand: Vim's "alpha" set
const ALPHA_RANGES: &[(u16, u16)] = &[
    (0x41, 0x5a),
    (0x61, 0x7a),
    (0xb5, 0xb5),
    (0xc0, 0xd6),
    (0xd8, 0xf6),
    (0xf8, 0xff),
];

/// Unicode tail for 'isfname' and 'isprint'
const TAIL_LINEAR: &str = "[\\xa0-\\u{10ffff}]";
/// Unicode tail for 'iskeyword'; not exactly the same set as Vim's
const TAIL_KEYWORD: &str = "[[\\p{L}\\p{N}\\p{Emoji}]--[\\x00-\\xff]]";

/// Compile an option string to a host character class
pub fn compile_char_class(option: &str, kind: CharClassKind) -> Result<String> {
    compile_char_class_with(option, kind, true)
}

/// Compile an option string, optionally suppressing the Unicode tail.
///
/// With `unicode` off, the tail is omitted and the 'isfname'/'isprint'
/// overlays keep codes 160-255 instead of deferring them to the tail.
pub fn compile_char_class_with(option: &str, kind: CharClassKind, unicode: bool) -> Result<String> {
    let mut set = [false; 256];
    run_option_string(option, &mut set)?;
    apply_overlay(kind, unicode, &mut set);

    let mut body = emit_ranges(&set);
    if unicode {
        match kind {
            CharClassKind::Fname | CharClassKind::Print => body.push_str(TAIL_LINEAR),
            CharClassKind::Keyword => body.push_str(TAIL_KEYWORD),
            CharClassKind::Ident | CharClassKind::None => {}
        }
    }
    Ok(format!("[{body}]"))
}

/// Execute the option string's entries against the accumulator set
fn run_option_string(option: &str, set: &mut [bool; 256]) -> Result<()> {
    let chars: Vec<(usize, char)> = option.char_indices().collect();
    let len = chars.len();
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);
    let mut i = 0;

    while i < len {
        // spaces after a comma are trimmed; spaces before one are not
        while at(i) == Some(' ') {
            i += 1;
        }
        if i >= len {
            break;
        }
        let entry_start = chars[i].0;
        let mut remove = false;
        let first: u32;

        if at(i) == Some('^') && i + 1 == len {
            // `^` at end of input is a literal caret
            first = '^' as u32;
            i += 1;
        } else if at(i) == Some('^') && at(i + 1) == Some('-') && i + 2 < len {
            // `^-^` form (and friends): the caret is a range start
            first = '^' as u32;
            i += 1;
        } else {
            if at(i) == Some('^') {
                remove = true;
                i += 1;
            }
            let c = match at(i) {
                Some(c) => c,
                None => {
                    return Err(CompileError::bad_option("Invalid keyword", option, entry_start))
                }
            };
            if c == '@' && at(i + 1) != Some('-') {
                // the alpha shorthand
                for &(lo, hi) in ALPHA_RANGES {
                    mark(set, lo as u32, hi as u32, remove);
                }
                i = expect_terminator(option, &chars, i + 1, entry_start)?;
                continue;
            }
            if c.is_ascii_digit() {
                first = parse_number(&chars, &mut i);
            } else {
                first = c as u32;
                i += 1;
            }
        }

        // an optional `-` introduces the second field of a range
        let second = if at(i) == Some('-') && i + 1 < len && at(i + 1) != Some(',') {
            i += 1;
            let c = match at(i) {
                Some(c) => c,
                None => {
                    return Err(CompileError::bad_option("Invalid keyword", option, entry_start))
                }
            };
            if c.is_ascii_digit() {
                parse_number(&chars, &mut i)
            } else {
                i += 1;
                c as u32
            }
        } else if at(i) == Some('-') {
            // a dangling `-` after a value is malformed
            return Err(CompileError::bad_option("Invalid keyword", option, entry_start));
        } else {
            first
        };

        if first < 1 || second < first || second > 255 {
            return Err(CompileError::bad_option(
                "Invalid code range",
                option,
                entry_start,
            ));
        }
        mark(set, first, second, remove);
        i = expect_terminator(option, &chars, i, entry_start)?;
    }
    Ok(())
}

/// Read a run of decimal digits as a code value (saturating)
fn parse_number(chars: &[(usize, char)], i: &mut usize) -> u32 {
    let mut value: u32 = 0;
    while let Some(&(_, c)) = chars.get(*i) {
        match c.to_digit(10) {
            Some(d) => {
                value = value.saturating_mul(10).saturating_add(d);
                *i += 1;
            }
            None => break,
        }
    }
    value
}

/// After an entry, only a comma or the end of the string may follow
fn expect_terminator(
    option: &str,
    chars: &[(usize, char)],
    i: usize,
    entry_start: usize,
) -> Result<usize> {
    match chars.get(i) {
        None => Ok(i),
        Some(&(_, ',')) => Ok(i + 1),
        Some(_) => Err(CompileError::bad_option("Invalid keyword", option, entry_start)),
    }
}

/// Add or remove an inclusive code range in the accumulator
fn mark(set: &mut [bool; 256], first: u32, second: u32, remove: bool) {
    for code in first..=second.min(255) {
        set[code as usize] = !remove;
    }
}

/// Apply the type-specific forcing overlay
fn apply_overlay(kind: CharClassKind, unicode: bool, set: &mut [bool; 256]) {
    match kind {
        CharClassKind::Fname => {
            if unicode {
                clear(set, 160, 255);
            }
        }
        // the identifier and keyword sets are ASCII-only; keyword
        // characters above that come from the Unicode tail
        CharClassKind::Ident | CharClassKind::Keyword => clear(set, 128, 255),
        CharClassKind::Print => {
            for code in 32..=126 {
                set[code] = true;
            }
            if unicode {
                clear(set, 160, 255);
            }
        }
        CharClassKind::None => {}
    }
}

fn clear(set: &mut [bool; 256], from: usize, to: usize) {
    for code in from..=to {
        set[code] = false;
    }
}

/// Emit the accumulator as `\xNN` codes, collapsing runs of three or
/// more consecutive codes to `\xNN-\xNN` ranges
fn emit_ranges(set: &[bool; 256]) -> String {
    let mut out = String::new();
    let mut code = 1;
    while code <= 255 {
        if !set[code] {
            code += 1;
            continue;
        }
        let mut end = code;
        while end < 255 && set[end + 1] {
            end += 1;
        }
        if end - code >= 2 {
            out.push_str(&format!("\\x{:02x}-\\x{:02x}", code, end));
        } else {
            for c in code..=end {
                out.push_str(&format!("\\x{:02x}", c));
            }
        }
        code = end + 1;
    }
    out
}
