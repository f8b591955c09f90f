//! The `[...]` collection sub-parser
//!
//! Collections have their own escape conventions, so they are parsed by
//! a dedicated routine operating on the bracketed subslice instead of
//! being folded into the main scanner. A collection is only recognised
//! when a closing `]` exists ([`find_collection_end`]); the interior is
//! then compiled by [`compile_collection`].
//!
//! Inside a collection:
//! - a leading `^` negates, a leading `]` (possibly after `^`) is literal
//! - backslash escapes `\] \^ \- \\ \e \t \r \b \n` and the numeric
//!   references `\d \o \x \u \U`; before anything else the backslash is
//!   itself a literal
//! - `a-b` is an inclusive range
//! - `[:name:]` named classes are expanded; `[=a=]` equivalence classes
//!   and `[.a.]` collation elements are refused
//!
//! Every literal that is reserved under the host's set-operator class
//! syntax is emitted as its `\xNN` escape.

use crate::charclass::{self, CharClassKind};
use crate::error::{CompileError, Result};
use crate::options::Options;
use crate::transpiler::NEVER_MATCH;

/// Find the `]` closing a collection.
///
/// `rest` starts immediately after the opening `[`. Returns the byte
/// offset of the closing `]` within `rest`, or `None` when the bracket
/// does not open a collection at all. Honours the leading `^`/`]`
/// conventions, backslash escapes, and embedded `[: :]`/`[= =]`/`[. .]`
/// items (whose `]` does not close the collection).
pub(crate) fn find_collection_end(rest: &str) -> Option<usize> {
    let chars: Vec<(usize, char)> = rest.char_indices().collect();
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);
    let mut i = 0;
    if at(i) == Some('^') {
        i += 1;
    }
    if at(i) == Some(']') {
        i += 1;
    }
    while i < chars.len() {
        match chars[i].1 {
            '\\' if i + 1 < chars.len() => i += 2,
            '[' if matches!(at(i + 1), Some(':') | Some('=') | Some('.')) => {
                let delim = at(i + 1).unwrap_or(':');
                match find_pair(&chars, i + 2, delim) {
                    Some(past) => i = past,
                    None => i += 1,
                }
            }
            ']' => return Some(chars[i].0),
            _ => i += 1,
        }
    }
    None
}

/// Find the index just past a `<delim>]` pair, starting at `from`
fn find_pair(chars: &[(usize, char)], from: usize, delim: char) -> Option<usize> {
    let mut j = from;
    while j + 1 < chars.len() {
        if chars[j].1 == delim && chars[j + 1].1 == ']' {
            return Some(j + 2);
        }
        j += 1;
    }
    None
}

/// One parsed collection item
enum Element {
    /// A single code point
    Char(u32),
    /// Pre-rendered class text to splice in (named classes)
    Splice(String),
    /// Contributes nothing (a code point beyond the Unicode maximum)
    Nothing,
}

/// Compile a collection interior to a host class.
///
/// `interior` is the text between `[` and its matching `]`;
/// `interior_offset` is its byte offset within `pattern` (for error
/// reporting). With `include_newline` the class is the `\_[...]` form
/// and additionally matches a newline.
pub(crate) fn compile_collection(
    pattern: &str,
    interior: &str,
    interior_offset: usize,
    include_newline: bool,
    options: &Options,
) -> Result<String> {
    let chars: Vec<(usize, char)> = interior.char_indices().collect();
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);
    let mut i = 0;
    let mut negated = false;
    let mut body = String::new();

    if at(i) == Some('^') {
        negated = true;
        i += 1;
    }
    if at(i) == Some(']') {
        push_code(&mut body, ']' as u32);
        i += 1;
    }

    while i < chars.len() {
        match parse_element(pattern, interior, &chars, &mut i, interior_offset, options)? {
            Element::Char(code) => {
                // `a-b` makes a range unless the `-` ends the interior
                if at(i) == Some('-') && i + 1 < chars.len() {
                    i += 1;
                    match parse_element(pattern, interior, &chars, &mut i, interior_offset, options)? {
                        Element::Char(end) => {
                            push_code(&mut body, code);
                            body.push('-');
                            push_code(&mut body, end);
                        }
                        Element::Splice(text) => {
                            push_code(&mut body, code);
                            push_code(&mut body, '-' as u32);
                            body.push_str(&text);
                        }
                        Element::Nothing => {
                            push_code(&mut body, code);
                            push_code(&mut body, '-' as u32);
                        }
                    }
                } else {
                    push_code(&mut body, code);
                }
            }
            Element::Splice(text) => body.push_str(&text),
            Element::Nothing => {}
        }
    }

    if body.is_empty() && !negated {
        return Ok(if include_newline {
            "[\\n]".to_string()
        } else {
            NEVER_MATCH.to_string()
        });
    }
    let inner = if body.is_empty() {
        // a negation of nothing matches any character
        "[\\s\\S]".to_string()
    } else {
        format!("[{}{}]", if negated { "^" } else { "" }, body)
    };
    Ok(if include_newline {
        format!("[\\n{inner}]")
    } else {
        inner
    })
}

/// Parse one collection item starting at `chars[*i]`
fn parse_element(
    pattern: &str,
    interior: &str,
    chars: &[(usize, char)],
    i: &mut usize,
    interior_offset: usize,
    options: &Options,
) -> Result<Element> {
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);
    let (off, c) = chars[*i];
    match c {
        '\\' => {
            let next = match at(*i + 1) {
                Some(next) => next,
                None => {
                    *i += 1;
                    return Ok(Element::Char('\\' as u32));
                }
            };
            match next {
                ']' | '^' | '-' | '\\' => {
                    *i += 2;
                    Ok(Element::Char(next as u32))
                }
                'e' => {
                    *i += 2;
                    Ok(Element::Char(0x1b))
                }
                't' => {
                    *i += 2;
                    Ok(Element::Char(0x09))
                }
                'r' => {
                    *i += 2;
                    Ok(Element::Char(0x0d))
                }
                'b' => {
                    *i += 2;
                    Ok(Element::Char(0x08))
                }
                'n' => {
                    *i += 2;
                    Ok(Element::Char(0x0a))
                }
                'd' => numeric_element(chars, i, 10, u32::MAX),
                'o' => numeric_element(chars, i, 8, 0o377),
                'x' => hex_element(chars, i, 2),
                'u' => hex_element(chars, i, 4),
                'U' => hex_element(chars, i, 8),
                _ => {
                    // the backslash itself is literal; `next` is re-read
                    *i += 1;
                    Ok(Element::Char('\\' as u32))
                }
            }
        }
        '[' if at(*i + 1) == Some(':') => {
            match find_pair(chars, *i + 2, ':') {
                None => {
                    *i += 1;
                    Ok(Element::Char('[' as u32))
                }
                Some(past) => {
                    let name: String = chars[*i + 2..past - 2].iter().map(|&(_, c)| c).collect();
                    *i = past;
                    named_class(&name, pattern, interior_offset + off, options).map(Element::Splice)
                }
            }
        }
        '[' if matches!(at(*i + 1), Some('=') | Some('.')) => {
            let delim = at(*i + 1).unwrap_or('=');
            match find_pair(chars, *i + 2, delim) {
                None => {
                    *i += 1;
                    Ok(Element::Char('[' as u32))
                }
                Some(past) => {
                    let end = chars.get(past).map(|&(o, _)| o).unwrap_or(interior.len());
                    Err(CompileError::unsupported(
                        &interior[off..end],
                        pattern,
                        interior_offset + off,
                    ))
                }
            }
        }
        _ => {
            *i += 1;
            Ok(Element::Char(c as u32))
        }
    }
}

/// `\d123` / `\o40` style references; a bare letter with no digits makes
/// the backslash literal instead
fn numeric_element(chars: &[(usize, char)], i: &mut usize, radix: u32, cap: u32) -> Result<Element> {
    let mut j = *i + 2;
    let mut value: u32 = 0;
    let mut digits = 0;
    while let Some(&(_, c)) = chars.get(j) {
        match c.to_digit(radix) {
            Some(d) if value.saturating_mul(radix).saturating_add(d) <= cap => {
                value = value * radix + d;
                digits += 1;
                j += 1;
            }
            _ => break,
        }
    }
    if digits == 0 {
        *i += 1;
        return Ok(Element::Char('\\' as u32));
    }
    *i = j;
    if value > 0x10ffff {
        Ok(Element::Nothing)
    } else {
        Ok(Element::Char(value))
    }
}

/// `\x20` / `€` / `\U0001f600` references with bounded digit width
fn hex_element(chars: &[(usize, char)], i: &mut usize, max_digits: usize) -> Result<Element> {
    let mut j = *i + 2;
    let mut value: u32 = 0;
    let mut digits = 0;
    while digits < max_digits {
        match chars.get(j).and_then(|&(_, c)| c.to_digit(16)) {
            Some(d) => {
                value = value.saturating_mul(16).saturating_add(d);
                digits += 1;
                j += 1;
            }
            None => break,
        }
    }
    if digits == 0 {
        *i += 1;
        return Ok(Element::Char('\\' as u32));
    }
    *i = j;
    if value > 0x10ffff {
        Ok(Element::Nothing)
    } else {
        Ok(Element::Char(value))
    }
}

/// Expand a `[:name:]` named class to its splice text
fn named_class(name: &str, pattern: &str, offset: usize, options: &Options) -> Result<String> {
    let fixed = match name {
        "alnum" => "0-9A-Za-z",
        "alpha" => "A-Za-z",
        "blank" => " \\t",
        "cntrl" => "\\x00-\\x1f\\x7f",
        "digit" => "0-9",
        "graph" => "\\x21-\\x7e",
        "lower" => "a-z",
        "punct" => "\\x21-\\x2f\\x3a-\\x40\\x5b-\\x60\\x7b-\\x7e",
        "space" => "\\x09-\\x0d\\x20",
        "upper" => "A-Z",
        "xdigit" => "0-9A-Fa-f",
        "return" => "\\r",
        "tab" => "\\t",
        "escape" => "\\x1b",
        "backspace" => "\\x08",
        "ident" => {
            return option_splice(options.isident_or_default(), CharClassKind::Ident);
        }
        "keyword" => {
            return option_splice(options.iskeyword_or_default(), CharClassKind::Keyword);
        }
        "fname" => {
            return option_splice(options.isfname_or_default(), CharClassKind::Fname);
        }
        "print" => {
            return option_splice(options.isprint_or_default(), CharClassKind::Print);
        }
        _ => {
            return Err(CompileError::invalid("Invalid char class", pattern, offset));
        }
    };
    Ok(fixed.to_string())
}

/// Nest an option class inside the surrounding collection
fn option_splice(option: &str, kind: CharClassKind) -> Result<String> {
    let class = charclass::compile_char_class(option, kind)?;
    if class == charclass::EMPTY_CLASS {
        Ok(String::new())
    } else {
        Ok(class)
    }
}

/// Emit one code point into the class body
fn push_code(body: &mut String, code: u32) {
    if code > 0xff {
        body.push_str(&format!("\\u{{{code:x}}}"));
    } else if (0x20..0x7f).contains(&code) && !is_reserved(code) {
        // in this range the code is always a valid char
        if let Some(c) = char::from_u32(code) {
            body.push(c);
        }
    } else {
        body.push_str(&format!("\\x{code:02x}"));
    }
}

/// Characters reserved by the host's set-operator class syntax
fn is_reserved(code: u32) -> bool {
    matches!(
        char::from_u32(code),
        Some(
            '!' | '#' | '$' | '%' | '&' | '(' | ')' | '*' | '+' | ',' | '.' | '/' | ':' | ';'
                | '<' | '=' | '>' | '?' | '@' | '[' | ']' | '^' | '`' | '{' | '|' | '}' | '~'
                | '-' | '\\'
        )
    )
}
