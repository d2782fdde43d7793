//! String literal values.
//!
//! A `STRING_LITERAL` token keeps its source text, quotes and backslashes
//! included. [`string_value`] produces the runtime string: quotes stripped,
//! `\n` `\r` `\t` `\0` `\\` `\"` resolved. Any other escape is kept as
//! written, so `"\q"` is the two characters `\q`.

fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}

/// The value of a string literal token, given its raw text.
pub fn string_value(raw: &str) -> String {
    let body = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => value.push(resolved),
                None => {
                    value.push('\\');
                    value.push(esc);
                }
            },
            None => value.push('\\'),
        }
    }
    value
}
