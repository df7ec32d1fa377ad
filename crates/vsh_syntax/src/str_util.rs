use phf::phf_map;

use crate::util::{is_bareword, is_printable};

/// Escapes with a dedicated short form inside double quotes.
static ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '\n' => "\\n",
    '\t' => "\\t",
    '\r' => "\\r",
    '\u{07}' => "\\a",
    '\u{08}' => "\\b",
    '\u{0C}' => "\\f",
    '\u{0B}' => "\\v",
    '\u{1B}' => "\\e",
    '\\' => "\\\\",
    '"' => "\\\"",
};

/// Render `s` as a literal that reads back as exactly `s`.
///
/// Barewords are returned as-is, other printable text is single-quoted and
/// anything containing unprintable characters is double-quoted with escapes.
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if !s.chars().all(is_printable) {
        return double_quote(s);
    }
    if is_bareword(s) {
        s.to_string()
    } else {
        single_quote(s)
    }
}

fn single_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push_str("''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
    out
}

fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if let Some(esc) = ESCAPES.get(&c) {
            out.push_str(esc);
        } else if is_printable(c) {
            out.push(c);
        } else {
            let cp = c as u32;
            if cp < 0x80 {
                out.push_str(&format!("\\x{cp:02x}"));
            } else if cp <= 0xFFFF {
                out.push_str(&format!("\\u{cp:04x}"));
            } else {
                out.push_str(&format!("\\U{cp:08x}"));
            }
        }
    }
    out.push('"');
    out
}

/// Read back a single literal produced by [`quote`].
///
/// Returns `None` when `s` is not one well-formed literal.
pub fn unquote(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'\'' && bytes[bytes.len() - 1] == b'\'' {
        let inner = &s[1..s.len() - 1];
        let mut res = String::with_capacity(inner.len());
        let mut chars = inner.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\'' {
                // A lone quote would have closed the literal.
                if chars.next() != Some('\'') {
                    return None;
                }
            }
            res.push(c);
        }
        return Some(res);
    }
    if bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        return unescape(&s[1..s.len() - 1]);
    }
    if is_bareword(s) { Some(s.to_string()) } else { None }
}

/// Decode the body of a double-quoted literal.
pub fn unescape(s: &str) -> Option<String> {
    let mut res = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '"' {
            return None;
        }
        if c != '\\' {
            res.push(c);
            continue;
        }
        let decoded = match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'v' => '\u{0B}',
            'e' => '\u{1B}',
            '\\' => '\\',
            '"' => '"',
            'x' => hex_escape(&mut chars, 2)?,
            'u' => hex_escape(&mut chars, 4)?,
            'U' => hex_escape(&mut chars, 8)?,
            _ => return None,
        };
        res.push(decoded);
    }
    Some(res)
}

fn hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let mut cp = 0u32;
    for _ in 0..digits {
        cp = cp * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(cp)
}
