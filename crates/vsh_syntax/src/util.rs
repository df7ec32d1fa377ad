/// Punctuation allowed inside a bareword in addition to letters and digits.
const BAREWORD_PUNCT: &str = "-_:%+,./@!~";

pub fn is_bareword_char(c: char) -> bool {
    c.is_alphanumeric() || BAREWORD_PUNCT.contains(c)
}

/// A bareword that starts with `~` would be read back as a home directory
/// reference, so it cannot be written bare.
pub fn is_bareword(s: &str) -> bool {
    !s.is_empty() && !s.starts_with('~') && s.chars().all(is_bareword_char)
}

pub fn is_printable(c: char) -> bool {
    !c.is_control() && !matches!(c, '\u{200B}'..='\u{200F}' | '\u{2028}'..='\u{202E}' | '\u{FEFF}')
}
