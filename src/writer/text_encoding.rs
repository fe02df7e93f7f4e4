//! Hex string encoding for text shown with the built-in font.
//!
//! Every string is written as `<FEFF....>`: a byte-order mark followed by four
//! uppercase hex digits per character. Characters above U+FFFF are written as
//! their raw code point (five or six digits) and are not split into surrogate
//! pairs.

use std::fmt::Write;

/// Byte-order mark that opens every encoded string.
pub const BYTE_ORDER_MARK: &str = "FEFF";

/// Encode `text` as a PDF hex string literal, brackets included.
pub fn pdf_hex(text: &str) -> String {
    let mut hex = String::with_capacity(text.len() * 4 + BYTE_ORDER_MARK.len() + 2);
    hex.push('<');
    hex.push_str(BYTE_ORDER_MARK);
    for ch in text.chars() {
        // Writing into a String cannot fail.
        let _ = write!(hex, "{:04X}", ch as u32);
    }
    hex.push('>');
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_just_the_marker() {
        assert_eq!(pdf_hex(""), "<FEFF>");
    }

    #[test]
    fn test_ascii_text() {
        assert_eq!(pdf_hex("Hi"), "<FEFF00480069>");
    }

    #[test]
    fn test_latin_and_punctuation_are_uppercase() {
        // é = U+00E9, em-dash = U+2014, en-dash = U+2013
        assert_eq!(pdf_hex("é—–"), "<FEFF00E920142013>");
    }

    #[test]
    fn test_astral_code_point_is_not_split() {
        // U+1F600 keeps its full code point instead of a surrogate pair.
        assert_eq!(pdf_hex("\u{1F600}"), "<FEFF1F600>");
    }

    #[test]
    fn test_delimiters_are_encoded_not_escaped() {
        assert_eq!(pdf_hex("()\\"), "<FEFF00280029005C>");
    }
}
