// File: crates/chart-url/src/encoding.rs
// Summary: Series codec; renders bounded series as text, simple or extended data tokens.
//
// Simple: one symbol from a 62-letter alphabet per point.
//
//   A..Z a..z 0..9        index = floor(v / 100 * 61)      invalid = `_`
//
// Extended: two base-64 digits per point, most significant first.
//
//   A..Z a..z 0..9 - .    n = v / 100 * 4095 (nearest)     invalid = `__`
//   digits = ALPHABET[n / 64], ALPHABET[n % 64]
//
// Text: shortest decimal for the value, `-1` for invalid points.

use crate::grammar::fmt_num;
use crate::series::{is_valid, BoundedSeries, EncodingScheme};
use crate::types::VALUE_MAX;

/// Simple-encoding alphabet (62 symbols).
pub const SIMPLE_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Extended-encoding alphabet (64 symbols).
pub const EXTENDED_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-.";

/// Highest simple-encoding index.
pub const SIMPLE_MAX: usize = SIMPLE_ALPHABET.len() - 1;
/// Highest extended-encoding index.
pub const EXTENDED_MAX: usize = EXTENDED_ALPHABET.len() * EXTENDED_ALPHABET.len() - 1;

/// Simple token for an invalid point.
pub const SIMPLE_INVALID: char = '_';
/// Extended token for an invalid point.
pub const EXTENDED_INVALID: &str = "__";
/// Text token for an invalid point.
pub const TEXT_INVALID: &str = "-1";

/// Alphabet index of a valid value under the simple scheme.
///
/// Floors so that the mapping is monotonic and `0 -> 0`, `100 -> 61`; the
/// clamp absorbs floating-point overshoot at the top of the range.
pub fn simple_index(v: f64) -> usize {
    let scaled = (v / VALUE_MAX * SIMPLE_MAX as f64).floor();
    scaled.clamp(0.0, SIMPLE_MAX as f64) as usize
}

/// Two-digit code of a valid value under the extended scheme.
pub fn extended_index(v: f64) -> usize {
    let scaled = (v / VALUE_MAX * EXTENDED_MAX as f64 + 0.5).floor();
    scaled.clamp(0.0, EXTENDED_MAX as f64) as usize
}

/// Encode one point with the simple scheme.
pub fn encode_simple(v: f64) -> char {
    if !is_valid(v) {
        return SIMPLE_INVALID;
    }
    SIMPLE_ALPHABET[simple_index(v)] as char
}

/// Encode one point with the extended scheme.
pub fn encode_extended(v: f64) -> [char; 2] {
    if !is_valid(v) {
        return ['_', '_'];
    }
    let n = extended_index(v);
    let base = EXTENDED_ALPHABET.len();
    [
        EXTENDED_ALPHABET[n / base] as char,
        EXTENDED_ALPHABET[n % base] as char,
    ]
}

/// Encode one point as text.
pub fn encode_text(v: f64) -> String {
    if !is_valid(v) {
        return TEXT_INVALID.to_string();
    }
    fmt_num(v)
}

/// Render a single series without the scheme prefix.
pub fn encode_series(series: &BoundedSeries, scheme: EncodingScheme) -> String {
    let values = series.values();
    match scheme {
        EncodingScheme::Text => values.iter().map(|&v| encode_text(v)).collect::<Vec<_>>().join(","),
        EncodingScheme::Simple => values.iter().map(|&v| encode_simple(v)).collect(),
        EncodingScheme::Extended => {
            let mut out = String::with_capacity(values.len() * 2);
            for &v in values {
                out.extend(encode_extended(v));
            }
            out
        }
    }
}

/// Render the full data value: prefix plus `,`-joined series.
/// An empty list renders as the empty string so the data parameter is elided.
pub fn encode_data(series: &[BoundedSeries], scheme: EncodingScheme) -> String {
    if series.is_empty() {
        return String::new();
    }
    let body = series
        .iter()
        .map(|s| encode_series(s, scheme))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}{}", scheme.prefix(), body)
}

/// Inverse of [`encode_simple`]: the lower edge of the symbol's quantization bucket.
/// Returns `None` for the invalid token and for characters outside the alphabet.
pub fn decode_simple(c: char) -> Option<f64> {
    let idx = SIMPLE_ALPHABET.iter().position(|&b| b as char == c)?;
    Some(idx as f64 * VALUE_MAX / SIMPLE_MAX as f64)
}

/// Inverse of [`encode_extended`] for a two-character code.
pub fn decode_extended(code: &str) -> Option<f64> {
    let mut chars = code.chars();
    let (hi, lo) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }
    let digit = |c: char| EXTENDED_ALPHABET.iter().position(|&b| b as char == c);
    let n = digit(hi)? * EXTENDED_ALPHABET.len() + digit(lo)?;
    Some(n as f64 * VALUE_MAX / EXTENDED_MAX as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_map_to_alphabet_ends() {
        assert_eq!(encode_simple(0.0), 'A');
        assert_eq!(encode_simple(100.0), '9');
        assert_eq!(encode_extended(0.0), ['A', 'A']);
        assert_eq!(encode_extended(100.0), ['.', '.']);
    }

    #[test]
    fn simple_floors() {
        // 50 / 100 * 61 = 30.5
        assert_eq!(simple_index(50.0), 30);
        assert_eq!(encode_simple(50.0), 'e');
    }

    #[test]
    fn decode_rejects_foreign_symbols() {
        assert_eq!(decode_simple('_'), None);
        assert_eq!(decode_extended("__"), None);
        assert_eq!(decode_extended("A"), None);
        assert_eq!(decode_extended("AAA"), None);
        assert_eq!(decode_extended(".."), Some(100.0));
    }
}
