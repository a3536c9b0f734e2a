//! Numeral normalization
//!
//! Promotional copy mixes Arabic digits with Chinese digit characters
//! ("買2送一", "第二件半價"). `normalize` maps a captured token to a number
//! and never fails: anything unrecognised becomes 0, and the matchers treat
//! that as "precondition not met".

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading decimal number, the way a lenient float parser reads it
static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap()
});

/// Convert a numeral token to its value
///
/// Tries a decimal prefix first ("2", "0.5", "1十" → 1), then the Chinese
/// digit table on the whole token. Empty or unrecognised tokens yield 0.
///
/// # Examples
/// ```
/// use promo_decoder_text_processing::numeral::normalize;
/// assert_eq!(normalize("2.5"), 2.5);
/// assert_eq!(normalize("兩"), 2.0);
/// assert_eq!(normalize("半"), 0.5);
/// assert_eq!(normalize("千"), 0.0);
/// ```
pub fn normalize(token: &str) -> f64 {
    if token.is_empty() {
        return 0.0;
    }
    parse_decimal_prefix(token)
        .or_else(|| word_to_number(token))
        .unwrap_or(0.0)
}

/// Parse the leading decimal number of a token, ignoring any trailing text
pub fn parse_decimal_prefix(token: &str) -> Option<f64> {
    let m = DECIMAL_PREFIX.find(token.trim_start())?;
    m.as_str().parse().ok()
}

/// Chinese digit character (or 半) to value
///
/// Only single entries are recognised; compound numerals such as "十五"
/// or "一百" are not in the table.
pub fn word_to_number(word: &str) -> Option<f64> {
    match word {
        "一" => Some(1.0),
        "二" | "兩" => Some(2.0),
        "三" => Some(3.0),
        "四" => Some(4.0),
        "五" => Some(5.0),
        "六" => Some(6.0),
        "七" => Some(7.0),
        "八" => Some(8.0),
        "九" => Some(9.0),
        "十" => Some(10.0),
        "半" => Some(0.5),
        _ => None,
    }
}
