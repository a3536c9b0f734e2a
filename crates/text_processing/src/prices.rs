//! Base price extraction
//!
//! Collects literal prices from cleaned promotional text, left to right:
//! - `50元`
//! - `$50`
//! - `1件50` / `一件50`, unless the digits run into a discount marker
//!
//! The first price is the base price for matchers that need one.

use once_cell::sync::Lazy;
use regex::Regex;

static PRICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)元|\$([0-9]+)|[一二兩三四五六七八九十0-9]+件([0-9]+)").unwrap()
});

/// Characters that turn a trailing number into a discount, not a price
fn is_discount_marker(c: char) -> bool {
    matches!(c, '折' | '%')
}

/// Extract every literal price in order of appearance
///
/// For the `件<digits>` form, digits directly followed by 折 or % are not a
/// price. A longer digit run gives up its last digit instead ("1件50折"
/// yields 5), matching a backtracking `件(\d+)(?![折%])` scan; a lone digit
/// is rejected and the scan resumes one character later.
pub fn extract_prices(text: &str) -> Vec<f64> {
    let mut prices = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = PRICE_PATTERN.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if let Some(amount) = caps.get(1).or_else(|| caps.get(2)) {
            push_price(&mut prices, amount.as_str());
            pos = whole.end();
            continue;
        }

        let Some(digits) = caps.get(3) else {
            break;
        };
        let followed_by_marker = text[digits.end()..]
            .chars()
            .next()
            .is_some_and(is_discount_marker);

        if !followed_by_marker {
            push_price(&mut prices, digits.as_str());
            pos = whole.end();
        } else if digits.len() > 1 {
            // ASCII digits, so byte slicing is safe
            let shortened = &digits.as_str()[..digits.len() - 1];
            push_price(&mut prices, shortened);
            pos = digits.end() - 1;
        } else {
            let first_len = text[whole.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            pos = whole.start() + first_len;
        }
    }

    prices
}

fn push_price(prices: &mut Vec<f64>, digits: &str) {
    if let Ok(value) = digits.parse::<f64>() {
        prices.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yuan_suffix() {
        assert_eq!(extract_prices("原價100元"), vec![100.0]);
        assert_eq!(extract_prices("100元送50元"), vec![100.0, 50.0]);
    }

    #[test]
    fn test_dollar_prefix() {
        assert_eq!(extract_prices("$30一件"), vec![30.0]);
    }

    #[test]
    fn test_count_form() {
        assert_eq!(extract_prices("1件50加一元多一件"), vec![50.0]);
        assert_eq!(extract_prices("一件80"), vec![80.0]);
        assert_eq!(extract_prices("1件100元，加10元多一件"), vec![100.0, 10.0]);
    }

    #[test]
    fn test_count_form_before_yuan() {
        // "1件50" wins at position 0; the 元 is left over
        assert_eq!(extract_prices("1件50元加1元多1件"), vec![50.0, 1.0]);
    }

    #[test]
    fn test_discount_marker_is_not_a_price() {
        assert!(extract_prices("2件8折").is_empty());
        assert!(extract_prices("3件5%").is_empty());
    }

    #[test]
    fn test_discount_marker_shortens_long_run() {
        assert_eq!(extract_prices("1件50折"), vec![5.0]);
        assert_eq!(extract_prices("2件75%"), vec![7.0]);
    }

    #[test]
    fn test_no_prices() {
        assert!(extract_prices("").is_empty());
        assert!(extract_prices("買一送一").is_empty());
        assert!(extract_prices("滿千送百").is_empty());
    }
}
