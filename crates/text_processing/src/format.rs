//! Number rendering for result labels

/// Shortest round-trip rendering: 1000.0 → "1000", 0.5 → "0.5"
pub(crate) fn plain(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Fixed decimals of the exact binary value; exact ties round away from
/// zero (7.25 → "7.3", while 8.45 is stored below the tie → "8.4")
pub(crate) fn fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return plain(value);
    }
    if is_exact_tie(value, digits) {
        let factor = 10f64.powi(digits as i32);
        return format!("{:.*}", digits, (value * factor).round() / factor);
    }
    format!("{:.*}", digits, value)
}

/// True when the stored value sits exactly halfway between two
/// `digits`-decimal neighbours
fn is_exact_tie(value: f64, digits: usize) -> bool {
    // Enough extra places to tell a stored tie from a neighbour one ulp away
    let expanded = format!("{:.*}", digits + 30, value.abs());
    let Some((_, fraction)) = expanded.split_once('.') else {
        return false;
    };
    let tail = &fraction[digits..];
    tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
}

/// Round to the nearest integer, halves toward positive infinity
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// "<rate> 折" label with one decimal
pub(crate) fn discount_label(rate: f64) -> String {
    format!("{} 折", fixed(rate, 1))
}
