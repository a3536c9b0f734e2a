//! Unit-price comparison
//!
//! Price ÷ quantity for two offers, and which one is cheaper per unit.

use serde::{Deserialize, Serialize};

/// Which offer is cheaper per unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cheaper {
    A,
    B,
    Equal,
}

/// Result of comparing two unit prices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPriceComparison {
    pub unit_a: f64,
    pub unit_b: f64,
    pub cheaper: Cheaper,
    /// Dearer unit price divided by the cheaper one (1 when equal)
    pub ratio: f64,
}

/// Price per unit of quantity
///
/// Undefined for a zero or non-finite price and for a non-positive amount.
pub fn unit_price(price: f64, amount: f64) -> Option<f64> {
    if price == 0.0 || !price.is_finite() || !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    Some(price / amount)
}

/// Compare two (price, amount) offers
pub fn compare_unit_prices(a: (f64, f64), b: (f64, f64)) -> Option<UnitPriceComparison> {
    let unit_a = unit_price(a.0, a.1)?;
    let unit_b = unit_price(b.0, b.1)?;

    let (cheaper, ratio) = if unit_a < unit_b {
        (Cheaper::A, unit_b / unit_a)
    } else if unit_b < unit_a {
        (Cheaper::B, unit_a / unit_b)
    } else {
        (Cheaper::Equal, 1.0)
    };

    Some(UnitPriceComparison {
        unit_a,
        unit_b,
        cheaper,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price() {
        assert_eq!(unit_price(100.0, 4.0), Some(25.0));
        assert_eq!(unit_price(0.0, 4.0), None);
        assert_eq!(unit_price(100.0, 0.0), None);
        assert_eq!(unit_price(100.0, -2.0), None);
        assert_eq!(unit_price(f64::NAN, 2.0), None);
    }

    #[test]
    fn test_compare_picks_cheaper() {
        let cmp = compare_unit_prices((100.0, 4.0), (60.0, 2.0)).unwrap();
        assert_eq!(cmp.cheaper, Cheaper::A);
        assert_eq!(cmp.unit_a, 25.0);
        assert_eq!(cmp.unit_b, 30.0);
        assert!((cmp.ratio - 1.2).abs() < 1e-9);

        let cmp = compare_unit_prices((90.0, 1.0), (60.0, 2.0)).unwrap();
        assert_eq!(cmp.cheaper, Cheaper::B);
        assert_eq!(cmp.ratio, 3.0);
    }

    #[test]
    fn test_compare_equal() {
        let cmp = compare_unit_prices((50.0, 2.0), (25.0, 1.0)).unwrap();
        assert_eq!(cmp.cheaper, Cheaper::Equal);
        assert_eq!(cmp.ratio, 1.0);
    }

    #[test]
    fn test_compare_needs_both_sides() {
        assert!(compare_unit_prices((50.0, 0.0), (25.0, 1.0)).is_none());
        assert!(compare_unit_prices((50.0, 2.0), (0.0, 1.0)).is_none());
    }
}
