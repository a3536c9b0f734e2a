//! Result rendering for the terminal

use std::io::{self, Write};

use anyhow::Result;
use promo_decoder_core::{Cheaper, PromotionResult, UnitPriceComparison};
use serde_json::json;

pub fn print_result(text: &str, result: &PromotionResult, as_json: bool) -> Result<()> {
    let mut out = io::stdout().lock();

    if as_json {
        let line = json!({ "text": text, "result": result });
        writeln!(out, "{}", serde_json::to_string(&line)?)?;
        return Ok(());
    }

    writeln!(out, "{text}")?;
    writeln!(
        out,
        "  [{}] {}  {}",
        result.promotion_type, result.title, result.discount_label
    )?;
    writeln!(out, "  {}", result.detail)?;
    Ok(())
}

pub fn print_comparison(comparison: &UnitPriceComparison, as_json: bool) -> Result<()> {
    let mut out = io::stdout().lock();

    if as_json {
        writeln!(out, "{}", serde_json::to_string(comparison)?)?;
        return Ok(());
    }

    writeln!(out, "A: ${:.4} / unit", comparison.unit_a)?;
    writeln!(out, "B: ${:.4} / unit", comparison.unit_b)?;
    match comparison.cheaper {
        Cheaper::Equal => writeln!(out, "Same unit price")?,
        Cheaper::A => writeln!(out, "A is cheaper by {:.2}x", comparison.ratio)?,
        Cheaper::B => writeln!(out, "B is cheaper by {:.2}x", comparison.ratio)?,
    }
    Ok(())
}
