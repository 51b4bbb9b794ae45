//! The `pincert score` command.

use anyhow::Result;

use pincert_core::evaluator::{compute_score_with, try_compute_score, Rounding, SCORE_ROUNDING};

pub fn execute(correct: u32, total: u32, rounding: Option<String>, strict: bool) -> Result<()> {
    let rounding = match rounding {
        Some(r) => r.parse::<Rounding>()?,
        None => SCORE_ROUNDING,
    };

    if strict {
        // Only the zero-divisor check; the value itself uses the chosen rule.
        try_compute_score(correct, total)?;
    }

    let score = compute_score_with(correct, total, rounding);
    println!("{score}%");

    Ok(())
}
