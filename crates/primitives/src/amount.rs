use alloy::primitives::{utils::format_units, I256};

use eyre::{Result, WrapErr};

/// Renders `raw / 10^decimals` as a float.
pub fn adjust_amount(raw: I256, decimals: u8) -> Result<f64> {
    let formatted = format_units(raw, decimals)
        .wrap_err_with(|| format!("failed to format {} with {} decimals", raw, decimals))?;

    formatted
        .parse::<f64>()
        .wrap_err_with(|| format!("failed to parse formatted amount {}", formatted))
}
