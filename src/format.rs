//! Fixed-point balance formatting and raw-amount scaling.
//!
//! On-chain balances are integers scaled by token decimals, which vary
//! from 0 to 18 and beyond across contracts. Naive float formatting of the
//! scaled values risks scientific notation for very small or very large
//! magnitudes; this module's sole job is eliminating that class of defect.
//! Rust's `{:.N}` formatting always emits plain decimal notation, so the
//! formatter is a thin, well-tested wrapper around it plus a sentinel for
//! missing values.

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::{BigDecimal, ToPrimitive};

/// Fractional digits used for display and export.
pub const DISPLAY_DIGITS: usize = 4;

/// Placeholder rendered for missing or non-finite balances.
pub const PLACEHOLDER: &str = "-";

/// Format a balance with exactly `digits` fractional digits.
///
/// Never produces scientific notation, regardless of magnitude. `None`,
/// NaN, and infinite values render as the [`PLACEHOLDER`] sentinel.
///
/// The display path and the export path both re-derive their text from
/// the stored raw numeric value; a display string is never re-parsed.
///
/// # Examples
///
/// ```rust
/// use tallyscan::format_balance;
///
/// assert_eq!(format_balance(Some(1234.56789), 4), "1234.5679");
/// assert_eq!(format_balance(Some(0.0000001), 4), "0.0000");
/// assert_eq!(format_balance(None, 4), "-");
/// ```
pub fn format_balance(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.digits$}"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Scale a raw on-chain integer amount by `10^-decimals`.
///
/// The division is carried out in arbitrary precision and only collapsed
/// to `f64` at the end, so the scaling itself never loses digits; any
/// rounding happens once, at the formatting boundary. Amounts too large
/// for `f64` degrade to NaN, which the formatter renders as the
/// placeholder rather than as garbage digits.
pub fn scale_raw_amount(raw: U256, decimals: u8) -> f64 {
    // U256 renders as plain decimal digits, which BigDecimal always parses
    let Ok(value) = BigDecimal::from_str(&raw.to_string()) else {
        return f64::NAN;
    };
    let Ok(divisor) = BigDecimal::from_str(&format!("1e{decimals}")) else {
        return f64::NAN;
    };
    (value / divisor).to_f64().unwrap_or(f64::NAN)
}
