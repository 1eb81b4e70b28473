//! Fixed-point conversions between user-facing decimal strings and on-chain
//! token amounts.

use alloy::primitives::{
    U256,
    utils::{ParseUnits, format_units, parse_units},
};

use crate::error::AmountError;

/// Decimals of the deposit token (USDT).
pub const USDT_DECIMALS: u8 = 6;

/// Decimals of the stake token (AAA).
pub const AAA_DECIMALS: u8 = 18;

/// Scales a non-negative decimal string to an integer amount with `decimals`
/// fractional digits.
///
/// Excess fractional digits are only accepted when they are zeros, so the
/// result is always exact.
pub fn parse_amount(raw: &str, decimals: u8) -> Result<U256, AmountError> {
    let amount = raw.trim();
    if amount.starts_with('-') {
        return Err(AmountError::Negative);
    }
    if !is_plain_decimal(amount) {
        return Err(AmountError::Invalid(amount.to_string()));
    }

    let mut amount = amount;
    if let Some((whole, fraction)) = amount.split_once('.') {
        let significant = fraction.trim_end_matches('0').len();
        if significant > decimals as usize {
            return Err(AmountError::TooManyDecimals {
                found: significant,
                max: decimals,
            });
        }
        // only zeros past `decimals`
        if fraction.len() > decimals as usize {
            amount = &amount[..whole.len() + 1 + decimals as usize];
        }
    }

    let parsed = parse_units(amount, decimals)
        .map_err(|e| AmountError::Invalid(format!("{amount}: {e}")))?;
    match parsed {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => Err(AmountError::Negative),
    }
}

/// ASCII digits with at most one `.` and at least one digit. `parse_units`
/// alone lets separators such as `_` through.
fn is_plain_decimal(amount: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for b in amount.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Renders an integer amount as a decimal string, keeping at least one
/// fractional digit (`1.5`, `0.0`, `42.0`).
pub fn format_amount(value: U256, decimals: u8) -> Result<String, AmountError> {
    let formatted =
        format_units(value, decimals).map_err(|e| AmountError::Invalid(e.to_string()))?;

    let Some((whole, fraction)) = formatted.split_once('.') else {
        return Ok(format!("{formatted}.0"));
    };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        Ok(format!("{whole}.0"))
    } else {
        Ok(format!("{whole}.{fraction}"))
    }
}
