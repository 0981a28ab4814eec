use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{PeticaoError, Result};

/// Round to whole cents, half away from zero. Every rendering of an amount
/// (numeral and words) goes through here exactly once.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Largest whole-reais part an amount may carry. Billions are not rendered.
pub const MAX_WHOLE: u64 = 999_999_999;

/// Split the rounded absolute value into whole units and cents.
/// `None` when the amount does not fit in a `u64` count of cents.
pub fn split_cents(value: Decimal) -> Option<(u64, u64)> {
    let cents = round_cents(value)
        .abs()
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_u64()?;
    Some((cents / 100, cents % 100))
}

/// Accept an input amount (a charge or a damage) only when it is not
/// negative and renders within [`MAX_WHOLE`] reais. `what` names the input
/// in the error.
pub fn check_amount(what: &str, value: Decimal) -> Result<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PeticaoError::OutOfDomain(format!("{what} is negative ({value})")));
    }
    match split_cents(value) {
        Some((whole, _)) if whole <= MAX_WHOLE => Ok(value),
        _ => Err(PeticaoError::OutOfDomain(format!(
            "{what} is above R$ 999.999.999,99 ({value})"
        ))),
    }
}

/// Parse a user-entered amount: `1234.56`, `1234,56`, `1.234,56` or
/// `R$ 1.234,56`.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let s: String = raw
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .collect();
    if s.is_empty() {
        return Err(PeticaoError::Amount(format!("empty amount {raw:?}")));
    }
    let normalized = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        s
    };
    normalized
        .parse::<Decimal>()
        .map_err(|e| PeticaoError::Amount(format!("{raw:?}: {e}")))
}
