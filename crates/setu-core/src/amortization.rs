use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::SetuError;
use crate::types::{Money, Pct};
use crate::SetuResult;

/// Equated monthly instalment for a fixed-rate, reducing-balance loan,
/// rounded to the whole rupee.
///
/// `payment = P·i·(1+i)^n / ((1+i)^n − 1)` with `i = annual_rate_pct/12/100`.
/// A zero principal or zero term yields a zero instalment; a zero rate
/// degenerates to straight-line repayment `round(P / n)`.
pub fn equated_monthly_instalment(
    principal: Money,
    annual_rate_pct: Pct,
    term_months: u32,
) -> SetuResult<Money> {
    if principal < Decimal::ZERO {
        return Err(SetuError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal cannot be negative.".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(SetuError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Nominal annual rate cannot be negative.".into(),
        });
    }

    if principal.is_zero() || term_months == 0 {
        return Ok(Decimal::ZERO);
    }

    let term = Decimal::from(term_months);
    let monthly_rate = annual_rate_pct / dec!(12) / dec!(100);

    let raw = if monthly_rate.is_zero() {
        principal / term
    } else {
        let factor = (Decimal::ONE + monthly_rate).powi(term_months as i64);
        principal * monthly_rate * factor / (factor - Decimal::ONE)
    };

    Ok(raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}
