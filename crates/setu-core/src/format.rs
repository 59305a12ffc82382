use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{Money, Pct};

const LAKH: Decimal = dec!(100_000);
const CRORE: Decimal = dec!(10_000_000);

/// Condensed Indian-convention currency string.
///
/// Amounts of a crore and above render as `₹X.XX Cr`, a lakh and above as
/// `₹X.X L`, and smaller amounts with Indian digit grouping (`₹12,345`).
/// Obligations and instalments routinely land in the grouped range.
pub fn format_inr(amount: Money) -> String {
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let abs = amount.abs();

    if abs >= CRORE {
        format!("{sign}₹{:.2} Cr", abs / CRORE)
    } else if abs >= LAKH {
        format!("{sign}₹{:.1} L", abs / LAKH)
    } else {
        format!("{sign}₹{}", group_indian(abs))
    }
}

/// Percentage with one decimal place, e.g. `38.9%`.
pub fn format_pct(value: Pct) -> String {
    format!("{:.1}%", value)
}

/// Indian digit grouping: last three digits, then groups of two.
fn group_indian(abs: Money) -> String {
    let whole = abs
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();

    let digits: Vec<char> = whole.chars().collect();
    if digits.len() <= 3 {
        return whole;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = vec![tail.iter().collect()];
    for chunk in head.rchunks(2) {
        groups.push(chunk.iter().collect());
    }
    groups.reverse();
    groups.join(",")
}
