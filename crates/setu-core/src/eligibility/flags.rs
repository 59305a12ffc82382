use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Pct;

/// Qualitative severity of a risk flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Low,
    Medium,
}

/// One qualitative risk signal attached to an assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFlag {
    pub severity: FlagSeverity,
    pub title: String,
    pub description: String,
}

/// Borrower facts the flag table is evaluated against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlagContext {
    pub obligation_count: usize,
    pub foir_pct: Pct,
    pub earning_members: u32,
    pub household_size: u32,
}

struct FlagRule {
    severity: FlagSeverity,
    title: &'static str,
    description: &'static str,
    trigger: fn(&FlagContext) -> bool,
}

/// Fixed-priority flag table; all triggered flags are included, in this order.
const FLAG_RULES: [FlagRule; 3] = [
    FlagRule {
        severity: FlagSeverity::Medium,
        title: "Multiple MFI Debt",
        description: "Borrower has 3+ existing loans.",
        trigger: |ctx| ctx.obligation_count >= 3,
    },
    FlagRule {
        severity: FlagSeverity::Low,
        title: "Thin Headroom",
        description: "FOIR is near the 50% threshold.",
        trigger: |ctx| ctx.foir_pct > dec!(40) && ctx.foir_pct <= dec!(50),
    },
    FlagRule {
        severity: FlagSeverity::Low,
        title: "High Dependency",
        description: "Single earner for large family.",
        trigger: |ctx| ctx.earning_members == 1 && ctx.household_size > 4,
    },
];

pub(crate) fn evaluate_flags(ctx: &FlagContext) -> Vec<RiskFlag> {
    FLAG_RULES
        .iter()
        .filter(|rule| (rule.trigger)(ctx))
        .map(|rule| RiskFlag {
            severity: rule.severity,
            title: rule.title.to_string(),
            description: rule.description.to_string(),
        })
        .collect()
}
