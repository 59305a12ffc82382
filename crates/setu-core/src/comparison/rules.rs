use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::RegulatoryConstants;
use crate::format::{format_inr, format_pct};
use crate::types::{Money, Pct};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Verdict status for a single compliance rule.
///
/// `NotApplicable` marks a rule whose ratio has no denominator (a zero-asset
/// snapshot), distinct from `NonCompliant`, which asserts an actual breach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    Warning,
    NonCompliant,
    NotApplicable,
}

/// One evaluated compliance rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    pub rule: String,
    pub status: ComplianceStatus,
    /// Observed value, pre-formatted for display.
    pub current: String,
    /// Textual requirement, e.g. "≥ 60%".
    pub required: String,
    /// Regulatory citation.
    pub reference: String,
    pub explanation: String,
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// Pre-computed ratios the rule set is evaluated against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleContext {
    pub total_assets: Money,
    /// None when total assets are zero and the ratio is undefined.
    pub composition_ratio: Option<Pct>,
    pub crar: Pct,
}

struct RuleOutcome {
    status: ComplianceStatus,
    current: String,
    required: String,
    explanation: String,
}

struct RuleDef {
    name: &'static str,
    reference: &'static str,
    evaluate: fn(&RuleContext, &RegulatoryConstants) -> RuleOutcome,
}

/// Ordered rule set. Verdicts are reported in exactly this order.
const RULESET: [RuleDef; 3] = [
    RuleDef {
        name: "60% Microfinance Asset Rule",
        reference: "Para 3(1)(iii)",
        evaluate: composition_rule,
    },
    RuleDef {
        name: "₹100 Crore Threshold",
        reference: "Para 2(1)(iv)",
        evaluate: asset_cap_rule,
    },
    RuleDef {
        name: "Capital Adequacy (CRAR)",
        reference: "Para 9",
        evaluate: crar_rule,
    },
];

pub(crate) fn evaluate_ruleset(
    ctx: &RuleContext,
    constants: &RegulatoryConstants,
) -> Vec<ComplianceVerdict> {
    RULESET
        .iter()
        .map(|rule| {
            let outcome = (rule.evaluate)(ctx, constants);
            ComplianceVerdict {
                rule: rule.name.to_string(),
                status: outcome.status,
                current: outcome.current,
                required: outcome.required,
                reference: rule.reference.to_string(),
                explanation: outcome.explanation,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Individual rules
// ---------------------------------------------------------------------------

fn composition_rule(ctx: &RuleContext, c: &RegulatoryConstants) -> RuleOutcome {
    let required = format!("≥ {}%", c.min_microfinance_asset_pct);

    let Some(ratio) = ctx.composition_ratio else {
        return RuleOutcome {
            status: ComplianceStatus::NotApplicable,
            current: "—".to_string(),
            required,
            explanation: "No reported assets; composition cannot be assessed.".to_string(),
        };
    };

    // Warning band: within 10 points of the floor
    let warning_floor = c.min_microfinance_asset_pct - dec!(10);

    let (status, explanation) = if ratio >= c.min_microfinance_asset_pct {
        (
            ComplianceStatus::Compliant,
            "Compliant with RBI composition norms.".to_string(),
        )
    } else if ratio >= warning_floor {
        (
            ComplianceStatus::Warning,
            format!(
                "Microfinance assets are below the {}% floor; rebalance before the next reporting cycle.",
                c.min_microfinance_asset_pct
            ),
        )
    } else {
        (
            ComplianceStatus::NonCompliant,
            format!(
                "Microfinance assets must be at least {}% of total assets.",
                c.min_microfinance_asset_pct
            ),
        )
    };

    RuleOutcome {
        status,
        current: format_pct(ratio),
        required,
        explanation,
    }
}

/// Crossing the asset cap triggers a structural transition rather than an
/// outright violation, so this rule reports `Warning` at worst.
fn asset_cap_rule(ctx: &RuleContext, c: &RegulatoryConstants) -> RuleOutcome {
    let crossed = ctx.total_assets >= c.section8_asset_cap;

    RuleOutcome {
        status: if crossed {
            ComplianceStatus::Warning
        } else {
            ComplianceStatus::Compliant
        },
        current: format_inr(ctx.total_assets),
        required: format!("< {}", format_inr(c.section8_asset_cap)),
        explanation: if crossed {
            "MANDATORY transition to NBFC-MFI required.".to_string()
        } else {
            "Safe within Section 8 asset limits.".to_string()
        },
    }
}

fn crar_rule(ctx: &RuleContext, c: &RegulatoryConstants) -> RuleOutcome {
    let adequate = ctx.crar >= c.min_crar_pct;

    RuleOutcome {
        status: if adequate {
            ComplianceStatus::Compliant
        } else {
            ComplianceStatus::NonCompliant
        },
        current: format_pct(ctx.crar),
        required: format!("≥ {}%", c.min_crar_pct),
        explanation: if adequate {
            "Capital buffer is adequate.".to_string()
        } else {
            "Insufficient capital relative to risk assets.".to_string()
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
