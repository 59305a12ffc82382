use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::constants::RegulatoryConstants;
use crate::error::SetuError;
use crate::format::format_inr;
use crate::types::{with_metadata, ComputationOutput, Money, Pct};
use crate::SetuResult;

use super::projection::{project_asset_growth, ProjectionPoint};
use super::rules::{evaluate_ruleset, ComplianceVerdict, RuleContext};

/// Fraction of the asset cap at which a proactive transition is flagged.
const EARLY_WARNING_FRACTION: Decimal = dec!(0.70);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// One snapshot of institutional financials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionalSnapshot {
    pub total_assets: Money,
    pub microfinance_assets: Money,
    pub net_owned_funds: Money,
    /// Assumed annual growth, in percentage points. May be negative
    /// (contraction) but must stay above -100.
    pub annual_growth_pct: Pct,
    /// Projection horizon in years; 0 yields an empty trajectory.
    pub projection_years: u32,
}

/// Recommended legal-structure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralPath {
    /// Current scale fits comfortably within Section 8 limits.
    Section8StatusQuo,
    /// Approaching the asset cap; register as NBFC-MFI ahead of need.
    ProactiveNbfcMfi,
    /// The asset cap is already breached; transition is mandatory.
    MandatoryNbfcMfi,
}

impl std::fmt::Display for StructuralPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructuralPath::Section8StatusQuo => write!(f, "Section 8 (status quo)"),
            StructuralPath::ProactiveNbfcMfi => write!(f, "NBFC-MFI (proactive)"),
            StructuralPath::MandatoryNbfcMfi => write!(f, "NBFC-MFI (mandatory transition)"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub verdicts: Vec<ComplianceVerdict>,
    pub projection: Vec<ProjectionPoint>,
    pub recommended_path: StructuralPath,
    pub rationale: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate one institutional snapshot against the RBI 2025 rule set,
/// project the book forward, and recommend a structural path.
pub fn evaluate_compliance(
    snapshot: &InstitutionalSnapshot,
    constants: &RegulatoryConstants,
) -> SetuResult<ComputationOutput<ComparisonResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_snapshot(snapshot)?;

    if snapshot.total_assets.is_zero() {
        warnings.push(
            "Total assets are zero; composition and capital adequacy rules are not applicable."
                .to_string(),
        );
    }
    if snapshot.microfinance_assets > snapshot.total_assets {
        warnings.push("Microfinance assets exceed total assets; check the snapshot.".to_string());
    }

    // -- Current ratios -------------------------------------------------------
    let composition_ratio = if snapshot.total_assets > Decimal::ZERO {
        Some(snapshot.microfinance_assets / snapshot.total_assets * dec!(100))
    } else {
        None
    };
    let crar = if snapshot.microfinance_assets > Decimal::ZERO {
        snapshot.net_owned_funds / snapshot.microfinance_assets * dec!(100)
    } else {
        Decimal::ZERO
    };

    // -- Verdicts -------------------------------------------------------------
    let ctx = RuleContext {
        total_assets: snapshot.total_assets,
        composition_ratio,
        crar,
    };
    let verdicts = evaluate_ruleset(&ctx, constants);

    // -- Projection -----------------------------------------------------------
    let projection = project_asset_growth(
        snapshot.total_assets,
        snapshot.microfinance_assets,
        snapshot.annual_growth_pct,
        snapshot.projection_years,
        constants,
    );

    // -- Recommendation -------------------------------------------------------
    let (recommended_path, rationale) = recommend_path(snapshot, &projection, constants);

    let output = ComparisonResult {
        verdicts,
        projection,
        recommended_path,
        rationale,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "annual_growth_pct": snapshot.annual_growth_pct.to_string(),
        "projection_years": snapshot.projection_years,
        "section8_asset_cap": constants.section8_asset_cap.to_string(),
        "early_warning_level": (constants.section8_asset_cap * EARLY_WARNING_FRACTION).to_string(),
        "min_crar_pct": constants.min_crar_pct.to_string(),
        "min_net_owned_funds": constants.min_net_owned_funds.to_string(),
    });

    Ok(with_metadata(
        "RBI 2025 structural comparison (Section 8 vs NBFC-MFI)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn recommend_path(
    snapshot: &InstitutionalSnapshot,
    projection: &[ProjectionPoint],
    constants: &RegulatoryConstants,
) -> (StructuralPath, String) {
    let early_warning = constants.section8_asset_cap * EARLY_WARNING_FRACTION;

    if snapshot.total_assets >= constants.section8_asset_cap {
        return (
            StructuralPath::MandatoryNbfcMfi,
            format!(
                "MANDATORY transition. Your assets exceed the {} limit for Section 8 microfinance.",
                format_inr(constants.section8_asset_cap)
            ),
        );
    }

    if snapshot.total_assets >= early_warning || projection.iter().any(|p| p.crosses_asset_cap) {
        return (
            StructuralPath::ProactiveNbfcMfi,
            format!(
                "Strategic NBFC-MFI registration recommended. You are approaching or will soon cross the {} limit (minimum net owned funds: {}).",
                format_inr(constants.section8_asset_cap),
                format_inr(constants.min_net_owned_funds)
            ),
        );
    }

    (
        StructuralPath::Section8StatusQuo,
        "Based on your current scale, Section 8 is a viable low-cost setup.".to_string(),
    )
}

fn validate_snapshot(snapshot: &InstitutionalSnapshot) -> SetuResult<()> {
    let monetary = [
        ("total_assets", snapshot.total_assets),
        ("microfinance_assets", snapshot.microfinance_assets),
        ("net_owned_funds", snapshot.net_owned_funds),
    ];
    for (field, value) in monetary {
        if value < Decimal::ZERO {
            return Err(SetuError::InvalidInput {
                field: field.into(),
                reason: "Monetary fields cannot be negative.".into(),
            });
        }
    }
    if snapshot.annual_growth_pct <= dec!(-100) {
        return Err(SetuError::InvalidInput {
            field: "annual_growth_pct".into(),
            reason: "Growth rate must be greater than -100%.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(total: Decimal, mf: Decimal, nof: Decimal) -> InstitutionalSnapshot {
        InstitutionalSnapshot {
            total_assets: total,
            microfinance_assets: mf,
            net_owned_funds: nof,
            annual_growth_pct: dec!(0),
            projection_years: 3,
        }
    }

    #[test]
    fn test_negative_assets_rejected() {
        let s = snapshot(dec!(-1), dec!(0), dec!(0));
        let err = evaluate_compliance(&s, &RegulatoryConstants::rbi_2025()).unwrap_err();
        match err {
            SetuError::InvalidInput { field, .. } => assert_eq!(field, "total_assets"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_full_contraction_rejected() {
        let mut s = snapshot(dec!(1_000_000), dec!(700_000), dec!(200_000));
        s.annual_growth_pct = dec!(-100);
        let err = evaluate_compliance(&s, &RegulatoryConstants::rbi_2025()).unwrap_err();
        match err {
            SetuError::InvalidInput { field, .. } => assert_eq!(field, "annual_growth_pct"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_assets_warns_instead_of_failing() {
        let s = snapshot(dec!(0), dec!(0), dec!(0));
        let out = evaluate_compliance(&s, &RegulatoryConstants::rbi_2025()).unwrap();
        assert!(!out.warnings.is_empty());
    }

    #[test]
    fn test_mf_exceeding_total_warns() {
        let s = snapshot(dec!(1_000_000), dec!(2_000_000), dec!(500_000));
        let out = evaluate_compliance(&s, &RegulatoryConstants::rbi_2025()).unwrap();
        assert!(out
            .warnings
            .iter()
            .any(|w| w.contains("exceed total assets")));
    }

    #[test]
    fn test_metadata_populated() {
        let s = snapshot(dec!(500_000_000), dec!(350_000_000), dec!(60_000_000));
        let out = evaluate_compliance(&s, &RegulatoryConstants::rbi_2025()).unwrap();
        assert!(!out.methodology.is_empty());
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    }
}
