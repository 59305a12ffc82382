use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::equated_monthly_instalment;
use crate::constants::RegulatoryConstants;
use crate::error::SetuError;
use crate::history::{AssessmentHistory, AssessmentOutcome, HistoryStore};
use crate::types::{with_metadata, ComputationOutput, HouseholdCategory, Money, Pct};
use crate::SetuResult;

use super::flags::{evaluate_flags, FlagContext, RiskFlag};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Income source categories from the Annex I assessment catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeCategory {
    Salaried,
    DailyWages,
    Agriculture,
    SmallBusiness,
    Remittance,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    pub category: IncomeCategory,
    pub monthly_amount: Money,
    /// Whether the amount is backed by documentation.
    pub verifiable: bool,
}

/// An existing monthly repayment commitment to any lender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    pub lender: String,
    pub monthly_instalment: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanPurpose {
    IncomeGeneration,
    Housing,
    Consumption,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposedLoan {
    pub principal: Money,
    pub tenure_months: u32,
    pub annual_rate_pct: Pct,
    pub purpose: LoanPurpose,
}

/// One borrower profile, as collected by the intake flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub household: HouseholdCategory,
    pub household_size: u32,
    pub earning_members: u32,
    pub income_sources: Vec<IncomeSource>,
    pub obligations: Vec<Obligation>,
    pub proposed_loan: ProposedLoan,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub monthly_income: Money,
    pub annual_income: Money,
    pub existing_obligation_total: Money,
    pub proposed_instalment: Money,
    /// Combined fixed-obligations-to-income ratio, in percentage points.
    pub foir_pct: Pct,
    pub income_within_cap: bool,
    pub foir_within_limit: bool,
    /// Both checks must pass.
    pub eligible: bool,
    pub risk_flags: Vec<RiskFlag>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Assess one borrower profile against the Annex I income cap and FOIR limit.
///
/// Pure computation; the history append lives in [`assess_and_record`] so the
/// write side effect stays explicit and the calculation stays testable alone.
pub fn assess_eligibility(
    profile: &BorrowerProfile,
    constants: &RegulatoryConstants,
) -> SetuResult<ComputationOutput<EligibilityResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_profile(profile)?;

    // -- Income ---------------------------------------------------------------
    let monthly_income: Money = profile
        .income_sources
        .iter()
        .map(|s| s.monthly_amount)
        .sum();
    let annual_income = monthly_income * dec!(12);

    if monthly_income.is_zero() {
        warnings.push("No household income reported; the income check fails by policy.".to_string());
    }
    if profile.income_sources.iter().any(|s| !s.verifiable) {
        warnings.push("One or more income sources are unverified.".to_string());
    }

    // -- Debt service ---------------------------------------------------------
    let existing_obligation_total: Money = profile
        .obligations
        .iter()
        .map(|o| o.monthly_instalment)
        .sum();
    let proposed_instalment = equated_monthly_instalment(
        profile.proposed_loan.principal,
        profile.proposed_loan.annual_rate_pct,
        profile.proposed_loan.tenure_months,
    )?;
    let total_debt_service = existing_obligation_total + proposed_instalment;

    // A zero-income household has FOIR 0 by definition, not an error; the
    // income check fails instead.
    let foir_pct = if monthly_income > Decimal::ZERO {
        total_debt_service / monthly_income * dec!(100)
    } else {
        Decimal::ZERO
    };

    // -- Checks ---------------------------------------------------------------
    let income_within_cap =
        monthly_income > Decimal::ZERO && annual_income <= constants.annual_income_cap;
    let foir_within_limit = foir_pct <= constants.max_foir_pct;
    let eligible = income_within_cap && foir_within_limit;

    // -- Risk flags -----------------------------------------------------------
    let risk_flags = evaluate_flags(&FlagContext {
        obligation_count: profile.obligations.len(),
        foir_pct,
        earning_members: profile.earning_members,
        household_size: profile.household_size,
    });

    let output = EligibilityResult {
        monthly_income,
        annual_income,
        existing_obligation_total,
        proposed_instalment,
        foir_pct,
        income_within_cap,
        foir_within_limit,
        eligible,
        risk_flags,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "annual_income_cap": constants.annual_income_cap.to_string(),
        "max_foir_pct": constants.max_foir_pct.to_string(),
        "proposed_tenure_months": profile.proposed_loan.tenure_months,
        "proposed_annual_rate_pct": profile.proposed_loan.annual_rate_pct.to_string(),
    });

    Ok(with_metadata(
        "Annex I borrower eligibility (income cap + FOIR)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

/// Assess and append the outcome to the assessment log in one step.
pub fn assess_and_record<S: HistoryStore>(
    profile: &BorrowerProfile,
    constants: &RegulatoryConstants,
    history: &mut AssessmentHistory<S>,
) -> SetuResult<ComputationOutput<EligibilityResult>> {
    let assessment = assess_eligibility(profile, constants)?;

    let r = &assessment.result;
    let outcome = if r.eligible {
        AssessmentOutcome::Pass
    } else {
        AssessmentOutcome::Fail
    };
    history.record(
        profile.household,
        r.annual_income,
        r.existing_obligation_total + r.proposed_instalment,
        r.foir_pct,
        outcome,
    )?;

    Ok(assessment)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_profile(profile: &BorrowerProfile) -> SetuResult<()> {
    if profile.earning_members > profile.household_size {
        return Err(SetuError::InvalidInput {
            field: "earning_members".into(),
            reason: "Earning members cannot exceed household size.".into(),
        });
    }
    if let Some(source) = profile
        .income_sources
        .iter()
        .find(|s| s.monthly_amount < Decimal::ZERO)
    {
        return Err(SetuError::InvalidInput {
            field: "income_sources".into(),
            reason: format!(
                "Monthly income for {:?} source cannot be negative.",
                source.category
            ),
        });
    }
    if profile
        .obligations
        .iter()
        .any(|o| o.monthly_instalment < Decimal::ZERO)
    {
        return Err(SetuError::InvalidInput {
            field: "obligations".into(),
            reason: "Monthly instalments cannot be negative.".into(),
        });
    }
    if profile.proposed_loan.tenure_months == 0 {
        return Err(SetuError::InvalidInput {
            field: "proposed_loan.tenure_months".into(),
            reason: "Loan tenure must be at least one month.".into(),
        });
    }
    if profile.proposed_loan.principal < Decimal::ZERO {
        return Err(SetuError::InvalidInput {
            field: "proposed_loan.principal".into(),
            reason: "Loan principal cannot be negative.".into(),
        });
    }
    if profile.proposed_loan.annual_rate_pct < Decimal::ZERO {
        return Err(SetuError::InvalidInput {
            field: "proposed_loan.annual_rate_pct".into(),
            reason: "Nominal annual rate cannot be negative.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
