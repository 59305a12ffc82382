use rust_decimal_macros::dec;
use setu_core::eligibility::{
    assess_and_record, assess_eligibility, BorrowerProfile, IncomeCategory, IncomeSource,
    LoanPurpose, Obligation, ProposedLoan,
};
use setu_core::history::AssessmentHistory;
use setu_core::types::HouseholdCategory;
use setu_core::RegulatoryConstants;

// ===========================================================================
// Eligibility assessor scenarios
// ===========================================================================

/// ₹25,000/month household with one ₹5,000 EMI, asking for ₹50,000 over
/// 12 months at 24%.
fn boundary_profile() -> BorrowerProfile {
    BorrowerProfile {
        household: HouseholdCategory::Rural,
        household_size: 4,
        earning_members: 2,
        income_sources: vec![
            IncomeSource {
                category: IncomeCategory::Salaried,
                monthly_amount: dec!(18_000),
                verifiable: true,
            },
            IncomeSource {
                category: IncomeCategory::SmallBusiness,
                monthly_amount: dec!(7000),
                verifiable: true,
            },
        ],
        obligations: vec![Obligation {
            lender: "Janakalyan MFI".to_string(),
            monthly_instalment: dec!(5000),
        }],
        proposed_loan: ProposedLoan {
            principal: dec!(50_000),
            tenure_months: 12,
            annual_rate_pct: dec!(24),
            purpose: LoanPurpose::IncomeGeneration,
        },
    }
}

#[test]
fn test_boundary_household_is_eligible() {
    let out = assess_eligibility(&boundary_profile(), &RegulatoryConstants::rbi_2025()).unwrap();
    let r = &out.result;

    assert_eq!(r.monthly_income, dec!(25_000));
    // Annual income lands exactly on the ₹3L cap: still eligible
    assert_eq!(r.annual_income, dec!(300_000));
    assert!(r.income_within_cap);

    // EMI on ₹50k @ 24% over 12 months
    assert_eq!(r.proposed_instalment, dec!(4728));

    // FOIR = (5000 + 4728) / 25000 × 100 = 38.912%
    assert_eq!(r.foir_pct, dec!(38.912));
    assert!(r.foir_within_limit);

    assert!(r.eligible);
    // 38.912 ≤ 40: no Thin Headroom flag
    assert!(r.risk_flags.is_empty());
}

#[test]
fn test_income_cap_breach_alone_denies() {
    let mut profile = boundary_profile();
    // One extra rupee a month pushes annual income past ₹3,00,000
    profile.income_sources[0].monthly_amount = dec!(18_001);
    let out = assess_eligibility(&profile, &RegulatoryConstants::rbi_2025()).unwrap();
    let r = &out.result;

    assert!(!r.income_within_cap);
    assert!(r.foir_within_limit);
    assert!(!r.eligible);
}

#[test]
fn test_foir_breach_alone_denies() {
    let mut profile = boundary_profile();
    profile.obligations.push(Obligation {
        lender: "Sahayata Finance".to_string(),
        monthly_instalment: dec!(8000),
    });
    let out = assess_eligibility(&profile, &RegulatoryConstants::rbi_2025()).unwrap();
    let r = &out.result;

    // (5000 + 8000 + 4728) / 25000 = 70.912%
    assert!(r.foir_pct > dec!(50));
    assert!(r.income_within_cap);
    assert!(!r.foir_within_limit);
    assert!(!r.eligible);
}

#[test]
fn test_thin_headroom_flag_in_forty_to_fifty_band() {
    let mut profile = boundary_profile();
    profile.obligations[0].monthly_instalment = dec!(6000);
    let out = assess_eligibility(&profile, &RegulatoryConstants::rbi_2025()).unwrap();
    let r = &out.result;

    // (6000 + 4728) / 25000 = 42.912%: eligible but flagged
    assert!(r.eligible);
    assert_eq!(r.risk_flags.len(), 1);
    assert_eq!(r.risk_flags[0].title, "Thin Headroom");
}

#[test]
fn test_multiple_mfi_debt_flag() {
    let mut profile = boundary_profile();
    for lender in ["Ujjivan", "Spandana"] {
        profile.obligations.push(Obligation {
            lender: lender.to_string(),
            monthly_instalment: dec!(100),
        });
    }
    let out = assess_eligibility(&profile, &RegulatoryConstants::rbi_2025()).unwrap();
    assert!(out
        .result
        .risk_flags
        .iter()
        .any(|f| f.title == "Multiple MFI Debt"));
}

#[test]
fn test_high_dependency_flag() {
    let mut profile = boundary_profile();
    profile.household_size = 6;
    profile.earning_members = 1;
    let out = assess_eligibility(&profile, &RegulatoryConstants::rbi_2025()).unwrap();
    assert!(out
        .result
        .risk_flags
        .iter()
        .any(|f| f.title == "High Dependency"));
}

#[test]
fn test_zero_rate_loan_straight_lines() {
    let mut profile = boundary_profile();
    profile.proposed_loan.annual_rate_pct = dec!(0);
    let out = assess_eligibility(&profile, &RegulatoryConstants::rbi_2025()).unwrap();
    // 50000 / 12 ≈ 4167
    assert_eq!(out.result.proposed_instalment, dec!(4167));
}

#[test]
fn test_checks_toggle_independently() {
    let constants = RegulatoryConstants::rbi_2025();

    // Case 1: income fails, FOIR passes
    let mut profile = boundary_profile();
    profile.income_sources[0].monthly_amount = dec!(100_000);
    let r = assess_eligibility(&profile, &constants).unwrap().result;
    assert!(!r.income_within_cap && r.foir_within_limit);

    // Case 2: income passes, FOIR fails
    let mut profile = boundary_profile();
    profile.obligations[0].monthly_instalment = dec!(20_000);
    let r = assess_eligibility(&profile, &constants).unwrap().result;
    assert!(r.income_within_cap && !r.foir_within_limit);
}

// ===========================================================================
// History retention
// ===========================================================================

#[test]
fn test_fifty_one_assessments_evict_the_oldest() {
    let constants = RegulatoryConstants::rbi_2025();
    let profile = boundary_profile();
    let mut history = AssessmentHistory::in_memory();

    for _ in 0..51 {
        assess_and_record(&profile, &constants, &mut history).unwrap();
    }

    let recent = history.recent(50);
    assert_eq!(recent.len(), 50);
    // Newest first; ids 1..=51 were assigned and id 1 was evicted
    assert_eq!(recent[0].id, 51);
    assert_eq!(recent[49].id, 2);
    for pair in recent.windows(2) {
        assert!(pair[0].id > pair[1].id);
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn test_recorded_fields_match_assessment() {
    let constants = RegulatoryConstants::rbi_2025();
    let profile = boundary_profile();
    let mut history = AssessmentHistory::in_memory();

    let out = assess_and_record(&profile, &constants, &mut history).unwrap();
    let record = &history.recent(1)[0];

    assert_eq!(record.household, HouseholdCategory::Rural);
    assert_eq!(record.annual_income, dec!(300_000));
    assert_eq!(record.total_monthly_obligation, dec!(9728));
    assert_eq!(record.foir_pct, out.result.foir_pct);
}
