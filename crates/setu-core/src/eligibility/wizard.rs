use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::SetuError;
use crate::types::{HouseholdCategory, Money, Pct};
use crate::SetuResult;

use super::assessor::{
    BorrowerProfile, IncomeCategory, IncomeSource, LoanPurpose, Obligation, ProposedLoan,
};

/// Steps of the linear intake flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    Household,
    IncomeSources,
    Obligations,
    ProposedLoan,
    Summary,
}

impl WizardStep {
    const ORDER: [WizardStep; 6] = [
        WizardStep::Welcome,
        WizardStep::Household,
        WizardStep::IncomeSources,
        WizardStep::Obligations,
        WizardStep::ProposedLoan,
        WizardStep::Summary,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Finite-state intake wizard building a borrower profile.
///
/// Holds the profile-under-construction and the current step; the step only
/// moves through validated `advance`/`back` transitions, and the profile can
/// only be taken out at the summary step. No rendering concerns live here;
/// a front end drives the transitions and draws whatever it likes.
#[derive(Debug, Clone)]
pub struct ProfileWizard {
    step: WizardStep,
    household: HouseholdCategory,
    household_size: u32,
    earning_members: u32,
    income_sources: Vec<IncomeSource>,
    obligations: Vec<Obligation>,
    proposed_loan: ProposedLoan,
}

impl Default for ProfileWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileWizard {
    /// Fresh wizard with the standard intake defaults.
    pub fn new() -> Self {
        ProfileWizard {
            step: WizardStep::Welcome,
            household: HouseholdCategory::Rural,
            household_size: 4,
            earning_members: 1,
            income_sources: Vec::new(),
            obligations: Vec::new(),
            proposed_loan: ProposedLoan {
                principal: dec!(50_000),
                tenure_months: 12,
                annual_rate_pct: dec!(24),
                purpose: LoanPurpose::IncomeGeneration,
            },
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Completed fraction of the flow, in percentage points.
    pub fn progress_pct(&self) -> Pct {
        let last = (WizardStep::ORDER.len() - 1) as i64;
        Decimal::from(self.step.index() as i64) / Decimal::from(last) * dec!(100)
    }

    /// Move to the next step, validating the current one first.
    pub fn advance(&mut self) -> SetuResult<WizardStep> {
        self.validate_current_step()?;
        let next = WizardStep::ORDER
            .get(self.step.index() + 1)
            .copied()
            .ok_or_else(|| {
                SetuError::InvalidTransition("Already at the summary step.".to_string())
            })?;
        self.step = next;
        Ok(next)
    }

    /// Move to the previous step. Never validates; backing out is always safe.
    pub fn back(&mut self) -> SetuResult<WizardStep> {
        let idx = self.step.index();
        if idx == 0 {
            return Err(SetuError::InvalidTransition(
                "Already at the welcome step.".to_string(),
            ));
        }
        self.step = WizardStep::ORDER[idx - 1];
        Ok(self.step)
    }

    // -- Mutators for the profile-under-construction --------------------------

    pub fn set_household(&mut self, category: HouseholdCategory, size: u32, earners: u32) {
        self.household = category;
        self.household_size = size;
        self.earning_members = earners;
    }

    pub fn add_income_source(&mut self, category: IncomeCategory, monthly: Money, verifiable: bool) {
        self.income_sources.push(IncomeSource {
            category,
            monthly_amount: monthly,
            verifiable,
        });
    }

    pub fn remove_income_source(&mut self, index: usize) {
        if index < self.income_sources.len() {
            self.income_sources.remove(index);
        }
    }

    pub fn add_obligation(&mut self, lender: impl Into<String>, monthly_instalment: Money) {
        self.obligations.push(Obligation {
            lender: lender.into(),
            monthly_instalment,
        });
    }

    pub fn remove_obligation(&mut self, index: usize) {
        if index < self.obligations.len() {
            self.obligations.remove(index);
        }
    }

    pub fn set_proposed_loan(&mut self, loan: ProposedLoan) {
        self.proposed_loan = loan;
    }

    /// Finish the flow, yielding the immutable profile. Only valid at the
    /// summary step.
    pub fn into_profile(self) -> SetuResult<BorrowerProfile> {
        if self.step != WizardStep::Summary {
            return Err(SetuError::InvalidTransition(format!(
                "Profile is only complete at the summary step (currently at {:?}).",
                self.step
            )));
        }
        Ok(BorrowerProfile {
            household: self.household,
            household_size: self.household_size,
            earning_members: self.earning_members,
            income_sources: self.income_sources,
            obligations: self.obligations,
            proposed_loan: self.proposed_loan,
        })
    }

    fn validate_current_step(&self) -> SetuResult<()> {
        match self.step {
            WizardStep::Household => {
                if self.household_size == 0 {
                    return Err(SetuError::InvalidInput {
                        field: "household_size".into(),
                        reason: "Household must have at least one member.".into(),
                    });
                }
                if self.earning_members > self.household_size {
                    return Err(SetuError::InvalidInput {
                        field: "earning_members".into(),
                        reason: "Earning members cannot exceed household size.".into(),
                    });
                }
                Ok(())
            }
            WizardStep::IncomeSources => {
                if self.income_sources.is_empty() {
                    return Err(SetuError::InvalidInput {
                        field: "income_sources".into(),
                        reason: "Add at least one income source.".into(),
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard_at_income_step() -> ProfileWizard {
        let mut w = ProfileWizard::new();
        w.advance().unwrap(); // welcome -> household
        w.advance().unwrap(); // household -> income
        w
    }

    #[test]
    fn test_happy_path_walkthrough() {
        let mut w = ProfileWizard::new();
        assert_eq!(w.step(), WizardStep::Welcome);
        assert_eq!(w.progress_pct(), dec!(0));

        w.advance().unwrap();
        w.set_household(HouseholdCategory::Urban, 5, 2);
        w.advance().unwrap();

        w.add_income_source(IncomeCategory::DailyWages, dec!(12_000), false);
        w.advance().unwrap();

        w.add_obligation("Gram Sahara MFI", dec!(1500));
        w.advance().unwrap();

        w.advance().unwrap();
        assert_eq!(w.step(), WizardStep::Summary);
        assert_eq!(w.progress_pct(), dec!(100));

        let profile = w.into_profile().unwrap();
        assert_eq!(profile.household, HouseholdCategory::Urban);
        assert_eq!(profile.income_sources.len(), 1);
        assert_eq!(profile.obligations[0].lender, "Gram Sahara MFI");
    }

    #[test]
    fn test_income_step_requires_a_source() {
        let mut w = wizard_at_income_step();
        let err = w.advance().unwrap_err();
        match err {
            SetuError::InvalidInput { field, .. } => assert_eq!(field, "income_sources"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
        // Still parked on the income step
        assert_eq!(w.step(), WizardStep::IncomeSources);
    }

    #[test]
    fn test_household_step_validates_earners() {
        let mut w = ProfileWizard::new();
        w.advance().unwrap();
        w.set_household(HouseholdCategory::Rural, 2, 3);
        assert!(w.advance().is_err());
    }

    #[test]
    fn test_cannot_back_out_of_welcome() {
        let mut w = ProfileWizard::new();
        assert!(matches!(
            w.back().unwrap_err(),
            SetuError::InvalidTransition(_)
        ));
    }

    #[test]
    fn test_cannot_advance_past_summary() {
        let mut w = wizard_at_income_step();
        w.add_income_source(IncomeCategory::Salaried, dec!(10_000), true);
        w.advance().unwrap();
        w.advance().unwrap();
        w.advance().unwrap();
        assert_eq!(w.step(), WizardStep::Summary);
        assert!(w.advance().is_err());
    }

    #[test]
    fn test_profile_unavailable_before_summary() {
        let w = wizard_at_income_step();
        assert!(w.into_profile().is_err());
    }

    #[test]
    fn test_back_then_forward_keeps_data() {
        let mut w = wizard_at_income_step();
        w.add_income_source(IncomeCategory::Agriculture, dec!(8000), true);
        w.back().unwrap();
        w.advance().unwrap();
        w.advance().unwrap();
        assert_eq!(w.step(), WizardStep::Obligations);
    }
}
