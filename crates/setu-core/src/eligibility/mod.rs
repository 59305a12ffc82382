pub mod assessor;
pub mod flags;
pub mod wizard;

pub use assessor::{
    assess_and_record, assess_eligibility, BorrowerProfile, EligibilityResult, IncomeCategory,
    IncomeSource, LoanPurpose, Obligation, ProposedLoan,
};
pub use flags::{FlagSeverity, RiskFlag};
pub use wizard::{ProfileWizard, WizardStep};
