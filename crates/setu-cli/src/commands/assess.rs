use clap::Args;
use serde_json::Value;

use setu_core::eligibility::{assess_and_record, assess_eligibility, BorrowerProfile};
use setu_core::history::AssessmentHistory;
use setu_core::RegulatoryConstants;

use crate::input;
use crate::store::JsonFileStore;

/// Arguments for borrower eligibility assessment
#[derive(Args)]
pub struct AssessArgs {
    /// Path to a JSON borrower profile
    #[arg(long)]
    pub input: Option<String>,

    /// Path to the assessment history file; the outcome is appended when set
    #[arg(long)]
    pub history: Option<String>,
}

pub fn run_assess(args: AssessArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: BorrowerProfile = input::load(&args.input, "a borrower profile")?
        .ok_or("--input <file.json> or piped stdin required for assessment")?;

    let constants = RegulatoryConstants::rbi_2025();

    let result = match args.history {
        Some(path) => {
            let mut history = AssessmentHistory::with_store(JsonFileStore::new(path))?;
            assess_and_record(&profile, &constants, &mut history)?
        }
        None => assess_eligibility(&profile, &constants)?,
    };

    Ok(serde_json::to_value(result)?)
}
