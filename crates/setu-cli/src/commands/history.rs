use clap::Args;
use serde_json::Value;

use setu_core::history::AssessmentHistory;

use crate::store::JsonFileStore;

/// Arguments for listing assessment history
#[derive(Args)]
pub struct HistoryArgs {
    /// Path to the assessment history file
    #[arg(long)]
    pub history: String,

    /// Maximum number of records to list, newest first
    #[arg(long, default_value = "10")]
    pub limit: usize,
}

pub fn run_history(args: HistoryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let history = AssessmentHistory::with_store(JsonFileStore::new(args.history))?;
    let records = history.recent(args.limit);

    Ok(serde_json::json!({
        "count": records.len(),
        "total_retained": history.len(),
        "records": records,
    }))
}
