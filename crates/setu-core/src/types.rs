use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values, in whole rupees unless stated otherwise.
pub type Money = Decimal;

/// Percentages expressed in points (15 = 15%). Every figure in the RBI 2025
/// Directions (CRAR floor, composition ratio, FOIR limit, loan rates) is
/// quoted in points, so the whole crate follows that convention rather than
/// decimal fractions.
pub type Pct = Decimal;

/// Rural/urban household classification used in Annex I assessments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdCategory {
    #[default]
    Rural,
    Urban,
}

impl std::fmt::Display for HouseholdCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HouseholdCategory::Rural => write!(f, "rural"),
            HouseholdCategory::Urban => write!(f, "urban"),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
