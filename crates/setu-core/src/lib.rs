pub mod amortization;
pub mod constants;
pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "eligibility")]
pub mod eligibility;

#[cfg(feature = "history")]
pub mod history;

pub use constants::RegulatoryConstants;
pub use error::SetuError;
pub use types::*;

/// Standard result type for all setu-core operations
pub type SetuResult<T> = Result<T, SetuError>;
