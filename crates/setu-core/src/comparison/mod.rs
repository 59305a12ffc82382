pub mod engine;
pub mod projection;
pub mod rules;

pub use engine::{evaluate_compliance, ComparisonResult, InstitutionalSnapshot, StructuralPath};
pub use projection::ProjectionPoint;
pub use rules::{ComplianceStatus, ComplianceVerdict};
