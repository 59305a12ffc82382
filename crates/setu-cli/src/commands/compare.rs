use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use setu_core::comparison::{evaluate_compliance, InstitutionalSnapshot};
use setu_core::RegulatoryConstants;

use crate::input;

/// Arguments for the structural comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a JSON snapshot file
    #[arg(long)]
    pub input: Option<String>,

    /// Total assets in rupees
    #[arg(long)]
    pub total_assets: Option<Decimal>,

    /// Microfinance assets in rupees
    #[arg(long)]
    pub mf_assets: Option<Decimal>,

    /// Net owned funds in rupees
    #[arg(long)]
    pub net_owned_funds: Option<Decimal>,

    /// Assumed annual growth in percent (negative for contraction)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub growth: Decimal,

    /// Projection horizon in years
    #[arg(long, default_value = "3")]
    pub years: u32,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let snapshot: InstitutionalSnapshot =
        if let Some(snapshot) = input::load(&args.input, "an institutional snapshot")? {
            snapshot
        } else if let (Some(total), Some(mf), Some(nof)) =
            (args.total_assets, args.mf_assets, args.net_owned_funds)
        {
            InstitutionalSnapshot {
                total_assets: total,
                microfinance_assets: mf,
                net_owned_funds: nof,
                annual_growth_pct: args.growth,
                projection_years: args.years,
            }
        } else {
            return Err("--input <file.json>, piped stdin, or all of \
                        --total-assets/--mf-assets/--net-owned-funds required"
                .into());
        };

    let result = evaluate_compliance(&snapshot, &RegulatoryConstants::rbi_2025())?;
    Ok(serde_json::to_value(result)?)
}
