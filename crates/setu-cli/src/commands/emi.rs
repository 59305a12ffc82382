use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use setu_core::amortization::equated_monthly_instalment;
use setu_core::format::format_inr;

/// Arguments for EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Loan principal in rupees
    #[arg(long)]
    pub principal: Decimal,

    /// Nominal annual rate in percent
    #[arg(long)]
    pub rate: Decimal,

    /// Tenure in months
    #[arg(long)]
    pub months: u32,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let instalment = equated_monthly_instalment(args.principal, args.rate, args.months)?;
    let total_repayment = instalment * Decimal::from(args.months);

    Ok(serde_json::json!({
        "principal": args.principal.to_string(),
        "annual_rate_pct": args.rate.to_string(),
        "tenure_months": args.months,
        "monthly_instalment": instalment.to_string(),
        "monthly_instalment_display": format_inr(instalment),
        "total_repayment": total_repayment.to_string(),
        "total_repayment_display": format_inr(total_repayment),
    }))
}
