use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::RegulatoryConstants;
use crate::types::{Money, Pct};

/// One projected year in the asset-growth trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-based year index.
    pub year: u32,
    /// Projected total assets, rounded to the whole rupee.
    pub total_assets: Money,
    /// Projected microfinance assets, rounded to the whole rupee.
    pub microfinance_assets: Money,
    pub composition_ratio: Pct,
    /// Owned funds implied by the CRAR floor against projected MF assets.
    pub owned_funds_requirement: Money,
    /// Whether projected total assets meet or exceed the Section 8 asset cap.
    pub crosses_asset_cap: bool,
}

/// Compound both asset totals forward by `(1 + growth/100)` per year.
///
/// Compounding is carried at full precision; each recorded point holds
/// whole-rupee figures. A zero horizon yields an empty trajectory.
pub(crate) fn project_asset_growth(
    total_assets: Money,
    microfinance_assets: Money,
    annual_growth_pct: Pct,
    years: u32,
    constants: &RegulatoryConstants,
) -> Vec<ProjectionPoint> {
    let multiplier = Decimal::ONE + annual_growth_pct / dec!(100);
    let crar_fraction = constants.min_crar_pct / dec!(100);

    let mut points = Vec::with_capacity(years as usize);
    let mut total = total_assets;
    let mut mf = microfinance_assets;

    for year in 1..=years {
        total *= multiplier;
        mf *= multiplier;

        let ratio = if total > Decimal::ZERO {
            mf / total * dec!(100)
        } else {
            Decimal::ZERO
        };

        points.push(ProjectionPoint {
            year,
            total_assets: round_rupee(total),
            microfinance_assets: round_rupee(mf),
            composition_ratio: ratio,
            owned_funds_requirement: round_rupee(mf * crar_fraction),
            crosses_asset_cap: total >= constants.section8_asset_cap,
        });
    }

    points
}

fn round_rupee(amount: Decimal) -> Money {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_horizon_is_empty() {
        let c = RegulatoryConstants::rbi_2025();
        let points = project_asset_growth(dec!(500_000_000), dec!(350_000_000), dec!(20), 0, &c);
        assert!(points.is_empty());
    }

    #[test]
    fn test_positive_growth_strictly_increases_totals() {
        let c = RegulatoryConstants::rbi_2025();
        let points = project_asset_growth(dec!(500_000_000), dec!(350_000_000), dec!(20), 5, &c);
        assert_eq!(points.len(), 5);
        for pair in points.windows(2) {
            assert!(pair[1].total_assets > pair[0].total_assets);
            assert!(pair[1].microfinance_assets > pair[0].microfinance_assets);
        }
    }

    #[test]
    fn test_first_year_compounds_once() {
        let c = RegulatoryConstants::rbi_2025();
        let points = project_asset_growth(dec!(100_000_000), dec!(60_000_000), dec!(10), 1, &c);
        assert_eq!(points[0].year, 1);
        assert_eq!(points[0].total_assets, dec!(110_000_000));
        assert_eq!(points[0].microfinance_assets, dec!(66_000_000));
    }

    #[test]
    fn test_composition_ratio_invariant_under_uniform_growth() {
        // Both series grow at the same rate, so the mix never changes
        let c = RegulatoryConstants::rbi_2025();
        let points = project_asset_growth(dec!(500_000_000), dec!(350_000_000), dec!(15), 4, &c);
        for p in &points {
            assert_eq!(p.composition_ratio.round_dp(6), dec!(70));
        }
    }

    #[test]
    fn test_owned_funds_requirement_is_crar_floor_share() {
        let c = RegulatoryConstants::rbi_2025();
        let points = project_asset_growth(dec!(100_000_000), dec!(60_000_000), dec!(0), 1, &c);
        // 15% of ₹6 Cr
        assert_eq!(points[0].owned_funds_requirement, dec!(9_000_000));
    }

    #[test]
    fn test_cap_crossing_flag() {
        let c = RegulatoryConstants::rbi_2025();
        // ₹90 Cr at 20% growth crosses ₹100 Cr in year 1
        let points = project_asset_growth(dec!(900_000_000), dec!(600_000_000), dec!(20), 3, &c);
        assert!(points[0].crosses_asset_cap);

        // Flat book below the cap never crosses
        let flat = project_asset_growth(dec!(500_000_000), dec!(350_000_000), dec!(0), 3, &c);
        assert!(flat.iter().all(|p| !p.crosses_asset_cap));
    }

    #[test]
    fn test_contraction_scenario_shrinks() {
        let c = RegulatoryConstants::rbi_2025();
        let points = project_asset_growth(dec!(500_000_000), dec!(350_000_000), dec!(-10), 2, &c);
        assert_eq!(points[0].total_assets, dec!(450_000_000));
        assert_eq!(points[1].total_assets, dec!(405_000_000));
    }
}
