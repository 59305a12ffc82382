use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Pct};

/// Named thresholds from the RBI 2025 Microfinance Directions.
///
/// Pure data. Both engines take these by reference instead of reading
/// ambient globals, so a tightened future circular only needs a new
/// constructor here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulatoryConstants {
    /// Minimum share of microfinance assets in total assets (Para 3(1)(iii)).
    pub min_microfinance_asset_pct: Pct,
    /// Total-asset ceiling for Section 8 microfinance companies (Para 2(1)(iv)).
    pub section8_asset_cap: Money,
    /// Minimum capital-to-risk-weighted-assets ratio (Para 9).
    pub min_crar_pct: Pct,
    /// Minimum net owned funds for NBFC-MFI registration.
    pub min_net_owned_funds: Money,
    /// Annual household income ceiling for microfinance borrowers (Annex I).
    pub annual_income_cap: Money,
    /// Maximum fixed-obligations-to-income ratio (Para 7(1)).
    pub max_foir_pct: Pct,
}

impl RegulatoryConstants {
    /// Thresholds as notified in the RBI 2025 Directions.
    pub fn rbi_2025() -> Self {
        RegulatoryConstants {
            min_microfinance_asset_pct: dec!(60),
            section8_asset_cap: dec!(100_00_00_000),
            min_crar_pct: dec!(15),
            min_net_owned_funds: dec!(5_00_00_000),
            annual_income_cap: dec!(300_000),
            max_foir_pct: dec!(50),
        }
    }
}

impl Default for RegulatoryConstants {
    fn default() -> Self {
        Self::rbi_2025()
    }
}
