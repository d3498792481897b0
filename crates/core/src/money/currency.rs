//! Currency metadata and currency-aware rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DECIMAL_PLACES;

/// A currency with its number of fractional digits.
///
/// All rounding of monetary amounts goes through [`Currency::round`], which
/// rounds half away from zero at the currency's decimal places. The rounding
/// mode is fixed so that computed amounts (and their string renderings) are
/// stable across the codebase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub decimal_places: u32,
}

impl Currency {
    pub fn new(code: impl Into<String>, decimal_places: u32) -> Self {
        Currency {
            code: code.into(),
            decimal_places,
        }
    }

    /// Looks up a currency by ISO code, falling back to two fractional
    /// digits for codes not in the table.
    pub fn known(code: &str) -> Self {
        let normalized = code.trim().to_uppercase();
        let decimal_places = match normalized.as_str() {
            // Zero-decimal currencies
            "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
            // Three-decimal currencies
            "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
            _ => DEFAULT_DECIMAL_PLACES,
        };
        Currency {
            code: normalized,
            decimal_places,
        }
    }

    /// Rounds an amount to this currency's decimal places, half away from
    /// zero, and rescales it so the fractional digits are always rendered
    /// (e.g. `100` becomes `100.00` for a two-decimal currency).
    pub fn round(&self, amount: Decimal) -> Decimal {
        let mut rounded =
            amount.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.decimal_places);
        rounded
    }

    /// Renders an amount with the currency code, e.g. `"EUR 12.50"`.
    pub fn format(&self, amount: Decimal) -> String {
        format!("{} {}", self.code, self.round(amount))
    }
}
