use super::CostCategory;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Precision of an estimation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
    strum::Display, strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DetailLevel {
    Simple,
    #[default]
    Detailed,
}

impl DetailLevel {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Simple => Self::Detailed,
            Self::Detailed => Self::Simple,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: CostCategory,
    pub amount: Decimal,
}

impl CategoryAmount {
    /// Share of `total` in percent; 0 when `total` is 0.
    #[must_use]
    pub fn share_of(&self, total: Decimal) -> Decimal {
        if total > Decimal::ZERO {
            self.amount
                .checked_div(total)
                .and_then(|r| r.checked_mul(dec!(100)))
                .unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        }
    }
}

/// Price breakdown of a project. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub detail: DetailLevel,
    pub total_estimation: Decimal,
    pub categories: Vec<CategoryAmount>,
    pub price_per_square_meter: Decimal,
    pub land_price_per_square_meter: Decimal,
    /// Land cost as a percentage of the total.
    pub land_to_total_ratio: Decimal,
}

impl EstimationResult {
    #[must_use]
    pub fn amount(&self, category: CostCategory) -> Decimal {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map_or(Decimal::ZERO, |c| c.amount)
    }

    /// Sum of the construction buckets, land and fees excluded.
    #[must_use]
    pub fn construction_subtotal(&self) -> Decimal {
        self.categories
            .iter()
            .filter(|c| c.category.is_construction())
            .map(|c| c.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_guards_zero_total() {
        let item = CategoryAmount {
            category: CostCategory::Land,
            amount: dec!(50),
        };
        assert_eq!(item.share_of(dec!(200)), dec!(25));
        assert_eq!(item.share_of(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn detail_level_toggles() {
        assert_eq!(DetailLevel::Simple.toggle(), DetailLevel::Detailed);
        assert_eq!(DetailLevel::default().toggle(), DetailLevel::Simple);
    }
}
