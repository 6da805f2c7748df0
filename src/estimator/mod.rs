//! Cost estimation.
//!
//! [`Estimator`] owns a validated [`RateTable`] and produces an
//! [`EstimationResult`] at the requested [`DetailLevel`]. Both paths are
//! pure: the same input always gives the same breakdown. Amounts are
//! [`rust_decimal::Decimal`] and every step is checked, so an input too large
//! to price is an [`EstimateError`] instead of a wrong figure.

pub mod detailed;
pub mod simple;

pub use detailed::estimate_detailed;
pub use simple::estimate_simple;

use crate::error::{EstimateError, RatesError};
use crate::model::{DetailLevel, EstimationResult, ProjectInput};
use crate::rates::RateTable;

#[derive(Debug, Clone, Default)]
pub struct Estimator {
    rates: RateTable,
}

impl Estimator {
    /// Creates an estimator after checking the rate table.
    pub fn new(rates: RateTable) -> Result<Self, RatesError> {
        rates.validate()?;
        Ok(Self { rates })
    }

    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn estimate(
        &self,
        input: &ProjectInput,
        detail: DetailLevel,
    ) -> Result<EstimationResult, EstimateError> {
        let result = match detail {
            DetailLevel::Detailed => estimate_detailed(input, &self.rates),
            DetailLevel::Simple => estimate_simple(input, &self.rates.simple),
        }?;
        tracing::debug!(
            %detail,
            surface = %input.surface,
            quality = %input.quality,
            total = %result.total_estimation,
            "estimation computed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CostCategory;
    use rust_decimal_macros::dec;

    #[test]
    fn dispatches_on_detail_level() {
        let estimator = Estimator::default();
        let input = ProjectInput {
            construction_type: "traditional".to_string(),
            surface: dec!(120),
            ..ProjectInput::default()
        };

        let detailed = estimator.estimate(&input, DetailLevel::Detailed).unwrap();
        assert_eq!(detailed.detail, DetailLevel::Detailed);
        assert!(detailed.categories.len() > 1);

        let simple = estimator.estimate(&input, DetailLevel::Simple).unwrap();
        assert_eq!(simple.detail, DetailLevel::Simple);
        assert_eq!(simple.categories[0].category, CostCategory::Overall);
    }

    #[test]
    fn rejects_invalid_rates() {
        let mut rates = RateTable::default();
        rates.splits.clear();
        assert!(Estimator::new(rates).is_err());
    }
}
