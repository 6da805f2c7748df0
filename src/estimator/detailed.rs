use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::EstimateError;
use crate::model::{
    CategoryAmount, CostCategory, DetailLevel, EstimationResult, ProjectInput, TechnicalChoice,
};
use crate::rates::{BasementModel, RateTable};

const CHOICES: [TechnicalChoice; 6] = [
    TechnicalChoice::Roof,
    TechnicalChoice::Insulation,
    TechnicalChoice::Heating,
    TechnicalChoice::Foundation,
    TechnicalChoice::Wall,
    TechnicalChoice::Finish,
];

const ONE_HUNDRED: Decimal = dec!(100);

/// Full price breakdown of a project.
///
/// Steps:
/// 1. per-m² price of the construction type (surface brackets, baseline
///    price for unknown types) times the quality multiplier;
/// 2. times the surface, split across the construction categories;
/// 3. levels, basement, technical choices and flat option costs adjust
///    their categories;
/// 4. land is added as its own category, ancillary fees as a rate of the
///    construction subtotal.
///
/// Every category is rounded to whole units and the total is the sum of the
/// rounded amounts. A zero surface zeroes every construction category.
/// Amounts too large for [`Decimal`] give [`EstimateError::Overflow`].
pub fn estimate_detailed(
    input: &ProjectInput,
    rates: &RateTable,
) -> Result<EstimationResult, EstimateError> {
    let surface = non_negative(input.surface);

    let type_price = match rates.known_base_price(&input.construction_type, surface) {
        Some(price) => price,
        None => {
            if !input.construction_type.is_empty() {
                tracing::warn!(
                    construction_type = %input.construction_type,
                    baseline = %rates.baseline_price,
                    "unknown construction type, using baseline price"
                );
            }
            rates.baseline_price
        }
    };
    let per_square_meter = mul(type_price, rates.quality_multiplier(input.quality), "base price")?;
    let base_cost = mul(per_square_meter, surface, "base cost")?;

    let mut amounts = rates
        .splits
        .iter()
        .map(|split| {
            let amount = mul(base_cost, split.percent, "category split")? / ONE_HUNDRED;
            Ok((split.category, amount))
        })
        .collect::<Result<Vec<(CostCategory, Decimal)>, EstimateError>>()?;

    if base_cost > Decimal::ZERO {
        apply_adjustments(input, rates, surface, &mut amounts)?;
    }

    let mut categories: Vec<CategoryAmount> = amounts
        .into_iter()
        .map(|(category, amount)| CategoryAmount {
            category,
            amount: round_amount(amount),
        })
        .collect();

    let construction = categories
        .iter()
        .try_fold(Decimal::ZERO, |sum, c| add(sum, c.amount, "construction subtotal"))?;
    let land = round_amount(input.land_price);
    let fees = round_amount(mul(construction, rates.ancillary_fee_rate, "ancillary fees")?);
    let total = add(add(construction, land, "total")?, fees, "total")?;

    categories.push(CategoryAmount {
        category: CostCategory::Land,
        amount: land,
    });
    categories.push(CategoryAmount {
        category: CostCategory::AncillaryFees,
        amount: fees,
    });

    Ok(EstimationResult {
        detail: DetailLevel::Detailed,
        total_estimation: total,
        categories,
        price_per_square_meter: ratio(total - land, surface)?,
        land_price_per_square_meter: ratio(land, non_negative(input.terrain_surface))?,
        land_to_total_ratio: mul(ratio(land, total)?, ONE_HUNDRED, "land share")?,
    })
}

fn apply_adjustments(
    input: &ProjectInput,
    rates: &RateTable,
    surface: Decimal,
    amounts: &mut Vec<(CostCategory, Decimal)>,
) -> Result<(), EstimateError> {
    if input.levels > 1 {
        let extra_levels = Decimal::from(input.levels - 1);
        let factor = add(
            Decimal::ONE,
            mul(rates.level_surcharge, extra_levels, "level surcharge")?,
            "level surcharge",
        )?;
        scale(amounts, CostCategory::StructuralWork, factor)?;
    }

    if input.basement {
        match rates.basement {
            BasementModel::Multiplier { factor } => {
                scale(amounts, CostCategory::StructuralWork, factor)?;
            }
            BasementModel::PerSquareMeter { rate } => {
                let extra = mul(surface, rate, "basement")?;
                extend(amounts, CostCategory::StructuralWork, extra)?;
            }
        }
    }

    for choice in CHOICES {
        let Some(key) = input.choice(choice) else {
            continue;
        };
        let Some(rule) = rates.choices.get(&choice) else {
            continue;
        };
        let multiplier = rates.choice_multiplier(choice, key);
        for &category in &rule.categories {
            scale(amounts, category, multiplier)?;
        }
    }

    for (&option, cost) in &rates.options {
        if input.has_option(option) {
            extend(amounts, cost.category, cost.amount)?;
        }
    }
    Ok(())
}

fn scale(
    amounts: &mut [(CostCategory, Decimal)],
    category: CostCategory,
    factor: Decimal,
) -> Result<(), EstimateError> {
    for (c, amount) in amounts.iter_mut() {
        if *c == category {
            *amount = mul(*amount, factor, "adjustment")?;
        }
    }
    Ok(())
}

fn extend(
    amounts: &mut Vec<(CostCategory, Decimal)>,
    category: CostCategory,
    extra: Decimal,
) -> Result<(), EstimateError> {
    match amounts.iter_mut().find(|(c, _)| *c == category) {
        Some((_, amount)) => *amount = add(*amount, extra, "adjustment")?,
        None => amounts.push((category, extra)),
    }
    Ok(())
}

pub(crate) fn mul(a: Decimal, b: Decimal, step: &'static str) -> Result<Decimal, EstimateError> {
    a.checked_mul(b).ok_or(EstimateError::Overflow { step })
}

pub(crate) fn add(a: Decimal, b: Decimal, step: &'static str) -> Result<Decimal, EstimateError> {
    a.checked_add(b).ok_or(EstimateError::Overflow { step })
}

pub(crate) fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Whole units, halves away from zero; negatives become 0.
pub(crate) fn round_amount(amount: Decimal) -> Decimal {
    non_negative(amount).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// `numerator / denominator`, 0 when the denominator is 0.
pub(crate) fn ratio(numerator: Decimal, denominator: Decimal) -> Result<Decimal, EstimateError> {
    if denominator > Decimal::ZERO {
        numerator
            .checked_div(denominator)
            .ok_or(EstimateError::Overflow { step: "ratio" })
    } else {
        Ok(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QualityTier;
    use pretty_assertions::assert_eq;

    fn reference_input() -> ProjectInput {
        ProjectInput {
            construction_type: "traditional".to_string(),
            surface: dec!(120),
            quality: QualityTier::Standard,
            ..ProjectInput::default()
        }
    }

    fn estimate(input: &ProjectInput, rates: &RateTable) -> EstimationResult {
        estimate_detailed(input, rates).unwrap()
    }

    #[test]
    fn reference_scenario() {
        let result = estimate(&reference_input(), &RateTable::default());

        assert_eq!(result.construction_subtotal(), dec!(216000));
        assert_eq!(result.amount(CostCategory::StructuralWork), dec!(75600));
        assert_eq!(result.amount(CostCategory::AncillaryFees), dec!(21600));
        assert_eq!(result.amount(CostCategory::Land), Decimal::ZERO);
        assert_eq!(result.total_estimation, dec!(237600));
        assert_eq!(result.price_per_square_meter, dec!(1980));
    }

    #[test]
    fn levels_add_surcharge_to_structural_work() {
        let input = ProjectInput {
            levels: 3,
            ..reference_input()
        };
        let result = estimate(&input, &RateTable::default());
        // 75 600 * (1 + 0.15 * 2)
        assert_eq!(result.amount(CostCategory::StructuralWork), dec!(98280));
    }

    #[test]
    fn basement_models() {
        let input = ProjectInput {
            basement: true,
            ..reference_input()
        };
        let mut rates = RateTable::default();
        let result = estimate(&input, &rates);
        assert_eq!(result.amount(CostCategory::StructuralWork), dec!(94500));

        rates.basement = BasementModel::PerSquareMeter { rate: dec!(500) };
        let result = estimate(&input, &rates);
        assert_eq!(result.amount(CostCategory::StructuralWork), dec!(135600));
    }

    #[test]
    fn choices_scale_their_categories() {
        let input = ProjectInput {
            roof_type: Some("flat".to_string()),
            finish_level: Some("high".to_string()),
            heating_type: Some("wood-stove".to_string()),
            ..reference_input()
        };
        let result = estimate(&input, &RateTable::default());
        assert_eq!(result.amount(CostCategory::Roofing), dec!(25920));
        assert_eq!(result.amount(CostCategory::Flooring), dec!(12960));
        assert_eq!(result.amount(CostCategory::Painting), dec!(10368));
        // unmatched value keeps multiplier 1
        assert_eq!(result.amount(CostCategory::Heating), dec!(12960));
    }

    #[test]
    fn air_conditioning_is_a_flat_heating_cost() {
        let input = ProjectInput {
            has_air_conditioning: true,
            ..reference_input()
        };
        let result = estimate(&input, &RateTable::default());
        assert_eq!(result.amount(CostCategory::Heating), dec!(20960));
        assert_eq!(result.amount(CostCategory::AncillaryFees), dec!(22400));
    }

    #[test]
    fn zero_surface_keeps_options_out() {
        let input = ProjectInput {
            surface: Decimal::ZERO,
            has_air_conditioning: true,
            pool: true,
            land_price: dec!(80000),
            ..reference_input()
        };
        let result = estimate(&input, &RateTable::default());
        assert_eq!(result.construction_subtotal(), Decimal::ZERO);
        assert_eq!(result.total_estimation, dec!(80000));
        assert_eq!(result.price_per_square_meter, Decimal::ZERO);
        assert_eq!(result.land_price_per_square_meter, Decimal::ZERO);
        assert_eq!(result.land_to_total_ratio, dec!(100));
    }

    #[test]
    fn unknown_type_uses_baseline_price() {
        let input = ProjectInput {
            construction_type: "yurt".to_string(),
            ..reference_input()
        };
        let result = estimate(&input, &RateTable::default());
        assert_eq!(result.total_estimation, dec!(237600));
    }

    #[test]
    fn out_of_range_amounts_are_reported() {
        let input = ProjectInput {
            surface: Decimal::MAX,
            ..reference_input()
        };
        assert_eq!(
            estimate_detailed(&input, &RateTable::default()),
            Err(EstimateError::Overflow { step: "base cost" })
        );
    }

    #[test]
    fn ratio_guards_zero() {
        assert_eq!(ratio(dec!(10), Decimal::ZERO), Ok(Decimal::ZERO));
        assert_eq!(ratio(dec!(10), dec!(4)), Ok(dec!(2.5)));
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_amount(dec!(2.5)), dec!(3));
        assert_eq!(round_amount(dec!(3.5)), dec!(4));
        assert_eq!(round_amount(dec!(-7)), Decimal::ZERO);
    }
}
