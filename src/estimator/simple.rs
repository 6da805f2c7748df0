use rust_decimal::Decimal;

use super::detailed::{add, mul, non_negative, ratio, round_amount};
use crate::error::EstimateError;
use crate::model::{CategoryAmount, CostCategory, DetailLevel, EstimationResult, ProjectInput};
use crate::parser::coerce::normalize_key;
use crate::rates::SimpleRates;

/// Quick estimate from a handful of inputs.
///
/// Only surface, room counts, construction and project type and the
/// sloping-terrain flag are read. Multipliers stack: high-end, then sloping
/// terrain, then project type. The result has a single
/// [`CostCategory::Overall`] bucket.
pub fn estimate_simple(
    input: &ProjectInput,
    rates: &SimpleRates,
) -> Result<EstimationResult, EstimateError> {
    let surface = non_negative(input.surface);

    let mut total = Decimal::ZERO;
    if surface > Decimal::ZERO {
        total = mul(surface, rates.base_rate, "surface cost")?;
        total = add(
            total,
            mul(Decimal::from(input.bedrooms), rates.per_bedroom, "bedrooms")?,
            "bedrooms",
        )?;
        total = add(
            total,
            mul(Decimal::from(input.bathrooms), rates.per_bathroom, "bathrooms")?,
            "bathrooms",
        )?;

        if is_high_end(&input.construction_type, rates) {
            total = mul(total, rates.high_end_multiplier, "high-end")?;
        }
        if input.sloping_terrain {
            total = mul(total, rates.sloping_terrain_multiplier, "sloping terrain")?;
        }
        total = mul(
            total,
            rates.project_type_multiplier(input.project_type),
            "project type",
        )?;
    }
    let total = round_amount(total);

    Ok(EstimationResult {
        detail: DetailLevel::Simple,
        total_estimation: total,
        categories: vec![CategoryAmount {
            category: CostCategory::Overall,
            amount: total,
        }],
        price_per_square_meter: ratio(total, surface)?,
        land_price_per_square_meter: Decimal::ZERO,
        land_to_total_ratio: Decimal::ZERO,
    })
}

fn is_high_end(construction_type: &str, rates: &SimpleRates) -> bool {
    match (
        normalize_key(construction_type),
        normalize_key(&rates.high_end_type),
    ) {
        (Some(kind), Some(high_end)) => kind == high_end,
        _ => false,
    }
}
