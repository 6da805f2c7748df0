//! Built-in rates used when no rate table file is supplied.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{CostCategory, ProjectOption, ProjectType, QualityTier, TechnicalChoice};

pub const BASELINE_PRICE: Decimal = dec!(1800);

pub const LEVEL_SURCHARGE: Decimal = dec!(0.15);

pub const BASEMENT_MULTIPLIER: Decimal = dec!(1.25);

pub const ANCILLARY_FEE_RATE: Decimal = dec!(0.10);

// (construction type, price per m², [(above surface, price per m²)])
pub const BASE_PRICES: &[(&str, Decimal, &[(Decimal, Decimal)])] = &[
    ("traditional", dec!(1800), &[]),
    ("contemporary", dec!(2100), &[]),
    ("eco-friendly", dec!(2400), &[]),
    ("high-end", dec!(3000), &[(dec!(250), dec!(3200))]), // large villas
];

pub const QUALITY_MULTIPLIERS: &[(QualityTier, Decimal)] = &[
    (QualityTier::Budget, dec!(0.8)),
    (QualityTier::BudgetPlus, dec!(0.9)),
    (QualityTier::Standard, dec!(1)),
    (QualityTier::Premium, dec!(1.15)),
    (QualityTier::Luxury, dec!(1.3)),
];

// Percent of the base construction cost, sums to 100
pub const SPLITS: &[(CostCategory, Decimal)] = &[
    (CostCategory::StructuralWork, dec!(35)),
    (CostCategory::Roofing, dec!(10)),
    (CostCategory::ExteriorCarpentry, dec!(8)),
    (CostCategory::Insulation, dec!(6)),
    (CostCategory::Plumbing, dec!(7)),
    (CostCategory::Electrical, dec!(7)),
    (CostCategory::Heating, dec!(6)),
    (CostCategory::InteriorPartitions, dec!(5)),
    (CostCategory::InteriorCarpentry, dec!(4)),
    (CostCategory::Flooring, dec!(5)),
    (CostCategory::Painting, dec!(4)),
    (CostCategory::Landscaping, dec!(3)),
];

type ChoiceRow = (TechnicalChoice, &'static [CostCategory], &'static [(&'static str, Decimal)]);

pub const CHOICES: &[ChoiceRow] = &[
    (
        TechnicalChoice::Roof,
        &[CostCategory::Roofing],
        &[("flat", dec!(1.2)), ("complex", dec!(1.3))],
    ),
    (
        TechnicalChoice::Insulation,
        &[CostCategory::Insulation],
        &[("reinforced", dec!(1.3)), ("passive", dec!(1.4))],
    ),
    (
        TechnicalChoice::Heating,
        &[CostCategory::Heating],
        &[("heat-pump", dec!(1.3)), ("underfloor", dec!(1.4)), ("geothermal", dec!(1.5))],
    ),
    (
        TechnicalChoice::Foundation,
        &[CostCategory::StructuralWork],
        &[("raft", dec!(1.1)), ("piles", dec!(1.25))],
    ),
    (
        TechnicalChoice::Wall,
        &[CostCategory::StructuralWork],
        &[("timber-frame", dec!(1.1)), ("stone", dec!(1.2))],
    ),
    (
        TechnicalChoice::Finish,
        &[
            CostCategory::InteriorCarpentry,
            CostCategory::Flooring,
            CostCategory::Painting,
        ],
        &[("basic", dec!(0.9)), ("high", dec!(1.2))],
    ),
];

pub const OPTIONS: &[(ProjectOption, CostCategory, Decimal)] = &[
    (ProjectOption::AirConditioning, CostCategory::Heating, dec!(8000)),
    (ProjectOption::Pool, CostCategory::Landscaping, dec!(25000)),
    (ProjectOption::Terrace, CostCategory::Landscaping, dec!(6000)),
];

// Simplified estimator
pub const SIMPLE_BASE_RATE: Decimal = dec!(1500);
pub const SIMPLE_PER_BEDROOM: Decimal = dec!(5000);
pub const SIMPLE_PER_BATHROOM: Decimal = dec!(8000);
pub const SIMPLE_HIGH_END_TYPE: &str = "high-end";
pub const SIMPLE_HIGH_END_MULTIPLIER: Decimal = dec!(1.3);
pub const SIMPLE_SLOPING_TERRAIN_MULTIPLIER: Decimal = dec!(1.1);
pub const SIMPLE_PROJECT_TYPE_MULTIPLIERS: &[(ProjectType, Decimal)] = &[
    (ProjectType::New, dec!(1)),
    (ProjectType::Renovation, dec!(1.15)),
    (ProjectType::Extension, dec!(1.20)),
];
