use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::RatesError;
use crate::model::{CostCategory, ProjectOption, ProjectType, QualityTier, TechnicalChoice};
use crate::parser::coerce::normalize_key;

/// Per-m² price of a construction type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePrice {
    pub per_square_meter: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brackets: Vec<SurfaceBracket>,
}

/// Price override for surfaces strictly above `above_surface`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceBracket {
    pub above_surface: Decimal,
    pub per_square_meter: Decimal,
}

impl BasePrice {
    /// Price for `surface`, using the highest bracket it exceeds.
    #[must_use]
    pub fn price_for(&self, surface: Decimal) -> Decimal {
        self.brackets
            .iter()
            .filter(|b| surface > b.above_surface)
            .max_by_key(|b| b.above_surface)
            .map_or(self.per_square_meter, |b| b.per_square_meter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySplit {
    pub category: CostCategory,
    pub percent: Decimal,
}

/// How a basement is priced on top of the structural work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum BasementModel {
    /// Structural work is multiplied by `factor`.
    Multiplier { factor: Decimal },
    /// `surface * rate` is added to the structural work.
    PerSquareMeter { rate: Decimal },
}

/// Categories scaled by a technical choice and the multiplier of each option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceRule {
    pub categories: Vec<CostCategory>,
    pub multipliers: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionCost {
    pub category: CostCategory,
    pub amount: Decimal,
}

/// Rates of the simplified estimator. Independent from the detailed rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpleRates {
    pub base_rate: Decimal,
    pub per_bedroom: Decimal,
    pub per_bathroom: Decimal,
    pub high_end_type: String,
    pub high_end_multiplier: Decimal,
    pub sloping_terrain_multiplier: Decimal,
    pub project_type_multipliers: BTreeMap<ProjectType, Decimal>,
}

impl Default for SimpleRates {
    fn default() -> Self {
        Self {
            base_rate: defaults::SIMPLE_BASE_RATE,
            per_bedroom: defaults::SIMPLE_PER_BEDROOM,
            per_bathroom: defaults::SIMPLE_PER_BATHROOM,
            high_end_type: defaults::SIMPLE_HIGH_END_TYPE.to_string(),
            high_end_multiplier: defaults::SIMPLE_HIGH_END_MULTIPLIER,
            sloping_terrain_multiplier: defaults::SIMPLE_SLOPING_TERRAIN_MULTIPLIER,
            project_type_multipliers: defaults::SIMPLE_PROJECT_TYPE_MULTIPLIERS
                .iter()
                .copied()
                .collect(),
        }
    }
}

impl SimpleRates {
    #[must_use]
    pub fn project_type_multiplier(&self, project_type: ProjectType) -> Decimal {
        self.project_type_multipliers
            .get(&project_type)
            .copied()
            .unwrap_or(Decimal::ONE)
    }
}

/// Static configuration driving the estimation.
///
/// Fields missing from a rate table file keep their built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateTable {
    pub baseline_price: Decimal,
    pub base_prices: BTreeMap<String, BasePrice>,
    pub quality_multipliers: BTreeMap<QualityTier, Decimal>,
    pub splits: Vec<CategorySplit>,
    pub level_surcharge: Decimal,
    pub basement: BasementModel,
    pub choices: BTreeMap<TechnicalChoice, ChoiceRule>,
    pub options: BTreeMap<ProjectOption, OptionCost>,
    pub ancillary_fee_rate: Decimal,
    pub simple: SimpleRates,
}

impl Default for RateTable {
    fn default() -> Self {
        let base_prices = defaults::BASE_PRICES
            .iter()
            .map(|(name, price, brackets)| {
                let brackets = brackets
                    .iter()
                    .map(|&(above_surface, per_square_meter)| SurfaceBracket {
                        above_surface,
                        per_square_meter,
                    })
                    .collect();
                (
                    (*name).to_string(),
                    BasePrice {
                        per_square_meter: *price,
                        brackets,
                    },
                )
            })
            .collect();

        let choices = defaults::CHOICES
            .iter()
            .map(|(choice, categories, multipliers)| {
                let rule = ChoiceRule {
                    categories: categories.to_vec(),
                    multipliers: multipliers
                        .iter()
                        .map(|(key, m)| ((*key).to_string(), *m))
                        .collect(),
                };
                (*choice, rule)
            })
            .collect();

        let options = defaults::OPTIONS
            .iter()
            .map(|&(option, category, amount)| (option, OptionCost { category, amount }))
            .collect();

        Self {
            baseline_price: defaults::BASELINE_PRICE,
            base_prices,
            quality_multipliers: defaults::QUALITY_MULTIPLIERS.iter().copied().collect(),
            splits: defaults::SPLITS
                .iter()
                .map(|&(category, percent)| CategorySplit { category, percent })
                .collect(),
            level_surcharge: defaults::LEVEL_SURCHARGE,
            basement: BasementModel::Multiplier {
                factor: defaults::BASEMENT_MULTIPLIER,
            },
            choices,
            options,
            ancillary_fee_rate: defaults::ANCILLARY_FEE_RATE,
            simple: SimpleRates::default(),
        }
    }
}

impl RateTable {
    /// Per-m² price for a construction type, `None` when the type is unknown.
    ///
    /// `"High End"`, `"high_end"` and `"high-end"` name the same type.
    #[must_use]
    pub fn known_base_price(&self, construction_type: &str, surface: Decimal) -> Option<Decimal> {
        self.base_prices
            .get(construction_type)
            .or_else(|| {
                let key = normalize_key(construction_type)?;
                self.base_prices
                    .iter()
                    .find(|(name, _)| normalize_key(name).as_deref() == Some(key.as_str()))
                    .map(|(_, price)| price)
            })
            .map(|price| price.price_for(surface))
    }

    /// Per-m² price for a construction type, falling back to the baseline.
    #[must_use]
    pub fn base_price(&self, construction_type: &str, surface: Decimal) -> Decimal {
        self.known_base_price(construction_type, surface)
            .unwrap_or(self.baseline_price)
    }

    #[must_use]
    pub fn quality_multiplier(&self, tier: QualityTier) -> Decimal {
        self.quality_multipliers.get(&tier).copied().unwrap_or(Decimal::ONE)
    }

    /// Multiplier of the selected option of a choice; 1 when unmatched.
    #[must_use]
    pub fn choice_multiplier(&self, choice: TechnicalChoice, key: &str) -> Decimal {
        self.choices
            .get(&choice)
            .and_then(|rule| rule.multipliers.get(key))
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    /// Checks the table is usable by the estimator.
    pub fn validate(&self) -> Result<(), RatesError> {
        check_value("baselinePrice", self.baseline_price)?;
        check_value("levelSurcharge", self.level_surcharge)?;
        check_value("ancillaryFeeRate", self.ancillary_fee_rate)?;

        match self.basement {
            BasementModel::Multiplier { factor } => check_value("basement.factor", factor)?,
            BasementModel::PerSquareMeter { rate } => check_value("basement.rate", rate)?,
        }

        for (name, price) in &self.base_prices {
            check_value(&format!("basePrices.{name}"), price.per_square_meter)?;

            let mut brackets = price.brackets.clone();
            brackets.sort_by_key(|b| b.above_surface);
            let mut previous = price.per_square_meter;
            for bracket in brackets {
                check_value(
                    &format!("basePrices.{name}.aboveSurface"),
                    bracket.above_surface,
                )?;
                check_value(
                    &format!("basePrices.{name}.perSquareMeter"),
                    bracket.per_square_meter,
                )?;
                if bracket.per_square_meter < previous {
                    return Err(RatesError::DecreasingBracket {
                        construction_type: name.clone(),
                        above_surface: bracket.above_surface,
                    });
                }
                previous = bracket.per_square_meter;
            }
        }

        for (tier, multiplier) in &self.quality_multipliers {
            check_value(&format!("qualityMultipliers.{tier}"), *multiplier)?;
        }
        for pair in QualityTier::ALL.windows(2) {
            if self.quality_multiplier(pair[1]) <= self.quality_multiplier(pair[0]) {
                return Err(RatesError::UnorderedQuality { tier: pair[1] });
            }
        }

        let mut seen = BTreeSet::new();
        let mut total = Decimal::ZERO;
        for split in &self.splits {
            if !split.category.is_construction() {
                return Err(RatesError::NonConstructionSplit {
                    category: split.category,
                });
            }
            if !seen.insert(split.category) {
                return Err(RatesError::DuplicateSplit {
                    category: split.category,
                });
            }
            check_value(&format!("splits.{}", split.category), split.percent)?;
            total += split.percent;
        }
        if (total - dec!(100)).abs() > dec!(0.01) {
            return Err(RatesError::SplitTotal { total });
        }

        for (choice, rule) in &self.choices {
            if let Some(&category) = rule.categories.iter().find(|c| !c.is_construction()) {
                return Err(RatesError::NonConstructionSplit { category });
            }
            for (key, multiplier) in &rule.multipliers {
                check_value(&format!("choices.{choice}.{key}"), *multiplier)?;
            }
        }

        for (option, cost) in &self.options {
            if !cost.category.is_construction() {
                return Err(RatesError::NonConstructionSplit {
                    category: cost.category,
                });
            }
            check_value(&format!("options.{option}"), cost.amount)?;
        }

        let simple = &self.simple;
        check_value("simple.baseRate", simple.base_rate)?;
        check_value("simple.perBedroom", simple.per_bedroom)?;
        check_value("simple.perBathroom", simple.per_bathroom)?;
        check_value("simple.highEndMultiplier", simple.high_end_multiplier)?;
        check_value(
            "simple.slopingTerrainMultiplier",
            simple.sloping_terrain_multiplier,
        )?;
        for (project_type, multiplier) in &simple.project_type_multipliers {
            check_value(
                &format!("simple.projectTypeMultipliers.{project_type}"),
                *multiplier,
            )?;
        }

        Ok(())
    }
}

fn check_value(field: &str, value: Decimal) -> Result<(), RatesError> {
    if value >= Decimal::ZERO {
        Ok(())
    } else {
        Err(RatesError::InvalidValue {
            field: field.to_string(),
            value,
        })
    }
}
