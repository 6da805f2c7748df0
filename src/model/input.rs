use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of works requested.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    strum::Display, strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ProjectType {
    #[default]
    New,
    Renovation,
    Extension,
}

/// Quality tier of the construction, cheapest first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    strum::Display, strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum QualityTier {
    Budget,
    #[strum(to_string = "budget-plus", serialize = "budget_plus", serialize = "budgetplus")]
    BudgetPlus,
    #[default]
    Standard,
    Premium,
    Luxury,
}

impl QualityTier {
    /// All tiers, cheapest first.
    pub const ALL: [Self; 5] = [
        Self::Budget,
        Self::BudgetPlus,
        Self::Standard,
        Self::Premium,
        Self::Luxury,
    ];

    /// Next tier up, saturating at [`QualityTier::Luxury`].
    #[must_use]
    pub fn upgrade(self) -> Self {
        match self {
            Self::Budget => Self::BudgetPlus,
            Self::BudgetPlus => Self::Standard,
            Self::Standard => Self::Premium,
            Self::Premium | Self::Luxury => Self::Luxury,
        }
    }

    /// Next tier down, saturating at [`QualityTier::Budget`].
    #[must_use]
    pub fn downgrade(self) -> Self {
        match self {
            Self::Budget | Self::BudgetPlus => Self::Budget,
            Self::Standard => Self::BudgetPlus,
            Self::Premium => Self::Standard,
            Self::Luxury => Self::Premium,
        }
    }
}

/// Technical choices that scale one or more cost categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TechnicalChoice {
    Roof,
    Insulation,
    Heating,
    Foundation,
    Wall,
    Finish,
}

/// Optional features priced as a flat amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectOption {
    AirConditioning,
    Pool,
    Terrace,
}

/// A construction project as submitted through the estimation forms.
///
/// Values are already normalized: amounts and surfaces are non-negative and
/// capped, `levels` is at least 1, choices are trimmed lowercase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
    pub project_type: ProjectType,
    pub construction_type: String,
    pub quality: QualityTier,
    pub surface: Decimal,
    pub terrain_surface: Decimal,
    pub land_price: Decimal,
    pub levels: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub basement: bool,
    pub pool: bool,
    pub has_air_conditioning: bool,
    pub terrace: bool,
    pub land_included: bool,
    pub sloping_terrain: bool,
    pub roof_type: Option<String>,
    pub insulation_type: Option<String>,
    pub heating_type: Option<String>,
    pub finish_level: Option<String>,
    pub foundation_type: Option<String>,
    pub wall_type: Option<String>,
    /// Client budget, informational only.
    pub budget: Option<Decimal>,
}

impl Default for ProjectInput {
    fn default() -> Self {
        Self {
            project_type: ProjectType::default(),
            construction_type: String::new(),
            quality: QualityTier::default(),
            surface: Decimal::ZERO,
            terrain_surface: Decimal::ZERO,
            land_price: Decimal::ZERO,
            levels: 1,
            bedrooms: 0,
            bathrooms: 0,
            basement: false,
            pool: false,
            has_air_conditioning: false,
            terrace: false,
            land_included: false,
            sloping_terrain: false,
            roof_type: None,
            insulation_type: None,
            heating_type: None,
            finish_level: None,
            foundation_type: None,
            wall_type: None,
            budget: None,
        }
    }
}

impl ProjectInput {
    /// Selected key for a technical choice, if any.
    #[must_use]
    pub fn choice(&self, choice: TechnicalChoice) -> Option<&str> {
        match choice {
            TechnicalChoice::Roof => self.roof_type.as_deref(),
            TechnicalChoice::Insulation => self.insulation_type.as_deref(),
            TechnicalChoice::Heating => self.heating_type.as_deref(),
            TechnicalChoice::Foundation => self.foundation_type.as_deref(),
            TechnicalChoice::Wall => self.wall_type.as_deref(),
            TechnicalChoice::Finish => self.finish_level.as_deref(),
        }
    }

    #[must_use]
    pub fn has_option(&self, option: ProjectOption) -> bool {
        match option {
            ProjectOption::AirConditioning => self.has_air_conditioning,
            ProjectOption::Pool => self.pool,
            ProjectOption::Terrace => self.terrace,
        }
    }
}
