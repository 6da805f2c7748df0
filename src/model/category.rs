use serde::{Deserialize, Serialize};

/// A named cost bucket of the price breakdown.
///
/// Variant order is the display order of a breakdown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum CostCategory {
    #[strum(to_string = "Structural work")]
    StructuralWork,
    #[strum(to_string = "Roofing & framing")]
    Roofing,
    #[strum(to_string = "Exterior carpentry")]
    ExteriorCarpentry,
    #[strum(to_string = "Insulation")]
    Insulation,
    #[strum(to_string = "Plumbing")]
    Plumbing,
    #[strum(to_string = "Electrical")]
    Electrical,
    #[strum(to_string = "Heating")]
    Heating,
    #[strum(to_string = "Interior partitions")]
    InteriorPartitions,
    #[strum(to_string = "Interior carpentry")]
    InteriorCarpentry,
    #[strum(to_string = "Flooring")]
    Flooring,
    #[strum(to_string = "Painting")]
    Painting,
    #[strum(to_string = "Exterior landscaping")]
    Landscaping,
    #[strum(to_string = "Land")]
    Land,
    #[strum(to_string = "Ancillary fees")]
    AncillaryFees,
    /// Single bucket of the simplified estimator.
    #[strum(to_string = "Global estimate")]
    Overall,
}

impl CostCategory {
    /// Whether this bucket takes a share of the construction cost split.
    #[must_use]
    pub fn is_construction(self) -> bool {
        !matches!(self, Self::Land | Self::AncillaryFees | Self::Overall)
    }
}
