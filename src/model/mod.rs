pub mod category;
pub mod estimate;
pub mod input;

pub use category::CostCategory;
pub use estimate::{CategoryAmount, DetailLevel, EstimationResult};
pub use input::{ProjectInput, ProjectOption, ProjectType, QualityTier, TechnicalChoice};
