pub mod defaults;
pub mod table;

pub use crate::error::RatesError;
pub use table::{
    BasePrice, BasementModel, CategorySplit, ChoiceRule, OptionCost, RateTable, SimpleRates,
    SurfaceBracket,
};
