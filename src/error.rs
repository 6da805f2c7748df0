//! Error types for the estimator.

use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::{CostCategory, QualityTier};

/// Errors that can occur when loading input files.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not match the expected shape.
    #[error("invalid JSON in '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A project form must be a JSON object.
    #[error("project form in '{path}' is not a JSON object")]
    NotAnObject { path: PathBuf },

    /// The rate table was read but failed validation.
    #[error("invalid rate table in '{path}': {source}")]
    InvalidRates { path: PathBuf, source: RatesError },
}

/// Inconsistencies in a rate table.
#[derive(Debug, Error, PartialEq)]
pub enum RatesError {
    /// Percentage splits must cover exactly the whole construction cost.
    #[error("category splits sum to {total}%, expected 100%")]
    SplitTotal { total: Decimal },

    /// A category appears twice in the splits.
    #[error("category '{category}' is split more than once")]
    DuplicateSplit { category: CostCategory },

    /// Land and fees are computed separately and cannot take a split.
    #[error("category '{category}' cannot take a share of the construction cost")]
    NonConstructionSplit { category: CostCategory },

    /// Prices, rates and multipliers must be non-negative.
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: Decimal },

    /// Each quality tier must cost strictly more than the one below it.
    #[error("quality multiplier of '{tier}' is not above the tier below it")]
    UnorderedQuality { tier: QualityTier },

    /// A bracket lowering the per-m² price would make cost drop as surface grows.
    #[error(
        "surface bracket above {above_surface} m² lowers the price of '{construction_type}'"
    )]
    DecreasingBracket {
        construction_type: String,
        above_surface: Decimal,
    },
}

/// Errors that can occur while computing an estimate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// An intermediate amount does not fit the decimal range.
    #[error("estimate is out of the supported amount range ({step})")]
    Overflow { step: &'static str },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors that can occur when rewriting internal links.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The keyword set could not be compiled into a matcher.
    #[error("failed to build keyword pattern: {source}")]
    Pattern {
        #[from]
        source: regex::Error,
    },
}
