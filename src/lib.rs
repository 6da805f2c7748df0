//! # Build Estimator
//!
//! Construction cost estimation for a building and architecture consultancy.
//!
//! ## Features
//!
//! - Normalize raw estimation-form fields into a typed project
//! - Detailed price breakdown driven by a declarative rate table
//! - Simplified estimate from a handful of inputs
//! - Export to JSON, CSV and text reports
//! - Interactive terminal estimator
//! - Internal-link keyword rewriting for blog articles
//!
//! ## Example
//!
//! ```no_run
//! use build_estimator::estimator::Estimator;
//! use build_estimator::model::DetailLevel;
//! use build_estimator::parser::parse_project_file;
//!
//! let input = parse_project_file("project.json").expect("Failed to parse");
//! let result = Estimator::default()
//!     .estimate(&input, DetailLevel::Detailed)
//!     .expect("Failed to estimate");
//! println!("Total: {}", result.total_estimation);
//! ```

pub mod error;
pub mod estimator;
pub mod export;
pub mod format;
pub mod linker;
pub mod model;
pub mod parser;
pub mod rates;
pub mod ui;
