pub mod csv;
pub mod json;
pub mod text;

use serde::Serialize;

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::export_json;
pub use text::{export_text, render_summary};

use crate::model::{EstimationResult, ProjectInput};

/// A project together with its estimation, as written to report files.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Report<'a> {
    pub project: &'a ProjectInput,
    pub estimation: &'a EstimationResult,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(project: &'a ProjectInput, estimation: &'a EstimationResult) -> Self {
        Self {
            project,
            estimation,
        }
    }
}
