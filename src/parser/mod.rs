pub mod coerce;
pub mod form;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

pub use crate::error::ParseError;
pub use form::normalize;

use crate::linker::LinkRule;
use crate::model::ProjectInput;
use crate::rates::RateTable;

/// Reads a submitted project form and normalizes it.
///
/// The file holds the raw form as a JSON object; values may be strings,
/// numbers or nulls and are coerced by [`normalize`].
///
/// # Example
///
/// ```no_run
/// use build_estimator::parser::parse_project_file;
///
/// let input = parse_project_file("project.json")?;
/// println!("{} m²", input.surface);
/// # Ok::<(), build_estimator::error::ParseError>(())
/// ```
pub fn parse_project_file<P: AsRef<Path>>(path: P) -> Result<ProjectInput, ParseError> {
    let value: Value = read_json(path.as_ref())?;
    match value {
        Value::Object(form) => Ok(normalize(&form)),
        _ => Err(ParseError::NotAnObject {
            path: path.as_ref().to_path_buf(),
        }),
    }
}

/// Reads a rate table and validates it.
///
/// Fields absent from the file keep their built-in values.
pub fn parse_rate_table_file<P: AsRef<Path>>(path: P) -> Result<RateTable, ParseError> {
    let rates: RateTable = read_json(path.as_ref())?;
    rates
        .validate()
        .map_err(|source| ParseError::InvalidRates {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.as_ref().display(), "loaded rate table");
    Ok(rates)
}

/// Reads internal-link rules: `[{"keyword": "...", "url": "..."}]`.
pub fn parse_link_rules_file<P: AsRef<Path>>(path: P) -> Result<Vec<LinkRule>, ParseError> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ParseError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
