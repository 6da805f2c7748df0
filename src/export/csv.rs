use super::Report;
use crate::error::ExportError;
use crate::format::format_fixed;
use rust_decimal::Decimal;
use std::fs::File;
use std::path::Path;

/// Writes one row per category plus a closing `Total` row.
pub fn export_csv<P: AsRef<Path>>(report: &Report<'_>, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    let estimation = report.estimation;
    let total = estimation.total_estimation;

    writer.write_record(["Category", "Amount", "Share (%)"])?;

    for item in &estimation.categories {
        writer.write_record([
            item.category.to_string(),
            format_fixed(item.amount, 0),
            format_fixed(item.share_of(total), 1),
        ])?;
    }
    let total_share = if total > Decimal::ZERO { "100.0" } else { "0.0" };
    writer.write_record(["Total".to_string(), format_fixed(total, 0), total_share.to_string()])?;

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    tracing::info!(path = %path_ref.display(), "exported CSV report");
    Ok(())
}
