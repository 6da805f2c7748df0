use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::Report;
use crate::error::ExportError;
use crate::format::{format_currency, format_percent, format_surface};
use crate::model::{CostCategory, DetailLevel};
use rust_decimal::Decimal;

/// Human-readable summary of a report.
#[must_use]
pub fn render_summary(report: &Report<'_>) -> String {
    let project = report.project;
    let estimation = report.estimation;
    let total = estimation.total_estimation;

    let construction_type = if project.construction_type.is_empty() {
        "unspecified"
    } else {
        project.construction_type.as_str()
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Project: {} | {} | {} | {} | {} level(s)",
        project.project_type,
        construction_type,
        project.quality,
        format_surface(project.surface),
        project.levels,
    );
    let _ = writeln!(out, "Estimate: {}", estimation.detail);
    out.push('\n');

    let width = estimation
        .categories
        .iter()
        .map(|c| c.category.to_string().chars().count())
        .max()
        .unwrap_or(0);

    for item in &estimation.categories {
        let name = item.category.to_string();
        let _ = writeln!(
            out,
            "  {name:<width$}  {:>14}  {:>8}",
            format_currency(item.amount),
            format_percent(item.share_of(total)),
        );
    }

    out.push('\n');
    let _ = writeln!(out, "Total: {}", format_currency(total));
    let _ = writeln!(
        out,
        "Price per m²: {}",
        format_currency(estimation.price_per_square_meter)
    );

    if estimation.detail == DetailLevel::Detailed && estimation.amount(CostCategory::Land) > Decimal::ZERO {
        let _ = writeln!(
            out,
            "Land per m²: {}",
            format_currency(estimation.land_price_per_square_meter)
        );
        let _ = writeln!(
            out,
            "Land share: {}",
            format_percent(estimation.land_to_total_ratio)
        );
    }

    if let Some(budget) = project.budget {
        let _ = writeln!(out, "Client budget: {}", format_currency(budget));
    }

    out
}

pub fn export_text<P: AsRef<Path>>(report: &Report<'_>, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    fs::write(path_ref, render_summary(report)).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path_ref.display(), "exported text report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::Estimator;
    use crate::model::ProjectInput;
    use rust_decimal_macros::dec;

    #[test]
    fn summary_lists_categories_and_metrics() {
        let project = ProjectInput {
            construction_type: "traditional".to_string(),
            surface: dec!(120),
            terrain_surface: dec!(500),
            land_price: dec!(50000),
            budget: Some(dec!(300000)),
            ..ProjectInput::default()
        };
        let estimation = Estimator::default()
            .estimate(&project, DetailLevel::Detailed)
            .unwrap();
        let summary = render_summary(&Report::new(&project, &estimation));

        assert!(summary.starts_with("Project: new | traditional | standard | 120 m² | 1 level(s)"));
        assert!(summary.contains("Structural work"));
        assert!(summary.contains("75 600 €"));
        assert!(summary.contains("Total: 287 600 €"));
        assert!(summary.contains("Land per m²: 100 €"));
        assert!(summary.contains("Land share: 17.4 %"));
        assert!(summary.contains("Client budget: 300 000 €"));
    }
}
