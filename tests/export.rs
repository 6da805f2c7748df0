use build_estimator::error::ExportError;
use build_estimator::estimator::Estimator;
use build_estimator::export::{export_csv, export_json, export_text, Report};
use build_estimator::model::{DetailLevel, EstimationResult, ProjectInput};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn land_project() -> (ProjectInput, EstimationResult) {
    let input = ProjectInput {
        construction_type: "traditional".to_string(),
        surface: dec!(120),
        terrain_surface: dec!(500),
        land_price: dec!(50000),
        ..ProjectInput::default()
    };
    let result = Estimator::default()
        .estimate(&input, DetailLevel::Detailed)
        .unwrap();
    (input, result)
}

#[test]
fn csv_has_one_row_per_category_and_total() {
    let (input, result) = land_project();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estimate.csv");

    export_csv(&Report::new(&input, &result), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Category,Amount,Share (%)");
    assert_eq!(lines[1], "Structural work,75600,26.3");
    assert_eq!(lines.len(), result.categories.len() + 2);
    assert!(lines.contains(&"Land,50000,17.4"));
    assert_eq!(lines.last(), Some(&"Total,287600,100.0"));
}

#[test]
fn json_contains_project_and_estimation() {
    let (input, result) = land_project();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estimate.json");

    export_json(&Report::new(&input, &result), &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["project"]["constructionType"], "traditional");
    assert_eq!(value["project"]["quality"], "standard");
    assert_eq!(value["estimation"]["detail"], "detailed");
    assert_eq!(value["estimation"]["totalEstimation"], 287_600.0);
    assert_eq!(
        value["estimation"]["categories"][0]["category"],
        "structural-work"
    );

    let parsed: EstimationResult =
        serde_json::from_value(value["estimation"].clone()).unwrap();
    assert_eq!(parsed.detail, result.detail);
    assert_eq!(parsed.categories, result.categories);
}

#[test]
fn text_summary_file() {
    let (input, result) = land_project();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estimate.txt");

    export_text(&Report::new(&input, &result), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Total: 287 600 €"));
    assert!(content.contains("Price per m²: 1 980 €"));
}

#[test]
fn export_to_missing_directory_fails() {
    let (input, result) = land_project();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("estimate.csv");

    let err = export_csv(&Report::new(&input, &result), &path).unwrap_err();
    assert!(matches!(err, ExportError::FileCreate { .. }));
}
