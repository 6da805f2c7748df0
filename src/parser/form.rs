use serde_json::{Map, Value};
use std::str::FromStr;

use super::coerce;
use crate::model::{ProjectInput, ProjectType, QualityTier};

/// Builds a [`ProjectInput`] from raw form fields.
///
/// This is the only place where form values are coerced. Keys follow the
/// camelCase names the site forms post; unknown keys are ignored and
/// missing or malformed values fall back to neutral defaults.
#[must_use]
pub fn normalize(form: &Map<String, Value>) -> ProjectInput {
    let field = |name: &str| form.get(name);

    let quality = field("constructionStyle")
        .or_else(|| field("quality"))
        .and_then(|v| coerce::key(Some(v)))
        .and_then(|k| QualityTier::from_str(&k).ok())
        .unwrap_or_default();

    let project_type = coerce::key(field("projectType"))
        .and_then(|k| ProjectType::from_str(&k).ok())
        .unwrap_or_default();

    ProjectInput {
        project_type,
        construction_type: coerce::key(field("constructionType")).unwrap_or_default(),
        quality,
        surface: coerce::number(field("surface")),
        terrain_surface: coerce::number(field("terrainSurface")),
        land_price: coerce::number(field("landPrice")),
        levels: coerce::count(field("levels")).max(1),
        bedrooms: coerce::count(field("bedrooms")),
        bathrooms: coerce::count(field("bathrooms")),
        basement: coerce::flag(field("basement")),
        pool: coerce::flag(field("pool")),
        has_air_conditioning: coerce::flag(field("hasAirConditioning")),
        terrace: coerce::flag(field("terrace")),
        land_included: coerce::flag(field("landIncluded")),
        sloping_terrain: coerce::flag(field("slopingTerrain")),
        roof_type: coerce::key(field("roofType")),
        insulation_type: coerce::key(field("insulationType")),
        heating_type: coerce::key(field("heatingType")),
        finish_level: coerce::key(field("finishLevel")),
        foundation_type: coerce::key(field("foundationType")),
        wall_type: coerce::key(field("wallType")),
        budget: coerce::optional_number(field("budget")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn form(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn normalizes_typical_form() {
        let input = normalize(&form(json!({
            "projectType": "Renovation",
            "constructionType": "Traditional",
            "constructionStyle": "budgetPlus",
            "surface": "120",
            "terrainSurface": 500,
            "landPrice": "50 000",
            "levels": "2",
            "bedrooms": 3,
            "bathrooms": "1",
            "basement": "on",
            "hasAirConditioning": true,
            "roofType": "Flat",
            "heatingType": "heat_pump",
            "budget": "300000"
        })));

        assert_eq!(
            input,
            ProjectInput {
                project_type: ProjectType::Renovation,
                construction_type: "traditional".to_string(),
                quality: QualityTier::BudgetPlus,
                surface: dec!(120),
                terrain_surface: dec!(500),
                land_price: dec!(50000),
                levels: 2,
                bedrooms: 3,
                bathrooms: 1,
                basement: true,
                has_air_conditioning: true,
                roof_type: Some("flat".to_string()),
                heating_type: Some("heat-pump".to_string()),
                budget: Some(dec!(300000)),
                ..ProjectInput::default()
            }
        );
    }

    #[test]
    fn empty_form_gets_defaults() {
        let input = normalize(&Map::new());
        assert_eq!(input, ProjectInput::default());
    }

    #[test]
    fn garbage_is_coerced_to_neutral_values() {
        let input = normalize(&form(json!({
            "surface": "lots",
            "levels": 0,
            "bedrooms": null,
            "constructionStyle": "platinum",
            "projectType": 7,
            "roofType": ""
        })));
        assert_eq!(input.surface, Decimal::ZERO);
        assert_eq!(input.levels, 1);
        assert_eq!(input.bedrooms, 0);
        assert_eq!(input.quality, QualityTier::Standard);
        assert_eq!(input.project_type, ProjectType::New);
        assert_eq!(input.roof_type, None);
    }

    #[test]
    fn huge_surface_is_capped() {
        let input = normalize(&form(json!({
            "constructionType": "traditional",
            "surface": "1e306",
            "landPrice": 1.0e300
        })));
        assert_eq!(input.surface, coerce::MAX_VALUE);
        assert_eq!(input.land_price, coerce::MAX_VALUE);
    }

    #[test]
    fn quality_field_is_an_alias() {
        let input = normalize(&form(json!({ "quality": "luxury" })));
        assert_eq!(input.quality, QualityTier::Luxury);
    }
}
