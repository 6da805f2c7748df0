//! Defensive coercion of raw form values.
//!
//! Forms send numbers as JSON numbers, strings ("1 200,50"), empty strings,
//! `null`, or nothing at all. Everything that is not a usable number becomes
//! 0, and numbers past [`MAX_VALUE`] are capped, so the estimator only sees
//! non-negative amounts it can compute with.

use rust_decimal::prelude::{FromPrimitive as _, ToPrimitive as _};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

/// Largest surface or amount accepted from a form.
pub const MAX_VALUE: Decimal = dec!(1000000000000);

/// Coerces a form value into a non-negative number no larger than
/// [`MAX_VALUE`].
#[must_use]
pub fn number(value: Option<&Value>) -> Decimal {
    raw_number(value).map_or(Decimal::ZERO, clamp)
}

/// Like [`number`] but `None` when the field is absent or not a number.
#[must_use]
pub fn optional_number(value: Option<&Value>) -> Option<Decimal> {
    raw_number(value)
        .filter(|raw| raw.is_finite())
        .map(clamp)
}

/// Coerces a form value into a count, truncating fractions.
#[must_use]
pub fn count(value: Option<&Value>) -> u32 {
    number(value).trunc().to_u32().unwrap_or(u32::MAX)
}

/// Coerces a checkbox-like value.
#[must_use]
pub fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "on" | "1" | "oui"
        ),
        _ => false,
    }
}

/// Normalizes a free-form choice into a lookup key.
#[must_use]
pub fn key(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => normalize_key(s),
        _ => None,
    }
}

/// Kebab-case lowercase form of a name, `None` when blank.
///
/// `"Heat Pump"`, `"heat_pump"` and `"heatPump"` all become `"heat-pump"`.
#[must_use]
pub fn normalize_key(name: &str) -> Option<String> {
    let s = name.trim();
    if s.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for ch in s.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !out.ends_with('-') {
                out.push('-');
            }
            prev_lower = false;
        } else if ch.is_uppercase() {
            if prev_lower && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    Some(out)
}

fn raw_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_number(s),
        _ => None,
    }
}

fn clamp(raw: f64) -> Decimal {
    if !raw.is_finite() || raw <= 0.0 {
        return Decimal::ZERO;
    }
    match Decimal::from_f64(raw) {
        Some(value) if value <= MAX_VALUE => value,
        _ => {
            tracing::warn!(value = raw, max = %MAX_VALUE, "form value capped");
            MAX_VALUE
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{202f}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
