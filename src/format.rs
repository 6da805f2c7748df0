//! Display helpers for amounts, surfaces and percentages.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount rounded to whole units with grouped thousands:
/// `237600.4` becomes `"237 600 €"`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    format!("{} €", group_thousands(amount))
}

/// Formats a surface in square meters: `"120 m²"`.
#[must_use]
pub fn format_surface(square_meters: Decimal) -> String {
    format!("{} m²", group_thousands(square_meters))
}

/// Formats a percentage with one decimal: `"17.4 %"`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    format!("{} %", format_fixed(value, 1))
}

/// Rounds half away from zero to `places` decimals and always prints them:
/// `format_fixed(100, 1)` is `"100.0"`.
#[must_use]
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded.to_string()
}

fn group_thousands(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = format_fixed(rounded.abs(), 0);

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
