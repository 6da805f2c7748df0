use crate::format::{format_currency, format_percent, format_surface};
use crate::model::{CostCategory, DetailLevel};
use crate::ui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive as _;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Brand colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);
const BRAND_RED: Color = Color::Rgb(0xA3, 0x3B, 0x3B);

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);

const LABEL_WIDTH: usize = 22;

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Breakdown + metrics
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);

    let main = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);
    draw_breakdown(frame, main[0], app);
    draw_metrics(frame, main[1], app);

    draw_footer(frame, chunks[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let input = &app.input;
    let construction_type = if input.construction_type.is_empty() {
        "-"
    } else {
        input.construction_type.as_str()
    };

    let title = format!(
        " Build Estimator | {} | {} | {} | {} | {} level(s) | {} ",
        input.project_type,
        construction_type,
        input.quality,
        format_surface(input.surface),
        input.levels,
        app.detail,
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let result = &app.result;
    let block = Block::default()
        .title(format!(" Breakdown ({} categories) ", result.categories.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_ORANGE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_rows = usize::from(inner.height);
    if visible_rows == 0 {
        return;
    }

    // Keep selected row visible
    let scroll_offset = if app.selected_category >= visible_rows {
        app.selected_category - visible_rows + 1
    } else {
        0
    };

    let total = result.total_estimation;
    let rows = Layout::vertical(vec![Constraint::Length(1); visible_rows]).split(inner);

    for (row, (i, item)) in rows.iter().zip(
        result
            .categories
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(visible_rows),
    ) {
        let is_selected = i == app.selected_category;
        let share = item.share_of(total);

        let label_style = if is_selected {
            SELECTED_STYLE
        } else if item.category == CostCategory::Land {
            Style::default().fg(BRAND_MUTED)
        } else {
            Style::default()
        };

        let name = truncate(&item.category.to_string(), LABEL_WIDTH);
        let label = Line::from(vec![
            Span::styled(format!("{name:<width$}", width = LABEL_WIDTH), label_style),
            Span::styled(
                format!(" {:>12} ", format_currency(item.amount)),
                Style::default().fg(BRAND_GREEN),
            ),
        ]);

        let fraction = (share / dec!(100)).to_f64().unwrap_or(0.0);
        let gauge = LineGauge::default()
            .ratio(fraction.clamp(0.0, 1.0))
            .label(label)
            .filled_style(Style::default().fg(BRAND_ORANGE))
            .unfilled_style(Style::default().fg(BRAND_SELECT_BG));

        frame.render_widget(gauge, *row);
    }
}

fn draw_metrics(frame: &mut Frame, area: Rect, app: &App) {
    let result = &app.result;
    let input = &app.input;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total  ", HEADER_STYLE),
            Span::styled(
                format_currency(result.total_estimation),
                Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Price per m²  {}",
            format_currency(result.price_per_square_meter)
        )),
    ];

    if app.detail == DetailLevel::Detailed {
        lines.push(Line::from(format!(
            "Land per m²   {}",
            format_currency(result.land_price_per_square_meter)
        )));
        lines.push(Line::from(format!(
            "Land share    {}",
            format_percent(result.land_to_total_ratio)
        )));
    }

    if let Some(margin) = app.budget_margin() {
        let (text, color) = if margin >= Decimal::ZERO {
            (format!("Under budget by {}", format_currency(margin)), BRAND_GREEN)
        } else {
            (format!("Over budget by {}", format_currency(-margin)), BRAND_RED)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "── Options ──",
        Style::default()
            .fg(BRAND_MUTED)
            .add_modifier(Modifier::ITALIC),
    )));
    for (name, enabled) in [
        ("Basement", input.basement),
        ("Air conditioning", input.has_air_conditioning),
        ("Pool", input.pool),
    ] {
        let mark = if enabled { "[x]" } else { "[ ]" };
        lines.push(Line::from(format!("{mark} {name}")));
    }

    if let Some(item) = app.selected() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "── Selected ──",
            Style::default()
                .fg(BRAND_MUTED)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(item.category.to_string()));
        lines.push(Line::from(format!(
            "{}  ({})",
            format_currency(item.amount),
            format_percent(item.share_of(result.total_estimation))
        )));
    }

    let metrics = Paragraph::new(lines).block(
        Block::default()
            .title(" Estimate ")
            .borders(Borders::ALL),
    );
    frame.render_widget(metrics, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer = match &app.error {
        Some(error) => Paragraph::new(format!(" {error} "))
            .style(Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD)),
        None => Paragraph::new(
            " ←→ Quality | +/- Surface | [ ] Levels | b/c/p Options | Tab Detail | q Quit ",
        )
        .style(Style::default().fg(BRAND_MUTED)),
    }
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
