use crate::error::EstimateError;
use crate::estimator::Estimator;
use crate::model::{CategoryAmount, DetailLevel, EstimationResult, ProjectInput};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Surface change per key press, in m².
pub const SURFACE_STEP: Decimal = dec!(5);

/// Interactive estimator state.
///
/// Every edit to the project recomputes `result`. When an edit cannot be
/// priced the last result stays on screen and `error` says why.
pub struct App {
    pub input: ProjectInput,
    pub estimator: Estimator,
    pub detail: DetailLevel,
    pub result: EstimationResult,
    pub error: Option<EstimateError>,
    pub selected_category: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        input: ProjectInput,
        estimator: Estimator,
        detail: DetailLevel,
    ) -> Result<Self, EstimateError> {
        let result = estimator.estimate(&input, detail)?;
        Ok(Self {
            input,
            estimator,
            detail,
            result,
            error: None,
            selected_category: 0,
            should_quit: false,
        })
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::dashboard::draw_dashboard(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.previous_category(),
            KeyCode::Down | KeyCode::Char('j') => self.next_category(),
            KeyCode::Left | KeyCode::Char('h') => self.edit(|p| p.quality = p.quality.downgrade()),
            KeyCode::Right | KeyCode::Char('l') => self.edit(|p| p.quality = p.quality.upgrade()),
            KeyCode::Char('+' | '=') => {
                self.edit(|p| p.surface = p.surface.saturating_add(SURFACE_STEP));
            }
            KeyCode::Char('-') => {
                self.edit(|p| p.surface = (p.surface - SURFACE_STEP).max(Decimal::ZERO));
            }
            KeyCode::Char(']') => self.edit(|p| p.levels = p.levels.saturating_add(1)),
            KeyCode::Char('[') => self.edit(|p| p.levels = p.levels.saturating_sub(1).max(1)),
            KeyCode::Char('b') => self.edit(|p| p.basement = !p.basement),
            KeyCode::Char('c') => self.edit(|p| p.has_air_conditioning = !p.has_air_conditioning),
            KeyCode::Char('p') => self.edit(|p| p.pool = !p.pool),
            KeyCode::Tab => {
                self.detail = self.detail.toggle();
                self.recompute();
            }
            _ => {}
        }
    }

    fn edit(&mut self, change: impl FnOnce(&mut ProjectInput)) {
        change(&mut self.input);
        self.recompute();
    }

    fn recompute(&mut self) {
        match self.estimator.estimate(&self.input, self.detail) {
            Ok(result) => {
                self.result = result;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "estimate not updated");
                self.error = Some(e);
            }
        }
        let last = self.result.categories.len().saturating_sub(1);
        self.selected_category = self.selected_category.min(last);
    }

    fn previous_category(&mut self) {
        self.selected_category = self.selected_category.saturating_sub(1);
    }

    fn next_category(&mut self) {
        if self.selected_category < self.result.categories.len().saturating_sub(1) {
            self.selected_category += 1;
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CategoryAmount> {
        self.result.categories.get(self.selected_category)
    }

    /// Difference between the client budget and the estimate, if a budget
    /// was given. Positive means the estimate fits.
    #[must_use]
    pub fn budget_margin(&self) -> Option<Decimal> {
        self.input
            .budget
            .and_then(|budget| budget.checked_sub(self.result.total_estimation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QualityTier;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let input = ProjectInput {
            construction_type: "traditional".to_string(),
            surface: dec!(120),
            budget: Some(dec!(250000)),
            ..ProjectInput::default()
        };
        App::new(input, Estimator::default(), DetailLevel::Detailed).unwrap()
    }

    #[test]
    fn starts_with_computed_result() {
        let app = app();
        assert_eq!(app.result.total_estimation, dec!(237600));
        assert_eq!(app.budget_margin(), Some(dec!(12400)));
        assert_eq!(app.error, None);
    }

    #[test]
    fn quality_keys_recompute() {
        let mut app = app();
        let standard = app.result.total_estimation;

        app.handle_key(KeyCode::Right);
        assert_eq!(app.input.quality, QualityTier::Premium);
        assert!(app.result.total_estimation > standard);

        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.input.quality, QualityTier::BudgetPlus);
        assert!(app.result.total_estimation < standard);
    }

    #[test]
    fn surface_never_goes_negative() {
        let mut app = app();
        app.input.surface = dec!(3);
        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.input.surface, Decimal::ZERO);
        assert_eq!(app.result.construction_subtotal(), Decimal::ZERO);
    }

    #[test]
    fn unpriceable_edit_keeps_last_result() {
        let mut app = app();
        app.input.surface = Decimal::MAX;
        app.handle_key(KeyCode::Char('+'));

        assert_eq!(app.input.surface, Decimal::MAX);
        assert!(matches!(app.error, Some(EstimateError::Overflow { .. })));
        assert_eq!(app.result.total_estimation, dec!(237600));

        app.input.surface = dec!(125);
        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.error, None);
        assert_eq!(app.result.price_per_square_meter, dec!(1980));
    }

    #[test]
    fn levels_stay_at_least_one() {
        let mut app = app();
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.input.levels, 1);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.input.levels, 2);
    }

    #[test]
    fn tab_switches_detail_and_clamps_selection() {
        let mut app = app();
        for _ in 0..20 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.selected_category, app.result.categories.len() - 1);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.detail, DetailLevel::Simple);
        assert_eq!(app.selected_category, 0);
        assert!(app.selected().is_some());
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
