use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::core::view::UiState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorPanel, IdleHint, LoadingIndicator, ResultsPanel, TitleBar};

/// Height of the query form (one line of text plus borders).
const FORM_HEIGHT: u16 = 3;

/// Splits the frame into title bar, main area and form.
pub fn layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(FORM_HEIGHT)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, main_area, form_area] = layout(frame.area());

    TitleBar::new(app.service_url.clone(), app.status_message.clone())
        .render(frame, title_area);

    // Exactly one section is drawn in the main area
    match app.page.ui_state() {
        UiState::Idle => IdleHint.render(frame, main_area),
        UiState::Loading => LoadingIndicator {
            frame_index: spinner_frame,
        }
        .render(frame, main_area),
        UiState::Results => ResultsPanel {
            page: &app.page,
            state: &mut tui.results,
        }
        .render(frame, main_area),
        UiState::Error => ErrorPanel {
            message: app.page.error_message.clone(),
        }
        .render(frame, main_area),
    }

    tui.query_form.busy = app.is_loading();
    tui.query_form.render(frame, form_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::Completion;
    use crate::core::view::View;
    use crate::test_support::{hey_jude_response, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_idle() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);
        assert!(text.contains("SongVocab"));
        assert!(text.contains("Song title"));
    }

    #[test]
    fn test_draw_loading_then_results() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        let ticket = app.controller.begin("Hey Jude", &mut app.page).unwrap();

        let text = draw(&app, &mut tui);
        assert!(text.contains("Fetching lyrics"));

        app.controller.complete(
            Completion {
                generation: ticket.generation,
                result: Ok(hey_jude_response()),
            },
            &mut app.page,
        );
        let text = draw(&app, &mut tui);
        assert!(!text.contains("Fetching lyrics"));
        assert!(text.contains("Line one"));
        assert!(text.contains("Word: Jude"));
    }

    #[test]
    fn test_draw_error() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        app.page.show_error("Error: Song not found");

        let text = draw(&app, &mut tui);
        assert!(text.contains("Error: Song not found"));
    }

    #[test]
    fn test_layout_reserves_form() {
        let [title, main, form] = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(title.height, 1);
        assert_eq!(form.height, FORM_HEIGHT);
        assert_eq!(main.height, 24 - 1 - FORM_HEIGHT);
    }
}
