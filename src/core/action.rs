//! # Actions
//!
//! Everything that can happen in SongVocab becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! The service answers? That's `Action::Completed(completion)`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing the I/O the caller must perform. The reducer itself never
//! spawns anything.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::controller::{Completion, CycleOutcome, Ticket};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Form submitted with the raw (untrimmed) input text.
    Submit(String),
    /// A request task finished.
    Completed(Completion),
    Quit,
}

/// Side effect requested by `update()`.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Spawn the request for this ticket.
    SpawnRequest(Ticket),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(text) => match app.controller.begin(&text, &mut app.page) {
            Some(ticket) => {
                app.status_message = format!("Searching for \"{}\"...", ticket.query);
                Effect::SpawnRequest(ticket)
            }
            None => Effect::None,
        },
        Action::Completed(completion) => {
            match app.controller.complete(completion, &mut app.page) {
                CycleOutcome::Rendered { lines, entries } => {
                    app.status_message = format!("{lines} lines, {entries} words");
                }
                CycleOutcome::Failed(_) => {
                    app.status_message = String::from("Request failed");
                }
                CycleOutcome::Stale => {}
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::core::view::UiState;
    use crate::test_support::{hey_jude_response, test_app};

    #[test]
    fn test_blank_submit_does_nothing() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit("   ".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.page.ui_state(), UiState::Idle);
        assert_eq!(app.status_message, "Type a song title and press Enter");
    }

    #[test]
    fn test_submit_enters_loading_and_spawns() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit(" Hey Jude ".to_string()));

        let ticket = match effect {
            Effect::SpawnRequest(ticket) => ticket,
            other => panic!("Expected SpawnRequest, got {other:?}"),
        };
        assert_eq!(ticket.query.as_str(), "Hey Jude");
        assert_eq!(app.page.ui_state(), UiState::Loading);
        assert_eq!(app.status_message, "Searching for \"Hey Jude\"...");
    }

    #[test]
    fn test_completed_renders_results() {
        let mut app = test_app();
        let Effect::SpawnRequest(ticket) = update(&mut app, Action::Submit("Hey Jude".into()))
        else {
            panic!("Expected SpawnRequest");
        };

        let effect = update(
            &mut app,
            Action::Completed(Completion {
                generation: ticket.generation,
                result: Ok(hey_jude_response()),
            }),
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(app.page.ui_state(), UiState::Results);
        assert_eq!(app.page.lyrics_text(), "Line one\nLine two");
        assert_eq!(app.status_message, "2 lines, 1 words");
    }

    #[test]
    fn test_completed_failure_shows_error() {
        let mut app = test_app();
        let Effect::SpawnRequest(ticket) = update(&mut app, Action::Submit("X".into())) else {
            panic!("Expected SpawnRequest");
        };

        update(
            &mut app,
            Action::Completed(Completion {
                generation: ticket.generation,
                result: Err(FetchError::Api {
                    status: 500,
                    message: "Failed to fetch lyrics".to_string(),
                }),
            }),
        );

        assert_eq!(app.page.ui_state(), UiState::Error);
        assert_eq!(app.page.error_message, "Error: Failed to fetch lyrics");
        assert_eq!(app.status_message, "Request failed");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
