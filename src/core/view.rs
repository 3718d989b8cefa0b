//! # View State
//!
//! The controller never touches a concrete UI. It drives a [`View`], and each
//! rendering target (terminal page, HTML markup, test recorder) implements it.
//!
//! ```text
//!                 RequestController
//!                        │  show_loading / reset / show_results
//!                        │  show_error / hide_loading
//!            ┌───────────┼────────────────┐
//!            ▼           ▼                ▼
//!       PageState     HtmlView      RecordingView
//!      (TUI + text)   (markup)        (tests)
//! ```
//!
//! Three sections toggle: loading, results, error. When all three are
//! hidden the page is idle.

use crate::core::render::{ContentPolicy, clean_lyrics_lines, vocabulary_lines};
use crate::core::types::VocabularyEntry;

/// Rendering surface driven by the controller.
pub trait View {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    /// Fill both content panels and reveal the results section.
    ///
    /// `lyrics` has already had blank lines removed.
    fn show_results(&mut self, lyrics: &str, vocabulary: &[VocabularyEntry]);
    /// Reveal the error section with `message` as its text.
    fn show_error(&mut self, message: &str);
    /// Hide the results section, then the error section.
    fn reset(&mut self);
}

/// What the user currently sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Results,
    Error,
}

/// Hidden/visible flags for the three toggleable sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub loading: bool,
    pub results: bool,
    pub error: bool,
}

impl Visibility {
    /// Loading wins while a request is in flight.
    pub fn ui_state(&self) -> UiState {
        if self.loading {
            UiState::Loading
        } else if self.error {
            UiState::Error
        } else if self.results {
            UiState::Results
        } else {
            UiState::Idle
        }
    }
}

/// One rendered vocabulary block, content policy already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyBlock {
    pub word: String,
    pub translation: String,
    pub context: String,
}

/// In-memory page model. The terminal adapter draws from it and the
/// one-shot CLI prints it.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub visibility: Visibility,
    pub lyrics_content: Vec<String>,
    pub vocabulary_content: Vec<VocabularyBlock>,
    pub error_message: String,
    pub policy: ContentPolicy,
}

impl PageState {
    pub fn new(policy: ContentPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn ui_state(&self) -> UiState {
        self.visibility.ui_state()
    }

    /// Lyrics panel as a single preformatted string.
    pub fn lyrics_text(&self) -> String {
        self.lyrics_content.join("\n")
    }

    /// Vocabulary panel as text, three lines per entry.
    pub fn vocabulary_text(&self) -> String {
        self.vocabulary_content
            .iter()
            .flat_map(|block| vocabulary_lines(&block.word, &block.translation, &block.context))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl View for PageState {
    fn show_loading(&mut self) {
        self.visibility.loading = true;
    }

    fn hide_loading(&mut self) {
        self.visibility.loading = false;
    }

    fn show_results(&mut self, lyrics: &str, vocabulary: &[VocabularyEntry]) {
        let policy = self.policy;
        self.lyrics_content = clean_lyrics_lines(lyrics)
            .map(|line| policy.for_terminal(line))
            .collect();
        self.vocabulary_content = vocabulary
            .iter()
            .map(|entry| VocabularyBlock {
                word: policy.for_terminal(&entry.word),
                translation: policy.for_terminal(&entry.translation),
                context: policy.for_terminal(&entry.context),
            })
            .collect();
        self.visibility.results = true;
    }

    fn show_error(&mut self, message: &str) {
        self.error_message = self.policy.for_terminal(message);
        self.visibility.error = true;
    }

    fn reset(&mut self) {
        self.visibility.results = false;
        self.visibility.error = false;
    }
}
