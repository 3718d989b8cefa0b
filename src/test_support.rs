//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{FetchError, LyricsService};
use crate::core::types::{LyricsResponse, SubmissionInput, VocabularyEntry};
use crate::core::view::View;

/// One call made by the controller on a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    ShowLoading,
    HideLoading,
    ShowResults {
        lyrics: String,
        vocabulary: Vec<VocabularyEntry>,
    },
    ShowError(String),
    Reset,
}

/// A fake view that only records what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl View for RecordingView {
    fn show_loading(&mut self) {
        self.calls.push(ViewCall::ShowLoading);
    }

    fn hide_loading(&mut self) {
        self.calls.push(ViewCall::HideLoading);
    }

    fn show_results(&mut self, lyrics: &str, vocabulary: &[VocabularyEntry]) {
        self.calls.push(ViewCall::ShowResults {
            lyrics: lyrics.to_string(),
            vocabulary: vocabulary.to_vec(),
        });
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push(ViewCall::ShowError(message.to_string()));
    }

    fn reset(&mut self) {
        self.calls.push(ViewCall::Reset);
    }
}

/// A service that replays canned results in order and records each query.
pub struct ScriptedService {
    replies: Mutex<VecDeque<Result<LyricsResponse, FetchError>>>,
    calls: Arc<Mutex<Vec<String>>>,
    panics: bool,
}

impl ScriptedService {
    pub fn new(replies: Vec<Result<LyricsResponse, FetchError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
            panics: false,
        }
    }

    /// A service whose every fetch panics.
    pub fn panicking() -> Self {
        Self {
            panics: true,
            ..Self::new(vec![])
        }
    }

    /// Shared handle to the list of queries seen so far.
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl LyricsService for ScriptedService {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self, query: &SubmissionInput) -> Result<LyricsResponse, FetchError> {
        if self.panics {
            panic!("scripted service panic");
        }
        self.calls.lock().unwrap().push(query.as_str().to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted reply".to_string())))
    }
}

/// The "Hey Jude" success body: one blank line, one vocabulary entry.
pub fn hey_jude_response() -> LyricsResponse {
    LyricsResponse {
        lyrics: "Line one\n\nLine two".to_string(),
        vocabulary: vec![VocabularyEntry {
            word: "Jude".to_string(),
            translation: "Jude".to_string(),
            context: "name".to_string(),
        }],
    }
}

/// Creates a test App backed by a ScriptedService with no replies.
pub fn test_app() -> crate::core::state::App {
    let config = crate::core::config::resolve_with_env(
        &crate::core::config::SongVocabConfig::default(),
        &crate::core::config::CliOverrides::default(),
        |_| None,
    );
    crate::core::state::App::new(Arc::new(ScriptedService::new(vec![])), &config)
}
