//! # Application State
//!
//! Core business state for SongVocab. No TUI-specific types here;
//! presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── controller: RequestController   // validation + request lifecycle
//! ├── page: PageState                 // the three sections + content panels
//! ├── status_message: String          // status bar text
//! └── service_url: String             // where queries are sent
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{LyricsService, join_url};
use crate::core::config::ResolvedConfig;
use crate::core::controller::RequestController;
use crate::core::view::PageState;

pub struct App {
    pub controller: RequestController,
    pub page: PageState,
    pub status_message: String,
    pub service_url: String,
}

impl App {
    pub fn new(service: Arc<dyn LyricsService>, config: &ResolvedConfig) -> Self {
        Self {
            controller: RequestController::new(service, config.overlap),
            page: PageState::new(config.content_policy),
            status_message: String::from("Type a song title and press Enter"),
            service_url: join_url(&config.base_url, &config.endpoint),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.page.visibility.loading
    }
}
