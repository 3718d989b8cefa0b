//! # TitleBar Component
//!
//! Top status bar: which service is queried and the latest status text.
//!
//! Purely presentational. It receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.service_url.clone(), app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```
//!
//! Format:
//!
//! 1. **Status message**: `"SongVocab (http://localhost:8000/api/agent) | Request failed"`
//! 2. **Default**: `"SongVocab (http://localhost:8000/api/agent)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Full URL of the lyrics endpoint
    pub service_url: String,
    /// Transient status (e.g., "Searching for ...", "Request failed")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(service_url: String, status_message: String) -> Self {
        Self {
            service_url,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("SongVocab ({})", self.service_url)
        } else {
            format!("SongVocab ({}) | {}", self.service_url, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::Cyan));
        frame.render_widget(span, area);
    }
}
