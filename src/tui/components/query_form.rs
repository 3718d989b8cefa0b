//! # QueryForm Component
//!
//! Single-line text field where the song title is typed.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on Enter with the raw text
//! - Scroll horizontally so the cursor stays visible
//!
//! The form does no validation: blank submissions are passed through and
//! the controller decides they are no-ops. The text is kept after submit,
//! like a page input keeps its value.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border width on each side of the field.
const BORDER: u16 = 1;

/// High-level events emitted by the QueryForm
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Enter pressed; carries the untrimmed text.
    Submit(String),
    ContentChanged,
}

pub struct QueryForm {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor as byte offset into `buffer`
    cursor: usize,
    /// Dim the border while a request is in flight (Prop)
    pub busy: bool,
}

impl QueryForm {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            busy: false,
        }
    }

    /// Slice of the buffer that fits in `width` columns with the cursor
    /// visible, plus the cursor column within it.
    fn visible_window(&self, width: u16) -> (&str, u16) {
        let width = width as usize;
        if width == 0 {
            return ("", 0);
        }

        // Drop leading chars until the text before the cursor fits
        let mut start = 0;
        let mut prefix_width: usize = self.buffer[..self.cursor]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();
        for (i, c) in self.buffer[..self.cursor].char_indices() {
            if prefix_width < width {
                break;
            }
            prefix_width -= c.width().unwrap_or(0);
            start = i + c.len_utf8();
        }

        let mut end = start;
        let mut used = 0;
        for (i, c) in self.buffer[start..].char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end = start + i + c.len_utf8();
        }

        (&self.buffer[start..end], prefix_width as u16)
    }
}

impl Default for QueryForm {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for QueryForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(BORDER * 2);
        let (visible, cursor_col) = self.visible_window(inner_width);

        let border_style = if self.busy {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Song title (Enter to search, Esc to quit)");

        let input = Paragraph::new(visible.to_string())
            .block(block)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(input, area);

        frame.set_cursor_position((area.x + BORDER + cursor_col, area.y + BORDER));
    }
}

impl EventHandler for QueryForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor, text);
                self.cursor += text.len();
                Some(FormEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                FormEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                FormEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                FormEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                FormEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FormEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FormEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(FormEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}
