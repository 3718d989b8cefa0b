//! # Results Component
//!
//! The results section: lyrics on the left, vocabulary blocks on the right,
//! both inside one vertical scroll view.
//!
//! ```text
//! ┌ Lyrics ─────────────┐┌─────────────────────┐
//! │Line one             ││Word: Jude           │
//! │Line two             ││Translation: Jude    │
//! │                     ││Context: name        │
//! └─────────────────────┘└─────────────────────┘
//! ```
//!
//! Lyrics are shown preformatted: no trimming, wrapping only at the panel
//! edge. Each vocabulary entry gets its own bordered block, in order.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::view::{PageState, VocabularyBlock};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border cells a bordered panel uses on each axis.
const BORDERS: u16 = 2;

/// Scroll position of the results section (TUI-local state).
#[derive(Default)]
pub struct ResultsState {
    pub scroll_state: ScrollViewState,
    /// Total content height from the last render
    content_height: u16,
    /// Visible height from the last render
    viewport_height: u16,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, used when new results arrive.
    pub fn scroll_to_top(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Keep the offset inside the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for ResultsState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        Some(())
    }
}

fn vocabulary_paragraph(block: &VocabularyBlock) -> Paragraph<'_> {
    let label = Style::default().fg(Color::DarkGray);
    let text = Text::from(vec![
        Line::from(vec![
            Span::styled("Word: ", label),
            Span::styled(
                block.word.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Translation: ", label),
            Span::styled(block.translation.as_str(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Context: ", label),
            Span::styled(
                block.context.as_str(),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
        ]),
    ]);
    Paragraph::new(text)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
        .wrap(Wrap { trim: false })
}

/// Row count as a buffer height, saturating at `u16::MAX`.
fn clamp_rows(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Props: the page to draw and the scroll state to drive.
pub struct ResultsPanel<'a> {
    pub page: &'a PageState,
    pub state: &'a mut ResultsState,
}

impl Component for ResultsPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let [lyrics_col, vocab_col] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(Rect::new(0, 0, content_width, 0));

        let lyrics = Paragraph::new(self.page.lyrics_text())
            .block(Block::bordered().title("Lyrics"))
            .wrap(Wrap { trim: false });
        let lyrics_rows = lyrics.line_count(lyrics_col.width.saturating_sub(BORDERS));

        let entries: Vec<(Paragraph, usize)> = self
            .page
            .vocabulary_content
            .iter()
            .map(|block| {
                let paragraph = vocabulary_paragraph(block);
                let rows = paragraph.line_count(vocab_col.width.saturating_sub(BORDERS));
                (paragraph, rows)
            })
            .collect();
        let vocab_rows: usize = entries.iter().map(|(_, rows)| *rows).sum();

        let content_height = clamp_rows(lyrics_rows.max(vocab_rows));
        self.state.content_height = content_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        scroll_view.render_widget(
            lyrics,
            Rect::new(lyrics_col.x, 0, lyrics_col.width, clamp_rows(lyrics_rows)),
        );

        // Entries past the last addressable row are cut off
        let mut y: u16 = 0;
        for (paragraph, rows) in entries {
            if y >= content_height {
                break;
            }
            let height = clamp_rows(rows).min(content_height - y);
            scroll_view.render_widget(paragraph, Rect::new(vocab_col.x, y, vocab_col.width, height));
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
