//! # Status Panels
//!
//! The loading indicator, the error section and the idle hint. All three
//! are stateless and centered in the main area.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Vertically centered strip of `height` rows.
fn centered(area: Rect, height: u16) -> Rect {
    let [strip] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    strip
}

pub struct LoadingIndicator {
    pub frame_index: usize,
}

impl Component for LoadingIndicator {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER_FRAMES[self.frame_index % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Yellow)),
            Span::raw(" Fetching lyrics and vocabulary..."),
        ]);
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center),
            centered(area, 1),
        );
    }
}

pub struct ErrorPanel {
    /// Full message, already prefixed with `Error: `
    pub message: String,
}

impl Component for ErrorPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::Red);
        let paragraph = Paragraph::new(self.message.as_str())
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style)
                    .title(Span::styled("Error", style.add_modifier(Modifier::BOLD))),
            )
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        let height = (paragraph.line_count(area.width.saturating_sub(2)) as u16).min(area.height);
        frame.render_widget(paragraph, centered(area, height));
    }
}

pub struct IdleHint;

impl Component for IdleHint {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "SongVocab",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Type a song title below to get its lyrics and vocabulary",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let height = lines.len() as u16;
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            centered(area, height),
        );
    }
}
