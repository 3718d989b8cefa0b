//! # Rendering
//!
//! Text transforms shared by every view adapter, the content policy, and
//! the HTML adapter.
//!
//! Lyrics are cleaned before any view sees them: lines with no visible text
//! (blank after trimming, or only escape sequences and control characters)
//! are dropped, the rest keep their order and their original text.
//! Vocabulary entries always render as three lines (word, translation,
//! context) in array order.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::types::VocabularyEntry;
use crate::core::view::{UiState, View, Visibility};

/// How response content is treated before it reaches the rendering target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ContentPolicy {
    /// Content is pre-sanitized and shown verbatim.
    Trusted,
    /// Content is escaped for the target (HTML entities, or terminal
    /// control sequences removed).
    #[default]
    Escaped,
}

impl ContentPolicy {
    pub fn for_terminal(self, text: &str) -> String {
        match self {
            ContentPolicy::Trusted => text.to_string(),
            ContentPolicy::Escaped => strip_control_sequences(text),
        }
    }

    pub fn for_html(self, text: &str) -> String {
        match self {
            ContentPolicy::Trusted => text.to_string(),
            ContentPolicy::Escaped => escape_html(text),
        }
    }
}

/// Lines of `lyrics` with visible text, in order.
pub fn clean_lyrics_lines(lyrics: &str) -> impl Iterator<Item = &str> {
    lyrics.split('\n').filter(|line| !is_blank_line(line))
}

fn is_blank_line(line: &str) -> bool {
    strip_control_sequences(line).trim().is_empty()
}

/// Drops every line without visible text and rejoins with `\n`.
pub fn clean_lyrics(lyrics: &str) -> String {
    clean_lyrics_lines(lyrics).collect::<Vec<_>>().join("\n")
}

/// The fixed three-line structure of one vocabulary entry.
pub fn vocabulary_lines(word: &str, translation: &str, context: &str) -> [String; 3] {
    [
        format!("Word: {word}"),
        format!("Translation: {translation}"),
        format!("Context: {context}"),
    ]
}

/// Entity-escapes the five markup-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Removes ANSI escape sequences and control characters, keeping `\n` and `\t`.
pub fn strip_control_sequences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            match chars.next() {
                // CSI: parameters until a final byte in @..~
                Some('[') => {
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
                // OSC: until BEL or ST (ESC \)
                Some(']') => {
                    while let Some(c) = chars.next() {
                        if c == '\x07' {
                            break;
                        }
                        if c == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }
        if c.is_control() && c != '\n' && c != '\t' {
            continue;
        }
        out.push(c);
    }
    out
}

// ============================================================================
// HTML adapter
// ============================================================================

/// Writes markup into the lyrics and vocabulary containers, the way a page
/// would fill its `innerHTML`.
#[derive(Debug, Clone, Default)]
pub struct HtmlView {
    pub visibility: Visibility,
    pub lyrics_html: String,
    pub vocabulary_html: String,
    pub error_text: String,
    pub policy: ContentPolicy,
}

impl HtmlView {
    pub fn new(policy: ContentPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn ui_state(&self) -> UiState {
        self.visibility.ui_state()
    }

    /// The three sections as a markup fragment, hidden ones marked `hidden`.
    pub fn to_document(&self) -> String {
        let class = |visible: bool| if visible { "" } else { " class=\"hidden\"" };
        format!(
            "<div id=\"loading\"{}>Loading...</div>\n\
             <div id=\"results\"{}>\n\
             <div id=\"lyricsContent\">{}</div>\n\
             <div id=\"vocabularyContent\">{}</div>\n\
             </div>\n\
             <div id=\"error\"{}><p>{}</p></div>\n",
            class(self.visibility.loading),
            class(self.visibility.results),
            self.lyrics_html,
            self.vocabulary_html,
            class(self.visibility.error),
            // textContent semantics: the message is always escaped
            escape_html(&self.error_text),
        )
    }
}

fn vocabulary_item_html(entry: &VocabularyEntry, policy: ContentPolicy) -> String {
    format!(
        "<div class=\"vocabulary-item\">\
         <div class=\"word-line\">Word: <span class=\"vocabulary-word\">{}</span></div>\
         <div class=\"translation-line\">Translation: <span class=\"vocabulary-translation\">{}</span></div>\
         <div class=\"context-line\">Context: <span class=\"vocabulary-context\">{}</span></div>\
         </div>",
        policy.for_html(&entry.word),
        policy.for_html(&entry.translation),
        policy.for_html(&entry.context),
    )
}

impl View for HtmlView {
    fn show_loading(&mut self) {
        self.visibility.loading = true;
    }

    fn hide_loading(&mut self) {
        self.visibility.loading = false;
    }

    fn show_results(&mut self, lyrics: &str, vocabulary: &[VocabularyEntry]) {
        self.lyrics_html = format!("<pre>{}</pre>", self.policy.for_html(lyrics));
        self.vocabulary_html = vocabulary
            .iter()
            .map(|entry| vocabulary_item_html(entry, self.policy))
            .collect();
        self.visibility.results = true;
    }

    fn show_error(&mut self, message: &str) {
        self.error_text = message.to_string();
        self.visibility.error = true;
    }

    fn reset(&mut self) {
        self.visibility.results = false;
        self.visibility.error = false;
    }
}
