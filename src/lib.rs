//! SongVocab library exports for testing

use clap::ValueEnum;

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the one-shot mode prints the final page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}
