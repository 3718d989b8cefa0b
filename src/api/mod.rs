pub mod client;
pub mod service;

pub use client::{HttpLyricsService, join_url};
pub use service::{FetchError, GENERIC_FAILURE_MESSAGE, LyricsService};
