//! # TUI Components
//!
//! All UI components for the terminal page.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: service URL and status text
//! - `LoadingIndicator`, `ErrorPanel`, `IdleHint`: the status sections
//! - `ResultsPanel`: lyrics and vocabulary (scroll state passed in as a prop)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `QueryForm`: the song title field, emits `FormEvent::Submit`
//! - `ResultsState`: scroll position of the results section
//!
//! Components receive external data as props rather than reading `App`,
//! so each one can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (top status bar)
//! ├── query_form.rs   (song title input)
//! ├── results.rs      (lyrics + vocabulary)
//! └── status.rs       (loading, error, idle)
//! ```

pub mod query_form;
pub mod results;
pub mod status;
mod title_bar;

pub use query_form::{FormEvent, QueryForm};
pub use results::{ResultsPanel, ResultsState};
pub use status::{ErrorPanel, IdleHint, LoadingIndicator};
pub use title_bar::TitleBar;
