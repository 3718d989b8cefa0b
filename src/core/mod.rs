//! # Core Application Logic
//!
//! This module contains SongVocab's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RequestController    │
//!                    │  • View (trait)         │
//!                    │  • Action / update()    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    HTML    │      │  one-shot  │
//!     │  Adapter   │      │  HtmlView  │      │    CLI     │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`controller`]: the submission cycle (validate, request, render)
//! - [`view`]: the `View` trait and `PageState`
//! - [`render`]: lyric cleaning, content policy, HTML adapter
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: layered configuration
//! - [`types`]: wire and domain types

pub mod action;
pub mod config;
pub mod controller;
pub mod render;
pub mod state;
pub mod types;
pub mod view;
