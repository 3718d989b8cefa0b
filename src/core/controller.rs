//! # Request Controller
//!
//! Runs one submission cycle per accepted submission:
//!
//! ```text
//! begin(raw)            trim → empty? ──yes──▶ nothing happens
//!   │                          │no
//!   │                   show_loading, reset (results, then error)
//!   ▼
//! request(ticket)       one POST through the LyricsService
//!   ▼
//! complete(completion)  show_results | show_error("Error: …")
//!                       hide_loading            (every non-stale exit)
//! ```
//!
//! The three steps are split so an event loop can spawn `request` and feed
//! the result back later. [`RequestController::submit`] chains them for
//! callers that can simply await.
//!
//! ## Overlapping submissions
//!
//! Nothing stops a second submission while the first is in flight. With
//! [`OverlapPolicy::LatestWins`] every accepted submission gets a new
//! generation and completions from older generations are dropped without
//! touching the view. [`OverlapPolicy::Race`] lets every completion render,
//! so the last one to resolve wins.

use std::sync::Arc;

use clap::ValueEnum;
use futures::FutureExt;
use futures::future::BoxFuture;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::{FetchError, LyricsService};
use crate::core::render::clean_lyrics;
use crate::core::types::{LyricsResponse, SubmissionInput};
use crate::core::view::View;

/// Prefix of every message shown in the error section.
pub const ERROR_PREFIX: &str = "Error: ";

/// How completions of overlapping submissions are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Only the newest submission may update the view.
    #[default]
    LatestWins,
    /// Every completion updates the view as it arrives.
    Race,
}

/// Handle for one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub query: SubmissionInput,
}

/// Result of one request, tagged with the submission it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub generation: u64,
    pub result: Result<LyricsResponse, FetchError>,
}

/// How a cycle ended, as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Results section shown: `lines` lyric lines, `entries` vocabulary blocks.
    Rendered { lines: usize, entries: usize },
    /// Error section shown with this full message.
    Failed(String),
    /// Superseded by a newer submission; the view was left alone.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input: no request, no view changes.
    Ignored,
    Completed(CycleOutcome),
}

pub struct RequestController {
    service: Arc<dyn LyricsService>,
    overlap: OverlapPolicy,
    generation: u64,
}

impl RequestController {
    pub fn new(service: Arc<dyn LyricsService>, overlap: OverlapPolicy) -> Self {
        Self {
            service,
            overlap,
            generation: 0,
        }
    }

    /// Generation of the most recently accepted submission (0 = none yet).
    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    /// Validates `raw` and, if accepted, puts the view into the loading state.
    pub fn begin(&mut self, raw: &str, view: &mut dyn View) -> Option<Ticket> {
        let Some(query) = SubmissionInput::parse(raw) else {
            debug!("Ignoring empty submission");
            return None;
        };

        view.show_loading();
        view.reset();

        self.generation += 1;
        info!(
            "Submission #{} accepted: {:?}",
            self.generation,
            query.as_str()
        );
        Some(Ticket {
            generation: self.generation,
            query,
        })
    }

    /// Future that issues the request for `ticket`.
    ///
    /// Owns everything it needs, so it can be handed to `tokio::spawn`. A
    /// panic inside the service becomes a transport failure, so the cycle
    /// always completes.
    pub fn request(&self, ticket: Ticket) -> BoxFuture<'static, Completion> {
        let service = Arc::clone(&self.service);
        async move {
            let Ticket { generation, query } = ticket;
            debug!("Request #{} via {} service", generation, service.name());
            let task = tokio::spawn(async move { service.fetch(&query).await });
            let result = match task.await {
                Ok(result) => result,
                Err(e) => {
                    warn!("Request task #{} failed: {}", generation, e);
                    Err(FetchError::Transport(e.to_string()))
                }
            };
            Completion { generation, result }
        }
        .boxed()
    }

    /// Renders a completion and ends the loading state.
    pub fn complete(&mut self, completion: Completion, view: &mut dyn View) -> CycleOutcome {
        let Completion { generation, result } = completion;

        if self.overlap == OverlapPolicy::LatestWins && generation != self.generation {
            info!(
                "Dropping stale completion #{} (latest is #{})",
                generation, self.generation
            );
            return CycleOutcome::Stale;
        }

        let outcome = match result {
            Ok(response) => {
                let lyrics = clean_lyrics(&response.lyrics);
                let lines = if lyrics.is_empty() {
                    0
                } else {
                    lyrics.split('\n').count()
                };
                view.show_results(&lyrics, &response.vocabulary);
                debug!(
                    "Cycle #{} rendered {} lines, {} entries",
                    generation,
                    lines,
                    response.vocabulary.len()
                );
                CycleOutcome::Rendered {
                    lines,
                    entries: response.vocabulary.len(),
                }
            }
            Err(e) => {
                let message = format!("{ERROR_PREFIX}{e}");
                warn!("Cycle #{} failed: {:?}", generation, e);
                view.show_error(&message);
                CycleOutcome::Failed(message)
            }
        };

        view.hide_loading();
        outcome
    }

    /// One full cycle: validate, request, render.
    pub async fn submit(&mut self, raw: &str, view: &mut dyn View) -> SubmitOutcome {
        let Some(ticket) = self.begin(raw, view) else {
            return SubmitOutcome::Ignored;
        };
        let completion = self.request(ticket).await;
        SubmitOutcome::Completed(self.complete(completion, view))
    }
}
