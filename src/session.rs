/// Submission session
///
/// Drives pipeline runs against the shared view model. The view stands in
/// for the page the original client mutated directly; the run counter
/// closes the stale-response race the reference behavior had, by
/// discarding completions of superseded runs instead of letting the last
/// response to finish win.
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::services::pipeline::{RecommendationPipeline, RunError};
use crate::view::{ViewModel, ViewSnapshot};

/// Outcome of one submission, as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Markup injected into the results view.
    Rendered(String),
    /// Empty input; rejected before any network call.
    Rejected,
    /// Soft not-found; the view shows the failure state.
    NotFound,
    /// Hard failure; `message` is the generic stage alert.
    Alert { message: &'static str },
    /// A newer run started while this one was in flight; its result was
    /// discarded without touching the view.
    Superseded,
}

pub struct Session {
    pipeline: RecommendationPipeline,
    view: RwLock<ViewModel>,
    runs: AtomicU64,
}

impl Session {
    pub fn new(pipeline: RecommendationPipeline) -> Self {
        Self {
            pipeline,
            view: RwLock::new(ViewModel::new()),
            runs: AtomicU64::new(0),
        }
    }

    /// Runs the full pipeline for one submitted title and applies the
    /// resulting view transition, unless a newer submission superseded
    /// this one in the meantime.
    pub async fn submit(&self, title: &str) -> SubmitOutcome {
        if title.trim().is_empty() {
            self.view.write().await.show_failure();
            return SubmitOutcome::Rejected;
        }

        let run = self.begin_run().await;
        let result = self.pipeline.run(title).await;
        self.apply(run, result).await
    }

    /// Current view snapshot.
    pub async fn view(&self) -> ViewSnapshot {
        self.view.read().await.snapshot()
    }

    async fn begin_run(&self) -> u64 {
        let run = self.runs.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.write().await.begin_loading();
        run
    }

    async fn apply(&self, run: u64, result: Result<String, RunError>) -> SubmitOutcome {
        let mut view = self.view.write().await;

        // Checked under the view lock so a newer run cannot start between
        // the check and the transition
        if self.runs.load(Ordering::SeqCst) != run {
            tracing::debug!(run, "Run superseded; result discarded");
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(html) => {
                view.show_results(html.clone());
                SubmitOutcome::Rendered(html)
            }
            Err(RunError::NotFound) => {
                view.show_failure();
                SubmitOutcome::NotFound
            }
            Err(RunError::Failed { stage, .. }) => {
                view.dismiss_loader();
                SubmitOutcome::Alert {
                    message: stage.alert_message(),
                }
            }
        }
    }
}
