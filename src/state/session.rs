// Session state holder.
// Owns the active view, the latest analysis artifact, and in-flight analyses.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::analysis::{
    AnalysisArtifact, AnalysisBackend, AnalysisEvent, AnalysisOutcome, AnalysisWorker,
    PendingSubmission, SessionId, SubmissionId,
};
use crate::catalog::ModelSelection;
use crate::error::{CoachError, Result};

use super::view::View;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// What applying an analysis event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Artifact replaced and view switched to Analysis.
    Committed {
        submission: SubmissionId,
        file: String,
        model: ModelSelection,
    },
    /// Backend reported an error; state untouched.
    Failed {
        submission: SubmissionId,
        file: String,
        error: String,
    },
    /// Event arrived for a closed or different session and was dropped.
    Discarded { submission: SubmissionId },
}

/// The single state holder for a running app.
///
/// View and artifact only change through the methods here. A completed
/// analysis always replaces the artifact and forces the Analysis view, even
/// if the user has moved to another view while it was running.
pub struct Session {
    id: SessionId,
    view: View,
    artifact: Option<AnalysisArtifact>,
    worker: AnalysisWorker,
    events: mpsc::UnboundedReceiver<AnalysisEvent>,
    open: bool,
}

impl Session {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        debug!(session = id, "session opened");
        Self {
            id,
            view: View::default(),
            artifact: None,
            worker: AnalysisWorker::new(id, backend, tx),
            events: rx,
            open: true,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn artifact(&self) -> Option<&AnalysisArtifact> {
        self.artifact.as_ref()
    }

    /// Number of analyses still running.
    pub fn in_flight(&self) -> usize {
        self.worker.in_flight()
    }

    /// User navigation. Always allowed.
    pub fn navigate(&mut self, target: View) {
        if self.view != target {
            debug!(session = self.id, from = self.view.id(), to = target.id(), "navigate");
        }
        self.view = target;
    }

    /// Schedule an analysis. Returns as soon as the task is spawned.
    pub fn submit(&mut self, submission: PendingSubmission) -> Result<SubmissionId> {
        if !self.open {
            return Err(CoachError::SessionClosed);
        }
        Ok(self.worker.submit(submission))
    }

    /// Apply every completion that has already arrived.
    pub fn poll_completions(&mut self) -> Vec<Completion> {
        let mut applied = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            applied.push(self.apply(event));
        }
        applied
    }

    /// Wait for the next completion and apply it.
    #[cfg(test)]
    pub async fn next_completion(&mut self) -> Option<Completion> {
        let event = self.events.recv().await?;
        Some(self.apply(event))
    }

    /// Commit a single analysis event.
    pub fn apply(&mut self, event: AnalysisEvent) -> Completion {
        if !self.open || event.session != self.id {
            warn!(
                session = self.id,
                event_session = event.session,
                submission = event.submission,
                "discarding stale analysis result"
            );
            return Completion::Discarded {
                submission: event.submission,
            };
        }

        match event.outcome {
            AnalysisOutcome::Completed(artifact) => {
                let file = artifact.file().name.clone();
                let model = artifact.model();
                info!(
                    session = self.id,
                    submission = event.submission,
                    file = %file,
                    model = model.id(),
                    "analysis complete"
                );
                self.artifact = Some(artifact);
                self.view = View::Analysis;
                Completion::Committed {
                    submission: event.submission,
                    file,
                    model,
                }
            }
            AnalysisOutcome::Failed { file, error } => Completion::Failed {
                submission: event.submission,
                file,
                error,
            },
        }
    }

    /// Tear down: abort running analyses and refuse late results.
    pub fn close(&mut self) {
        if self.open {
            info!(session = self.id, in_flight = self.worker.in_flight(), "session closed");
        }
        self.open = false;
        self.worker.cancel_all();
        self.events.close();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}
