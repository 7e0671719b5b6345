// Analysis worker.
// Spawns one task per submission and reports completions over a channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::backend::AnalysisBackend;
use super::report::{AnalysisArtifact, PendingSubmission};

/// Identifies the session a completion belongs to.
pub type SessionId = u64;

/// Identifies one submission within a session.
pub type SubmissionId = u64;

/// Result of a single analysis task.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    Completed(AnalysisArtifact),
    Failed { file: String, error: String },
}

/// Message sent from a finished task back to the session.
#[derive(Debug, Clone)]
pub struct AnalysisEvent {
    pub session: SessionId,
    pub submission: SubmissionId,
    pub outcome: AnalysisOutcome,
}

/// Owns the in-flight analysis tasks for one session.
///
/// Every submission gets its own task; nothing is de-duplicated or queued.
/// Dropping the worker aborts whatever is still running.
pub struct AnalysisWorker {
    session: SessionId,
    backend: Arc<dyn AnalysisBackend>,
    events: mpsc::UnboundedSender<AnalysisEvent>,
    tasks: Vec<(SubmissionId, JoinHandle<()>)>,
    next_submission: SubmissionId,
}

impl AnalysisWorker {
    pub fn new(
        session: SessionId,
        backend: Arc<dyn AnalysisBackend>,
        events: mpsc::UnboundedSender<AnalysisEvent>,
    ) -> Self {
        Self {
            session,
            backend,
            events,
            tasks: Vec::new(),
            next_submission: 1,
        }
    }

    /// Schedule an analysis. Returns immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, submission: PendingSubmission) -> SubmissionId {
        self.prune_finished();

        let id = self.next_submission;
        self.next_submission += 1;

        let session = self.session;
        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();

        info!(
            session,
            submission = id,
            file = %submission.file.name,
            model = submission.model.id(),
            "analysis submitted"
        );

        let handle = tokio::spawn(async move {
            let outcome = match backend.analyze(&submission).await {
                Ok(report) => AnalysisOutcome::Completed(AnalysisArtifact::new(submission, report)),
                Err(e) => {
                    warn!(session, submission = id, error = %e, "analysis failed");
                    AnalysisOutcome::Failed {
                        file: submission.file.name,
                        error: e.to_string(),
                    }
                }
            };
            // Receiver is gone once the session has been torn down
            let _ = events.send(AnalysisEvent {
                session,
                submission: id,
                outcome,
            });
        });

        self.tasks.push((id, handle));
        id
    }

    /// Number of submissions whose task has not finished yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|(_, h)| !h.is_finished()).count()
    }

    /// Abort every running task.
    pub fn cancel_all(&mut self) {
        for (id, handle) in self.tasks.drain(..) {
            if !handle.is_finished() {
                info!(session = self.session, submission = id, "analysis cancelled");
                handle.abort();
            }
        }
    }

    fn prune_finished(&mut self) {
        self.tasks.retain(|(_, h)| !h.is_finished());
    }
}

impl Drop for AnalysisWorker {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::analysis::backend::SimulatedBackend;
    use crate::analysis::report::AnalysisReport;
    use crate::catalog::ModelSelection;
    use crate::error::{CoachError, Result};
    use crate::media::VideoFile;

    struct FailingBackend;

    #[async_trait]
    impl AnalysisBackend for FailingBackend {
        async fn analyze(&self, _submission: &PendingSubmission) -> Result<AnalysisReport> {
            Err(CoachError::Io(std::io::Error::other("model unavailable")))
        }
    }

    fn submission(name: &str) -> PendingSubmission {
        PendingSubmission::new(VideoFile::new(name, 1, "video/mp4"), ModelSelection::Standard)
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_submission_completes_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut worker = AnalysisWorker::new(7, Arc::new(SimulatedBackend::default()), tx);

        let first = worker.submit(submission("a.mp4"));
        let second = worker.submit(submission("a.mp4"));
        assert_ne!(first, second);
        assert_eq!(worker.in_flight(), 2);

        let mut seen = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        seen.sort_by_key(|e| e.submission);
        assert_eq!(seen[0].submission, first);
        assert_eq!(seen[1].submission, second);
        assert!(seen.iter().all(|e| e.session == 7));

        // No third completion
        let extra = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(extra.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_error_is_reported() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut worker = AnalysisWorker::new(1, Arc::new(FailingBackend), tx);
        worker.submit(submission("broken.mp4"));

        let event = rx.recv().await.unwrap();
        match event.outcome {
            AnalysisOutcome::Failed { file, error } => {
                assert_eq!(file, "broken.mp4");
                assert!(error.contains("model unavailable"));
            }
            AnalysisOutcome::Completed(_) => panic!("expected failure"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut worker = AnalysisWorker::new(1, Arc::new(SimulatedBackend::default()), tx);
        worker.submit(submission("a.mp4"));
        tokio::task::yield_now().await;

        worker.cancel_all();
        assert_eq!(worker.in_flight(), 0);

        let result = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(result.is_err());
    }
}
