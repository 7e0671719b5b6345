// Stroke analysis module.
// Report types, the backend seam, and the worker that runs submissions.

pub mod backend;
pub mod report;
pub mod worker;

pub use backend::{AnalysisBackend, SimulatedBackend};
pub use report::{AnalysisArtifact, PendingSubmission, ScoreBand, Severity};
pub use worker::{AnalysisEvent, AnalysisOutcome, AnalysisWorker, SessionId, SubmissionId};
