// Analysis backends.
// The seam a real stroke analyzer plugs into, plus the fixed-delay simulation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;

use super::report::{AnalysisReport, PendingSubmission};

/// Default time the simulated backend takes to "analyze" a video.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(1000);

/// Something that can turn a submitted video into a report.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Analyze a submission. Errors are reported to the user and leave the
    /// current artifact in place.
    async fn analyze(&self, submission: &PendingSubmission) -> Result<AnalysisReport>;
}

/// Stand-in backend: waits a fixed delay and returns the sample report.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(DEFAULT_ANALYSIS_DELAY)
    }
}

#[async_trait]
impl AnalysisBackend for SimulatedBackend {
    async fn analyze(&self, submission: &PendingSubmission) -> Result<AnalysisReport> {
        debug!(
            file = %submission.file.name,
            model = submission.model.id(),
            delay_ms = self.delay.as_millis() as u64,
            "simulating analysis"
        );
        tokio::time::sleep(self.delay).await;
        Ok(AnalysisReport::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModelSelection;
    use crate::media::VideoFile;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_backend_waits_delay() {
        let backend = SimulatedBackend::default();
        let submission = PendingSubmission::new(
            VideoFile::new("serve.mp4", 1, "video/mp4"),
            ModelSelection::Nadal,
        );

        let start = tokio::time::Instant::now();
        let report = backend.analyze(&submission).await.unwrap();

        assert!(start.elapsed() >= DEFAULT_ANALYSIS_DELAY);
        assert_eq!(report, AnalysisReport::sample());
    }
}
