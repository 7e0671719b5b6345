// Analysis result types.
// The report a backend produces and the artifact committed to the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ModelSelection;
use crate::media::VideoFile;

/// How serious a detected mistake is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Score bucket used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Strong
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}

/// A technique flaw at a point in the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    /// Offset into the video, in seconds.
    pub timestamp_secs: f32,
    pub description: String,
    pub severity: Severity,
}

/// Output of an analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: u8,
    pub feedback: Vec<String>,
    pub mistakes: Vec<Mistake>,
    pub improvements: Vec<String>,
}

impl AnalysisReport {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }

    /// The fixed report returned by the simulated backend.
    pub fn sample() -> Self {
        Self {
            score: 78,
            feedback: vec![
                "Good follow-through motion".to_string(),
                "Maintain better balance during contact".to_string(),
                "Increase hip rotation for more power".to_string(),
            ],
            mistakes: vec![
                Mistake {
                    timestamp_secs: 1.2,
                    description: "Low elbow position".to_string(),
                    severity: Severity::Medium,
                },
                Mistake {
                    timestamp_secs: 2.1,
                    description: "Poor weight transfer".to_string(),
                    severity: Severity::High,
                },
                Mistake {
                    timestamp_secs: 3.5,
                    description: "Late racket preparation".to_string(),
                    severity: Severity::Low,
                },
            ],
            improvements: vec![
                "Focus on early racket preparation".to_string(),
                "Practice shadow swings for muscle memory".to_string(),
                "Work on core strength for better rotation".to_string(),
            ],
        }
    }
}

/// A file and model waiting to be analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub file: VideoFile,
    pub model: ModelSelection,
}

impl PendingSubmission {
    pub fn new(file: VideoFile, model: ModelSelection) -> Self {
        Self { file, model }
    }
}

/// The most recent completed analysis.
///
/// Fields are only readable; a new completion replaces the whole artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisArtifact {
    file: VideoFile,
    model: ModelSelection,
    created_at: DateTime<Utc>,
    report: AnalysisReport,
}

impl AnalysisArtifact {
    pub fn new(submission: PendingSubmission, report: AnalysisReport) -> Self {
        Self {
            file: submission.file,
            model: submission.model,
            created_at: Utc::now(),
            report,
        }
    }

    pub fn file(&self) -> &VideoFile {
        &self.file
    }

    pub fn model(&self) -> ModelSelection {
        self.model
    }

    /// When the analysis completed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_band() {
        assert_eq!(ScoreBand::of(95), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(80), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(59), ScoreBand::Weak);
    }

    #[test]
    fn test_sample_report() {
        let report = AnalysisReport::sample();
        assert_eq!(report.score, 78);
        assert_eq!(report.band(), ScoreBand::Fair);
        assert_eq!(report.feedback.len(), 3);
        assert_eq!(report.improvements.len(), 3);
        let severities: Vec<Severity> = report.mistakes.iter().map(|m| m.severity).collect();
        assert_eq!(
            severities,
            [Severity::Medium, Severity::High, Severity::Low]
        );
    }

    #[test]
    fn test_artifact_takes_submission_fields() {
        let before = Utc::now();
        let submission = PendingSubmission::new(
            VideoFile::new("forehand.mp4", 10, "video/mp4"),
            ModelSelection::Federer,
        );
        let artifact = AnalysisArtifact::new(submission, AnalysisReport::sample());
        assert_eq!(artifact.file().name, "forehand.mp4");
        assert_eq!(artifact.model(), ModelSelection::Federer);
        assert!(artifact.created_at() >= before);
    }
}
