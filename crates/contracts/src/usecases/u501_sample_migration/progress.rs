use crate::shared::polling::{JobProgress, JobStatus};
use serde::{Deserialize, Serialize};

/// `GET /main/core/api/v3/migration/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationStatus {
    pub status: JobStatus,
    #[serde(default)]
    pub summary: Option<MigrationSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationSummary {
    #[serde(default)]
    pub progress_percentage: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<MigrationStatus> for JobProgress {
    fn from(s: MigrationStatus) -> Self {
        let summary = s.summary.unwrap_or_default();
        JobProgress {
            status: s.status,
            percentage: summary.progress_percentage.map(|p| p.clamp(0.0, 100.0)),
            message: summary.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::polling::PollState;

    #[test]
    fn test_status_maps_to_progress() {
        let s: MigrationStatus = serde_json::from_str(
            r#"{"status":"IN_PROGRESS","summary":{"progress_percentage":140.5}}"#,
        )
        .unwrap();
        let p = JobProgress::from(s);
        assert_eq!(p.status, JobStatus::InProgress);
        assert_eq!(p.percentage, Some(100.0));

        let s: MigrationStatus = serde_json::from_str(r#"{"status":"SUCCEEDED"}"#).unwrap();
        assert!(JobProgress::from(s).status.is_terminal());
    }

    #[test]
    fn test_every_unfinished_status_needs_polling() {
        for raw in ["IN_PROGRESS", "QUEUED", "PENDING", ""] {
            let s: MigrationStatus =
                serde_json::from_str(&format!(r#"{{"status":"{}"}}"#, raw)).unwrap();
            assert_eq!(PollState::settled(JobProgress::from(s)), None, "{:?}", raw);
        }

        let s: MigrationStatus = serde_json::from_str(r#"{"status":"failed"}"#).unwrap();
        assert!(matches!(
            PollState::settled(JobProgress::from(s)),
            Some(PollState::Failed(_))
        ));
    }
}
