use crate::shared::polling::{JobProgress, JobStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    #[serde(default)]
    pub critical: u64,
    #[serde(default)]
    pub high: u64,
    #[serde(default)]
    pub medium: u64,
    #[serde(default)]
    pub low: u64,
    #[serde(default)]
    pub none: u64,
}

impl SeverityCounts {
    pub fn total(&self) -> u64 {
        [self.critical, self.high, self.medium, self.low, self.none]
            .into_iter()
            .fold(0u64, u64::saturating_add)
    }
}

/// `GET /main/compliance/api/v3/job-report/{id}/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobReportSummary {
    pub job_id: String,
    #[serde(default)]
    pub benchmark_id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub failed_controls: SeverityCounts,
    #[serde(default)]
    pub compliant_resources: u64,
    #[serde(default)]
    pub non_compliant_resources: u64,
    #[serde(default)]
    pub last_evaluated_at: Option<DateTime<Utc>>,
}

impl JobReportSummary {
    /// Share of compliant resources, 0-100
    pub fn compliance_percentage(&self) -> Option<f64> {
        let total = self
            .compliant_resources
            .saturating_add(self.non_compliant_resources);
        (total > 0).then(|| self.compliant_resources as f64 * 100.0 / total as f64)
    }
}

impl From<JobReportSummary> for JobProgress {
    fn from(s: JobReportSummary) -> Self {
        JobProgress {
            percentage: s.compliance_percentage(),
            status: s.status,
            message: None,
        }
    }
}

/// `GET /main/schedule/api/v3/jobs/compliance/{id}/runners`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRunner {
    pub runner_id: String,
    #[serde(default)]
    pub control_id: String,
    #[serde(default)]
    pub integration_id: String,
    pub status: JobStatus,
    #[serde(default, alias = "failure_message")]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_progress() {
        let s: JobReportSummary = serde_json::from_str(
            r#"{"job_id":"42","status":"IN_PROGRESS","compliant_resources":30,"non_compliant_resources":10,"failed_controls":{"high":2,"low":1}}"#,
        )
        .unwrap();
        assert_eq!(s.failed_controls.total(), 3);
        let p = JobProgress::from(s);
        assert_eq!(p.status, JobStatus::InProgress);
        assert_eq!(p.percentage, Some(75.0));
    }

    #[test]
    fn test_empty_summary_has_no_percentage() {
        let s: JobReportSummary = serde_json::from_str(r#"{"job_id":"1","status":"SUCCEEDED"}"#).unwrap();
        assert_eq!(s.compliance_percentage(), None);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let s = JobReportSummary {
            job_id: "1".into(),
            benchmark_id: String::new(),
            status: JobStatus::Succeeded,
            failed_controls: SeverityCounts {
                critical: u64::MAX,
                high: 1,
                ..Default::default()
            },
            compliant_resources: u64::MAX,
            non_compliant_resources: u64::MAX,
            last_evaluated_at: None,
        };
        assert_eq!(s.failed_controls.total(), u64::MAX);
        let pct = s.compliance_percentage().unwrap();
        assert!((0.0..=100.0).contains(&pct));
    }
}
