use crate::shared::http;
use contracts::projections::p900_compliance_job::dto::{JobReportSummary, JobRunner};
use contracts::shared::api_error::ApiError;

pub async fn fetch_summary(job_id: &str) -> Result<JobReportSummary, ApiError> {
    let path = format!(
        "/main/compliance/api/v3/job-report/{}/summary",
        urlencoding::encode(job_id)
    );
    http::get_json(&path).await
}

/// Per-control runners of a compliance job
pub async fn fetch_runners(job_id: &str) -> Result<Vec<JobRunner>, ApiError> {
    let path = format!(
        "/main/schedule/api/v3/jobs/compliance/{}/runners",
        urlencoding::encode(job_id)
    );
    http::get_json(&path).await
}
