use crate::shared::polling::{JobProgress, JobStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task definition as listed by the task service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub interval: Option<u64>,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    #[serde(default)]
    pub last_run: Option<TaskRun>,
}

/// One execution of a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRun {
    pub id: String,
    #[serde(default)]
    pub task_id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failure_message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl From<TaskRun> for JobProgress {
    fn from(run: TaskRun) -> Self {
        JobProgress {
            status: run.status,
            percentage: None,
            message: run.failure_message,
        }
    }
}

/// Body of `POST /main/tasks/api/v1/tasks/run/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTaskRequest {
    pub task_id: String,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTaskResponse {
    #[serde(alias = "run_id")]
    pub id: String,
    #[serde(default = "default_run_status")]
    pub status: JobStatus,
}

fn default_run_status() -> JobStatus {
    JobStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_decodes_with_minimal_fields() {
        let task: Task = serde_json::from_str(r#"{"id":"t1","name":"Sync"}"#).unwrap();
        assert_eq!(task.name, "Sync");
        assert!(task.params.is_empty());
        assert!(task.last_run.is_none());
    }

    #[test]
    fn test_task_without_name_is_rejected() {
        assert!(serde_json::from_str::<Task>(r#"{"id":"t1"}"#).is_err());
    }

    #[test]
    fn test_run_response_and_progress() {
        let resp: RunTaskResponse = serde_json::from_str(r#"{"run_id":"r9"}"#).unwrap();
        assert_eq!(resp.id, "r9");
        assert_eq!(resp.status, JobStatus::InProgress);

        let run: TaskRun = serde_json::from_str(
            r#"{"id":"r9","status":"FAILED","failure_message":"image pull error"}"#,
        )
        .unwrap();
        let progress = JobProgress::from(run);
        assert!(progress.status.is_terminal());
        assert_eq!(progress.message.as_deref(), Some("image pull error"));
    }
}
