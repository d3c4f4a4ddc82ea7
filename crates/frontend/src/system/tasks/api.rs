use crate::shared::http;
use contracts::shared::api_error::ApiError;
use contracts::shared::list::{ListPage, PageRequest};
use contracts::system::tasks::{RunTaskRequest, RunTaskResponse, Task, TaskRun};

const BASE: &str = "/main/tasks/api/v1/tasks";

pub async fn fetch_tasks(page: PageRequest) -> Result<ListPage<Task>, ApiError> {
    let path = http::with_query(BASE, &page)?;
    http::get_json(&path).await
}

pub async fn fetch_task(id: &str) -> Result<Task, ApiError> {
    http::get_json(&format!("{}/{}", BASE, urlencoding::encode(id))).await
}

/// Start a run; the response carries the run id to poll
pub async fn run_task(request: &RunTaskRequest) -> Result<RunTaskResponse, ApiError> {
    http::post_json(&format!("{}/run/", BASE), request).await
}

pub async fn fetch_run(run_id: &str) -> Result<TaskRun, ApiError> {
    http::get_json(&format!("{}/run/{}", BASE, urlencoding::encode(run_id))).await
}
