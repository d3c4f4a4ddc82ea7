use crate::shared::http;
use crate::shared::list_loader::ListQuery;
use contracts::domain::a002_control::aggregate::{control_list_request, Control};
use contracts::shared::api_error::ApiError;
use contracts::shared::list::ListPage;

const BASE: &str = "/main/compliance/api/v3";

pub async fn fetch_controls(query: &ListQuery) -> Result<ListPage<Control>, ApiError> {
    let body = control_list_request(&query.filter, query.page);
    http::post_json(&format!("{}/controls", BASE), &body).await
}

pub async fn fetch_control(id: &str) -> Result<Control, ApiError> {
    http::get_json(&format!("{}/control/{}", BASE, urlencoding::encode(id))).await
}
