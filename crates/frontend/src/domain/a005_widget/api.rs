use crate::shared::http;
use contracts::domain::a005_widget::aggregate::Widget;
use contracts::shared::api_error::ApiError;

const BASE: &str = "/main/core/api/v4/layout/widgets";

/// All widgets visible to the user; the endpoint is not paged
pub async fn fetch_widgets() -> Result<Vec<Widget>, ApiError> {
    http::get_json(BASE).await
}

pub async fn delete_widget(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, urlencoding::encode(id))).await
}
