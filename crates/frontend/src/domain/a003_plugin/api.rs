use crate::shared::http;
use contracts::domain::a003_plugin::aggregate::Plugin;
use contracts::shared::api_error::ApiError;
use contracts::shared::list::{ListPage, PageRequest};

pub async fn fetch_plugins(page: PageRequest) -> Result<ListPage<Plugin>, ApiError> {
    let path = http::with_query("/main/integration/api/v1/plugin", &page)?;
    http::get_json(&path).await
}
