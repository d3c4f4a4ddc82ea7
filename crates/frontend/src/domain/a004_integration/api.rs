use crate::shared::http;
use contracts::domain::a004_integration::aggregate::{Integration, IntegrationListQuery};
use contracts::shared::api_error::ApiError;
use contracts::shared::list::{ListPage, PageRequest};

/// Integrations of one plugin type
pub async fn fetch_integrations(
    integration_type: &str,
    page: PageRequest,
) -> Result<ListPage<Integration>, ApiError> {
    let query = IntegrationListQuery {
        integration_type: integration_type.to_string(),
        cursor: page.cursor,
        per_page: page.per_page,
    };
    let path = http::with_query("/main/integration/api/v1/integrations", &query)?;
    http::get_json(&path).await
}
