use crate::shared::http;
use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_sample_migration::MigrationStatus;

/// Ask the core service to load sample data; progress is read from
/// [`fetch_status`]
pub async fn start_sample_sync() -> Result<(), ApiError> {
    http::put_empty("/main/core/api/v3/sample/sync").await
}

pub async fn fetch_status() -> Result<MigrationStatus, ApiError> {
    http::get_json("/main/core/api/v3/migration/status").await
}
