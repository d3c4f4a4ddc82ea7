//! Authenticated JSON requests against the console API.
//!
//! Every helper attaches the bearer token of the session context and maps
//! all failures into [`ApiError`]. Without a session the call fails before
//! any request is sent; a token the API rejects signs the console out.

use crate::shared::api_utils::api_url;
use crate::system::auth::context::{current_session, handle_api_error};
use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let header = current_session().bearer_header()?;
    Ok(builder
        .header("Authorization", &header)
        .header("Accept", "application/json"))
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Append a `serde_qs` encoded query string to `path`
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::Decode(format!("failed to encode query: {}", e)))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

async fn check_status(method: &str, path: &str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    log::warn!("{} {} failed: {}", method, path, err);
    handle_api_error(&err);
    Err(err)
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let text = response.text().await.map_err(network_error)?;
    serde_json::from_str::<T>(&text).map_err(|e| {
        log::error!("unexpected response from {}: {}", path, e);
        ApiError::Decode(e.to_string())
    })
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(Request::get(&api_url(path)))?
        .send()
        .await
        .map_err(network_error)?;
    let response = check_status("GET", path, response).await?;
    decode(path, response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = authorized(Request::post(&api_url(path)))?
        .json(body)
        .map_err(|e| ApiError::Decode(format!("failed to encode request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;
    let response = check_status("POST", path, response).await?;
    decode(path, response).await
}

/// POST whose response body is ignored
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = authorized(Request::post(&api_url(path)))?
        .json(body)
        .map_err(|e| ApiError::Decode(format!("failed to encode request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;
    check_status("POST", path, response).await.map(|_| ())
}

/// Body-less PUT, used to trigger server-side jobs
pub async fn put_empty(path: &str) -> Result<(), ApiError> {
    let response = authorized(Request::put(&api_url(path)))?
        .send()
        .await
        .map_err(network_error)?;
    check_status("PUT", path, response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&api_url(path)))?
        .send()
        .await
        .map_err(network_error)?;
    check_status("DELETE", path, response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Query<'a> {
        integration_type: &'a str,
        cursor: u64,
        per_page: u64,
    }

    #[test]
    fn test_with_query_encodes_fields_in_order() {
        let url = with_query(
            "/main/integration/api/v1/integrations",
            &Query {
                integration_type: "aws_cloud_account",
                cursor: 1,
                per_page: 20,
            },
        )
        .unwrap();
        assert_eq!(
            url,
            "/main/integration/api/v1/integrations?integration_type=aws_cloud_account&cursor=1&per_page=20"
        );
    }

    #[test]
    fn test_with_empty_query_keeps_path() {
        #[derive(Serialize)]
        struct Empty {}
        assert_eq!(with_query("/x", &Empty {}).unwrap(), "/x");
    }
}
