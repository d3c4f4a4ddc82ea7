use crate::shared::http;
use crate::shared::list_loader::ListQuery;
use contracts::domain::a006_named_query::aggregate::{NamedQuery, NamedQueryKind};
use contracts::shared::api_error::ApiError;
use contracts::shared::list::{FilteredListRequest, ListPage};

pub async fn fetch_named_queries(
    kind: NamedQueryKind,
    query: &ListQuery,
) -> Result<ListPage<NamedQuery>, ApiError> {
    let body = FilteredListRequest::new(&query.filter, kind.dimensions(), query.page);
    http::post_json(kind.list_path(), &body).await
}
