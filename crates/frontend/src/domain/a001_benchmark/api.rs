use crate::shared::http;
use crate::shared::list_loader::ListQuery;
use contracts::domain::a001_benchmark::aggregate::{
    AssignRequest, Benchmark, BenchmarkAssignments, BenchmarkListRequest,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::list::ListPage;

const BASE: &str = "/main/compliance/api/v3";

fn benchmark_path(id: &str, suffix: &str) -> String {
    format!("{}/benchmark/{}{}", BASE, urlencoding::encode(id), suffix)
}

/// Fetch one page of top-level benchmarks
pub async fn fetch_benchmarks(query: &ListQuery) -> Result<ListPage<Benchmark>, ApiError> {
    let body = BenchmarkListRequest::new(&query.filter, query.page);
    http::post_json(&format!("{}/benchmarks", BASE), &body).await
}

pub async fn fetch_benchmark(id: &str) -> Result<Benchmark, ApiError> {
    http::get_json(&benchmark_path(id, "")).await
}

pub async fn fetch_assignments(id: &str) -> Result<BenchmarkAssignments, ApiError> {
    http::get_json(&benchmark_path(id, "/assignments")).await
}

/// Replace the benchmark's integration assignment
pub async fn assign(id: &str, request: &AssignRequest) -> Result<(), ApiError> {
    http::post_no_content(&benchmark_path(id, "/assign"), request).await
}
