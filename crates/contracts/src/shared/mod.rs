pub mod api_error;
pub mod config;
pub mod filter_query;
pub mod list;
pub mod polling;
