//! Benchmark details: metadata, integration assignment, the benchmark's
//! controls and the report of a compliance job.
//!
//! - view_model.rs: loading and the assignment command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::BenchmarkDetails;
pub use view_model::BenchmarkDetailsViewModel;
