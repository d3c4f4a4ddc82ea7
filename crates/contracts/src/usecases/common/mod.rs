//! Shared pieces of server-side job use cases

pub mod usecase_metadata;

pub use usecase_metadata::UseCaseMetadata;
