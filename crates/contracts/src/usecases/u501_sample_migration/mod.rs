pub mod progress;

pub use progress::{MigrationStatus, MigrationSummary};

use crate::usecases::common::UseCaseMetadata;

pub struct SampleMigration;

impl UseCaseMetadata for SampleMigration {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "sample_migration"
    }

    fn display_name() -> &'static str {
        "Sample data migration"
    }

    fn description() -> &'static str {
        "Loads sample integrations and findings into the platform and reports progress"
    }
}
