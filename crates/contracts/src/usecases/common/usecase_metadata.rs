/// Identity of a long-running use case the console can trigger and watch
pub trait UseCaseMetadata {
    /// Index such as "u501"
    fn usecase_index() -> &'static str;

    /// Technical name such as "sample_migration"
    fn usecase_name() -> &'static str;

    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_sample_migration"; also used as the DOM id of the use case view
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_sample_migration::SampleMigration;

    #[test]
    fn test_full_name() {
        assert_eq!(SampleMigration::full_name(), "u501_sample_migration");
    }
}
