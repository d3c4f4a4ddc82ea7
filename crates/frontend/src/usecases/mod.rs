pub mod u501_sample_migration;
