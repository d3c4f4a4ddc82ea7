pub mod a001_benchmark;
pub mod a002_control;
pub mod a003_plugin;
pub mod a004_integration;
pub mod a005_widget;
pub mod a006_named_query;
