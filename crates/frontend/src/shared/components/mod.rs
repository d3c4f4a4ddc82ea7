pub mod filter_panel;
pub mod list_feedback;
pub mod pagination_controls;
pub mod progress_panel;
pub mod stat_card;
pub mod status_badge;
pub mod table_checkbox;
