pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod list_loader;
pub mod page_frame;
pub mod polling;
pub mod preferences;
