pub mod api;
pub mod date_range;
