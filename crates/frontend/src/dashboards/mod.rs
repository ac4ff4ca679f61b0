pub mod d100_period_overview;
pub mod d101_period_report;
