//! Custom widgets shared by the list and detail views

pub mod sparkline;

pub use sparkline::SeriesSparkline;
