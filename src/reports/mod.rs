//! Financial reports
//!
//! Report types pair a `generate` constructor with `format_terminal` and
//! `export_csv` renderings.

pub mod dashboard;
pub mod forecast;

pub use dashboard::DashboardReport;
pub use forecast::ForecastReport;
