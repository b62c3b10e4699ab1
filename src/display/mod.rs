//! Display formatting for terminal output
//!
//! Provides utilities for formatting report data for terminal display,
//! including colors, bars, and separators.

pub mod report;

pub use report::{
    double_separator, format_bar, format_money_colored, format_percentage, separator,
};
