//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a frozen comparison for exports.

pub mod comparison_report;
pub mod comparison_report_builder;
pub mod difference_table;

pub use comparison_report::{ApplicationView, ComparisonReport, SummaryView};
pub use comparison_report_builder::ComparisonReportBuilder;
pub use difference_table::{DifferenceRow, DifferenceTable, NOT_AVAILABLE};
