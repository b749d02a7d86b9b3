//! Application layer - use cases composed from domain repositories

pub mod dto;
pub mod services;

pub use services::{report_to_csv, ReportService};
