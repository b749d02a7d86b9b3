//! Application services

mod report;
mod report_csv;

pub use report::ReportService;
pub use report_csv::report_to_csv;
