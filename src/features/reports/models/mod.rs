pub mod report;

pub use report::{ProjectReport, ReportStatus};
