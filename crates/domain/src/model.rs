pub mod report;

pub use report::{CountSummary, DirectoryReport, FileLineCount};
