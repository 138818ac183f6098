pub mod export;
pub mod reader;

pub use export::{export_findings, write_findings};
pub use reader::{read_records, read_records_from, read_submission};
