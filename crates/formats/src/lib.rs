pub mod grade_file;
pub mod roster_ingest;

pub use grade_file::*;
pub use roster_ingest::*;
