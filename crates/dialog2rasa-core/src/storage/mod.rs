pub mod fs;
pub mod sink;

pub use fs::{append_to_file, read_json, reset_directory};
pub use sink::{ContentSink, FsSink};
