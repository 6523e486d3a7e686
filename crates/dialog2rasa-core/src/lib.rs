pub mod buffer;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod normalize;
pub mod storage;

/// Rasa training data format version written into every YAML header.
pub const RASA_FORMAT_VERSION: &str = "3.1";
