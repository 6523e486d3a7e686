pub mod context;

pub use context::{ConversionContext, DEFAULT_LANGUAGE, OUTPUT_SUBDIR};
