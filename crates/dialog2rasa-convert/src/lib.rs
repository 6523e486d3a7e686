pub mod converters;
pub mod discover;
pub mod error;
pub mod orchestrator;
pub mod render;
pub mod report;

pub use error::ConvertError;
pub use orchestrator::Orchestrator;
pub use report::ConversionReport;

#[cfg(test)]
pub(crate) mod test_support;
