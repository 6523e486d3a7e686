use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Core error: {0}")]
    Core(#[from] dialog2rasa_core::error::CoreError),

    #[error("No {kind} files for language '{language}' found in {dir}")]
    MissingSources {
        kind: &'static str,
        language: String,
        dir: PathBuf,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}
