use std::path::PathBuf;

use dialog2rasa_core::config::ConversionContext;
use serde::Serialize;

/// What a conversion run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub agent_name: String,
    pub language: String,
    pub output_dir: PathBuf,
    pub intents: usize,
    pub examples: usize,
    pub response_templates: usize,
    pub synonym_blocks: usize,
    pub lookup_tables: usize,
    pub compound_entities: usize,
    pub slots: usize,
    /// Every file written, in first-write order.
    pub files: Vec<PathBuf>,
}

impl ConversionReport {
    pub fn new(ctx: &ConversionContext) -> Self {
        Self {
            agent_name: ctx.agent_name.clone(),
            language: ctx.language.clone(),
            output_dir: ctx.output_dir.clone(),
            ..Default::default()
        }
    }

    pub(crate) fn record_file(&mut self, path: PathBuf) {
        if !self.files.contains(&path) {
            self.files.push(path);
        }
    }

    /// Items that need a human to look at them before training.
    pub fn needs_review(&self) -> bool {
        self.compound_entities > 0 || self.slots > 0
    }
}
