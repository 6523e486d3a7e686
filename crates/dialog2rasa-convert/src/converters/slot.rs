use std::collections::BTreeSet;

use dialog2rasa_core::buffer::ContentBuffers;
use dialog2rasa_core::config::ConversionContext;
use dialog2rasa_core::diagnostics::Diagnostics;

use super::Converter;
use crate::discover::{entity_files, file_stem};
use crate::error::ConvertError;
use crate::render;
use crate::report::ConversionReport;

/// Appends every entity as a text slot to an already written `domain.yml`.
pub struct SlotConverter<'a> {
    ctx: &'a ConversionContext,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> SlotConverter<'a> {
    pub fn new(ctx: &'a ConversionContext, diagnostics: &'a dyn Diagnostics) -> Self {
        Self { ctx, diagnostics }
    }

    fn entity_names(&self) -> Result<Vec<String>, ConvertError> {
        let names: BTreeSet<String> = entity_files(self.ctx)?
            .iter()
            .map(|file| self.ctx.entity_name(&file_stem(file)))
            .collect();
        Ok(names.into_iter().collect())
    }
}

impl Converter for SlotConverter<'_> {
    fn name(&self) -> &'static str {
        "slot"
    }

    fn convert(&self, report: &mut ConversionReport) -> Result<ContentBuffers, ConvertError> {
        let mut buffers = ContentBuffers::new();

        // The responses phase must have flushed the domain file already.
        if !self.ctx.domain_file.exists() {
            self.diagnostics.error(&format!(
                "Domain file {} not found.",
                self.ctx.domain_file.display()
            ));
            return Ok(buffers);
        }

        let names = self.entity_names()?;
        if names.is_empty() {
            return Ok(buffers);
        }

        buffers.append(&self.ctx.domain_file, &render::slot_section(&names));
        report.slots = names.len();
        self.diagnostics.warn(
            "Entities have been added as slots to the domain file. \
             Please review slot types and mappings.",
        );
        Ok(buffers)
    }
}
