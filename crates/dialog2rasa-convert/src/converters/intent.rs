use dialog2rasa_core::buffer::ContentBuffers;
use dialog2rasa_core::config::ConversionContext;
use dialog2rasa_core::diagnostics::Diagnostics;
use dialog2rasa_core::model::ExampleRecord;
use dialog2rasa_core::storage::read_json;

use super::Converter;
use crate::discover::{example_files, file_stem};
use crate::error::ConvertError;
use crate::render;
use crate::report::ConversionReport;

/// Turns `*_usersays_<lang>.json` files into `intent:` blocks of `nlu.yml`.
pub struct IntentConverter<'a> {
    ctx: &'a ConversionContext,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> IntentConverter<'a> {
    pub fn new(ctx: &'a ConversionContext, diagnostics: &'a dyn Diagnostics) -> Self {
        Self { ctx, diagnostics }
    }
}

impl Converter for IntentConverter<'_> {
    fn name(&self) -> &'static str {
        "intent"
    }

    fn convert(&self, report: &mut ConversionReport) -> Result<ContentBuffers, ConvertError> {
        let mut buffers = ContentBuffers::new();
        buffers.append(&self.ctx.nlu_file, &render::nlu_header());

        for file in example_files(self.ctx)? {
            let intent = self.ctx.intent_name(&file_stem(&file));
            let records: Vec<ExampleRecord> = read_json(&file)?;
            let examples: Vec<String> = records.iter().map(render::example_line).collect();

            self.diagnostics.debug(&format!(
                "Intent '{intent}': {} examples",
                examples.len()
            ));
            buffers.append(&self.ctx.nlu_file, &render::intent_block(&intent, &examples));
            report.intents += 1;
            report.examples += examples.len();
        }

        self.diagnostics.info(&format!(
            "Converted {} intents into '{}'.",
            report.intents,
            self.ctx.nlu_file.display()
        ));
        Ok(buffers)
    }
}
