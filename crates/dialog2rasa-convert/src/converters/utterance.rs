use dialog2rasa_core::buffer::ContentBuffers;
use dialog2rasa_core::config::ConversionContext;
use dialog2rasa_core::diagnostics::Diagnostics;
use dialog2rasa_core::model::ResponseFile;
use dialog2rasa_core::storage::read_json;

use super::Converter;
use crate::discover::{file_stem, response_files};
use crate::error::ConvertError;
use crate::render;
use crate::report::ConversionReport;

/// Maps intent responses in the configured language onto `utter_*` templates in `domain.yml`.
pub struct UtteranceConverter<'a> {
    ctx: &'a ConversionContext,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> UtteranceConverter<'a> {
    pub fn new(ctx: &'a ConversionContext, diagnostics: &'a dyn Diagnostics) -> Self {
        Self { ctx, diagnostics }
    }

    fn templates_for(&self, intent: &str, file: &ResponseFile) -> Vec<String> {
        file.responses
            .iter()
            .flat_map(|response| &response.messages)
            .map(|message| message.speech_for(&self.ctx.language))
            .filter(|speech| !speech.is_empty())
            .map(|speech| render::utter_template(intent, speech))
            .collect()
    }
}

impl Converter for UtteranceConverter<'_> {
    fn name(&self) -> &'static str {
        "utterance"
    }

    fn convert(&self, report: &mut ConversionReport) -> Result<ContentBuffers, ConvertError> {
        let mut buffers = ContentBuffers::new();
        buffers.append(&self.ctx.domain_file, &render::responses_header());

        for file in response_files(self.ctx)? {
            let intent = self.ctx.intent_name(&file_stem(&file));
            let definition: ResponseFile = read_json(&file)?;
            let templates = self.templates_for(&intent, &definition);

            if templates.is_empty() {
                self.diagnostics.debug(&format!(
                    "No '{}' response for intent '{intent}', skipping.",
                    self.ctx.language
                ));
                continue;
            }
            for template in &templates {
                buffers.append(&self.ctx.domain_file, template);
            }
            report.response_templates += templates.len();
        }

        self.diagnostics.info(&format!(
            "Converted {} response templates into '{}'.",
            report.response_templates,
            self.ctx.domain_file.display()
        ));
        Ok(buffers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::AgentFixture;
    use dialog2rasa_core::diagnostics::RecordingDiagnostics;
    use serde_json::json;

    #[test]
    fn test_only_configured_language_becomes_templates() {
        let agent = AgentFixture::mockup();
        let ctx = agent.context("de");
        let diag = RecordingDiagnostics::new();
        let mut report = ConversionReport::new(&ctx);

        let buffers = UtteranceConverter::new(&ctx, &diag)
            .convert(&mut report)
            .unwrap();

        assert_eq!(
            buffers.get(&ctx.domain_file).unwrap(),
            "responses:\n  utter_greeting:\n    - text: \"Hallo!\"\n    - text: \"Servus!\"\n\n"
        );
        assert_eq!(report.response_templates, 1);
        assert!(diag.errors().is_empty());
    }

    #[test]
    fn test_missing_language_is_not_an_error() {
        let agent = AgentFixture::mockup();
        let ctx = agent.context("fr");
        let diag = RecordingDiagnostics::new();

        let buffers = UtteranceConverter::new(&ctx, &diag)
            .convert(&mut ConversionReport::new(&ctx))
            .unwrap();

        assert_eq!(buffers.get(&ctx.domain_file), Some("responses:\n"));
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_single_string_speech_and_empty_messages() {
        let agent = AgentFixture::new();
        agent.responses(
            "OrderStatus",
            json!({"responses": [
                {"messages": [{"type": "0", "lang": "de", "speech": "Ist unterwegs."}]},
                {"messages": [{"type": "0", "lang": "de", "speech": []}]},
                {"messages": [{"type": 4, "lang": "de", "payload": {}}]}
            ]}),
        );
        let ctx = agent.context("de");
        let diag = RecordingDiagnostics::new();
        let mut report = ConversionReport::new(&ctx);

        let buffers = UtteranceConverter::new(&ctx, &diag)
            .convert(&mut report)
            .unwrap();

        assert_eq!(
            buffers.get(&ctx.domain_file).unwrap(),
            "responses:\n  utter_order_status:\n    - text: \"Ist unterwegs.\"\n\n"
        );
        assert_eq!(report.response_templates, 1);
    }
}
