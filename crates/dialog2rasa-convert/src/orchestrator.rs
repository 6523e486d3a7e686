use dialog2rasa_core::config::{ConversionContext, OUTPUT_SUBDIR};
use dialog2rasa_core::diagnostics::Diagnostics;
use dialog2rasa_core::storage::{reset_directory, ContentSink};

use crate::converters::{
    Converter, EntityConverter, IntentConverter, SlotConverter, UtteranceConverter,
};
use crate::discover::{entity_files, example_files};
use crate::error::ConvertError;
use crate::report::ConversionReport;

/// Drives one Dialogflow → Rasa conversion for a single language.
pub struct Orchestrator<'a, S: ContentSink> {
    ctx: &'a ConversionContext,
    diagnostics: &'a dyn Diagnostics,
    sink: S,
}

impl<'a, S: ContentSink> Orchestrator<'a, S> {
    pub fn new(ctx: &'a ConversionContext, diagnostics: &'a dyn Diagnostics, sink: S) -> Self {
        Self {
            ctx,
            diagnostics,
            sink,
        }
    }

    /// Check that the agent has training examples and entities for the
    /// configured language. Touches nothing on disk.
    pub fn validate_sources(&self) -> Result<(), ConvertError> {
        if example_files(self.ctx)?.is_empty() {
            return Err(self.missing("intent example", &self.ctx.intents_dir));
        }
        if entity_files(self.ctx)?.is_empty() {
            return Err(self.missing("entity entries", &self.ctx.entities_dir));
        }
        Ok(())
    }

    /// Validate, reset the output tree, then run every phase and flush its
    /// output before the next one starts.
    ///
    /// Phase order matters: entity synonyms append to the `nlu.yml` written
    /// by the intent phase, and slots append to the `domain.yml` written by
    /// the utterance phase.
    pub fn run(&mut self) -> Result<ConversionReport, ConvertError> {
        self.validate_sources()?;

        self.diagnostics.info(&format!(
            "Starting conversion of agent '{}' for language '{}'...",
            self.ctx.agent_name, self.ctx.language
        ));
        reset_directory(&self.ctx.output_dir, OUTPUT_SUBDIR)?;

        let mut report = ConversionReport::new(self.ctx);
        let phases: [Box<dyn Converter + 'a>; 4] = [
            Box::new(IntentConverter::new(self.ctx, self.diagnostics)),
            Box::new(UtteranceConverter::new(self.ctx, self.diagnostics)),
            Box::new(EntityConverter::new(self.ctx, self.diagnostics)),
            Box::new(SlotConverter::new(self.ctx, self.diagnostics)),
        ];

        for phase in &phases {
            let buffers = phase.convert(&mut report)?;
            for (path, _) in buffers.iter() {
                report.record_file(path.to_path_buf());
            }
            let written = buffers.flush(&mut self.sink)?;
            self.diagnostics
                .debug(&format!("Phase '{}' wrote {written} files.", phase.name()));
        }

        self.diagnostics.info(&format!(
            "Conversion completed. The output files can be found in '{}'",
            self.ctx.output_dir.display()
        ));
        Ok(report)
    }

    fn missing(&self, kind: &'static str, dir: &std::path::Path) -> ConvertError {
        ConvertError::MissingSources {
            kind,
            language: self.ctx.language.clone(),
            dir: dir.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::AgentFixture;
    use dialog2rasa_core::diagnostics::RecordingDiagnostics;
    use dialog2rasa_core::storage::FsSink;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    fn run(agent: &AgentFixture, language: &str) -> (Result<ConversionReport, ConvertError>, RecordingDiagnostics) {
        let ctx = agent.context(language);
        let diag = RecordingDiagnostics::new();
        let result = Orchestrator::new(&ctx, &diag, FsSink).run();
        (result, diag)
    }

    /// Relative path → content for every file under `root`.
    fn snapshot(root: &Path) -> BTreeMap<PathBuf, String> {
        let mut files = BTreeMap::new();
        let mut stack = vec![root.to_path_buf()];
        while let Some(dir) = stack.pop() {
            for entry in std::fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    let rel = path.strip_prefix(root).unwrap().to_path_buf();
                    files.insert(rel, std::fs::read_to_string(&path).unwrap());
                }
            }
        }
        files
    }

    #[test]
    fn test_full_conversion_layout() {
        let agent = AgentFixture::mockup();
        let (result, diag) = run(&agent, "de");
        let report = result.unwrap();

        assert_eq!(
            agent.read_output("de", "data/nlu/nlu.yml"),
            "version: \"3.1\"\n\nnlu:\n\
             \x20 - intent: greeting\n    examples: |\n      - Hallo\n      - Guten Tag\n\n\
             \x20 - intent: live_in\n    examples: |\n      - I live in [Paris](Cityname)\n      - Where do you live?\n\n\
             \x20 - synonym: red\n    examples: |\n      - red\n      - crimson\n\n"
        );
        assert_eq!(
            agent.read_output("de", "data/nlu/lookup/city.txt"),
            "Paris\nBerlin\n"
        );
        let compound = agent.read_output("de", "data/nlu/__compound__home_address.yml");
        assert!(compound.starts_with(
            "# Compound entity: Manual adaptation needed for Rasa\nversion: \"3.1\"\n\nnlu:\n"
        ));

        let domain = agent.read_output("de", "domain.yml");
        assert!(domain.starts_with(
            "responses:\n  utter_greeting:\n    - text: \"Hallo!\"\n    - text: \"Servus!\"\n\n# Review needed"
        ));
        assert!(!domain.contains("utter_live_in"));
        assert!(domain.contains("entities:\n  - city\n  - color\n  - home_address\n"));

        assert_eq!(report.intents, 2);
        assert_eq!(report.response_templates, 1);
        assert_eq!(report.synonym_blocks, 1);
        assert_eq!(report.lookup_tables, 1);
        assert_eq!(report.compound_entities, 1);
        assert_eq!(report.slots, 3);
        assert_eq!(report.files.len(), 4);
        assert!(report.needs_review());

        // compound entity + slot review
        assert_eq!(diag.warnings().len(), 2);
        assert!(diag.errors().is_empty());
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let agent = AgentFixture::mockup();
        run(&agent, "de").0.unwrap();
        let first = snapshot(&agent.path().join("output/de"));
        run(&agent, "de").0.unwrap();
        let second = snapshot(&agent.path().join("output/de"));

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_missing_language_aborts_without_output() {
        let agent = AgentFixture::new();
        agent
            .examples("Greeting", "en", json!([{"data": [{"text": "Hello"}]}]))
            .entries("City", "en", json!([{"value": "Paris", "synonyms": ["Paris"]}]));

        let (result, _) = run(&agent, "de");

        match result {
            Err(ConvertError::MissingSources { kind, language, .. }) => {
                assert_eq!(kind, "intent example");
                assert_eq!(language, "de");
            }
            other => panic!("expected MissingSources, got {other:?}"),
        }
        assert!(!agent.path().join("output/de").exists());
    }

    #[test]
    fn test_missing_entities_aborts() {
        let agent = AgentFixture::new();
        agent.examples("Greeting", "de", json!([{"data": [{"text": "Hallo"}]}]));

        let (result, _) = run(&agent, "de");

        assert!(matches!(
            result,
            Err(ConvertError::MissingSources { kind: "entity entries", .. })
        ));
        assert!(!agent.path().join("output").exists());
    }

    #[test]
    fn test_stale_output_is_replaced_and_other_languages_kept() {
        let agent = AgentFixture::mockup();
        agent
            .write("output/de/stale.yml", "old")
            .write("output/en/domain.yml", "responses:\n");

        run(&agent, "de").0.unwrap();

        assert!(!agent.path().join("output/de/stale.yml").exists());
        assert_eq!(agent.read_output("en", "domain.yml"), "responses:\n");
    }

    #[test]
    fn test_malformed_entry_aborts_run() {
        let agent = AgentFixture::mockup();
        agent.entries("Broken", "de", json!([{"value": "x"}]));

        let (result, _) = run(&agent, "de");
        assert!(result.is_err());
    }
}
