use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::normalize::normalize;

/// Language converted when none is requested.
pub const DEFAULT_LANGUAGE: &str = "de";

/// Deepest directory under the per-language output root, recreated on reset.
pub const OUTPUT_SUBDIR: &str = "data/nlu/lookup";

/// Everything one conversion run needs to know about where things live.
///
/// Built once per run and only ever shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionContext {
    pub agent_dir: PathBuf,
    pub language: String,
    pub agent_name: String,
    pub intents_dir: PathBuf,
    pub entities_dir: PathBuf,
    pub output_dir: PathBuf,
    pub domain_file: PathBuf,
    pub nlu_dir: PathBuf,
    pub nlu_file: PathBuf,
    pub lookup_dir: PathBuf,
}

impl ConversionContext {
    pub fn new(agent_dir: impl Into<PathBuf>, language: &str) -> Result<Self, CoreError> {
        validate_language(language)?;
        let agent_dir = agent_dir.into();
        let output_dir = agent_dir.join("output").join(language);
        let nlu_dir = output_dir.join("data").join("nlu");

        Ok(Self {
            agent_name: agent_name_from_dir(&agent_dir),
            intents_dir: agent_dir.join("intents"),
            entities_dir: agent_dir.join("entities"),
            domain_file: output_dir.join("domain.yml"),
            nlu_file: nlu_dir.join("nlu.yml"),
            lookup_dir: nlu_dir.join("lookup"),
            nlu_dir,
            output_dir,
            language: language.to_string(),
            agent_dir,
        })
    }

    /// Stem suffix of training example files, e.g. `_usersays_de`.
    pub fn example_suffix(&self) -> String {
        format!("_usersays_{}", self.language)
    }

    /// Stem suffix of entity entry files, e.g. `_entries_de`.
    pub fn entries_suffix(&self) -> String {
        format!("_entries_{}", self.language)
    }

    /// Intent name for an example file stem: suffix removed, then normalized.
    pub fn intent_name(&self, stem: &str) -> String {
        let suffix = self.example_suffix();
        normalize(stem.strip_suffix(suffix.as_str()).unwrap_or(stem))
    }

    /// Entity name for an entries file stem: normalized, then suffix removed.
    pub fn entity_name(&self, stem: &str) -> String {
        let normalized = normalize(stem);
        let suffix = normalize(&self.entries_suffix());
        match normalized.strip_suffix(suffix.as_str()) {
            Some(name) => name.to_string(),
            None => normalized,
        }
    }

    pub fn lookup_file(&self, entity: &str) -> PathBuf {
        self.lookup_dir.join(format!("{entity}.txt"))
    }

    pub fn compound_file(&self, entity: &str) -> PathBuf {
        self.nlu_dir.join(format!("__compound__{entity}.yml"))
    }
}

fn validate_language(language: &str) -> Result<(), CoreError> {
    if language.is_empty() {
        return Err(CoreError::Config("language code must not be empty".into()));
    }
    if !language
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(CoreError::Config(format!(
            "invalid language code '{language}'"
        )));
    }
    Ok(())
}

/// `Agent-My-Bot` → `my_bot`.
fn agent_name_from_dir(agent_dir: &Path) -> String {
    agent_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
        .replace("Agent-", "")
        .replace('-', "_")
        .to_lowercase()
}
