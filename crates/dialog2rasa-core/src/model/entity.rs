use serde::{Deserialize, Serialize};

/// One row of a `<Entity>_entries_<lang>.json` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryRecord {
    pub value: String,
    pub synonyms: Vec<String>,
}

/// Where an entry ends up in the Rasa project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityClass {
    /// References another entity (`@Other`); written to a review-only compound file.
    Compound,
    /// Several spellings of one value; written as a `synonym:` block.
    Synonym,
    /// A single value; written to a lookup table.
    Lookup,
}

impl EntryRecord {
    /// Classify this entry. Compound wins over synonym, synonym over lookup.
    pub fn classify(&self) -> EntityClass {
        if self.synonyms.iter().any(|s| s.contains('@')) {
            EntityClass::Compound
        } else if self.synonyms.len() > 1 {
            EntityClass::Synonym
        } else {
            EntityClass::Lookup
        }
    }

    /// Values written to a lookup table. An entry without synonyms
    /// contributes its canonical value.
    pub fn lookup_values(&self) -> Vec<&str> {
        if self.synonyms.is_empty() {
            vec![self.value.as_str()]
        } else {
            self.synonyms.iter().map(String::as_str).collect()
        }
    }
}
