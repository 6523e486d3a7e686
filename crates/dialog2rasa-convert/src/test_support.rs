use std::path::Path;

use dialog2rasa_core::config::ConversionContext;
use serde_json::{json, Value};
use tempfile::TempDir;

/// A throwaway Dialogflow export on disk.
pub struct AgentFixture {
    dir: TempDir,
}

impl AgentFixture {
    /// Empty agent with `intents/` and `entities/` directories.
    pub fn new() -> Self {
        let agent = Self::empty();
        std::fs::create_dir_all(agent.path().join("intents")).unwrap();
        std::fs::create_dir_all(agent.path().join("entities")).unwrap();
        agent
    }

    /// Agent directory with nothing in it.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn context(&self, language: &str) -> ConversionContext {
        ConversionContext::new(self.path(), language).unwrap()
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn write_json(&self, relative: &str, value: &Value) -> &Self {
        self.write(relative, &serde_json::to_string_pretty(value).unwrap())
    }

    pub fn examples(&self, intent: &str, language: &str, value: Value) -> &Self {
        self.write_json(&format!("intents/{intent}_usersays_{language}.json"), &value)
    }

    pub fn responses(&self, intent: &str, value: Value) -> &Self {
        self.write_json(&format!("intents/{intent}.json"), &value)
    }

    pub fn entries(&self, entity: &str, language: &str, value: Value) -> &Self {
        self.write_json(&format!("entities/{entity}_entries_{language}.json"), &value)
    }

    pub fn read_output(&self, language: &str, relative: &str) -> String {
        std::fs::read_to_string(self.path().join("output").join(language).join(relative))
            .unwrap()
    }

    /// A small German agent touching every output kind.
    pub fn mockup() -> Self {
        let agent = Self::new();
        agent
            .examples(
                "LiveIn",
                "de",
                json!([
                    {"data": [
                        {"text": "I live in ", "userDefined": false},
                        {"text": "Paris", "meta": "@City.name", "alias": "city", "userDefined": true}
                    ]},
                    {"data": [{"text": " Where do you live? "}]}
                ]),
            )
            .examples(
                "Greeting",
                "de",
                json!([{"data": [{"text": "Hallo"}]}, {"data": [{"text": "Guten Tag"}]}]),
            )
            .examples("Greeting", "en", json!([{"data": [{"text": "Hello"}]}]))
            .responses(
                "Greeting",
                json!({"responses": [{"messages": [
                    {"type": "0", "lang": "de", "speech": ["Hallo!", "Servus!"]},
                    {"type": "0", "lang": "en", "speech": ["Hello!"]}
                ]}]}),
            )
            .responses(
                "LiveIn",
                json!({"responses": [{"messages": [
                    {"type": "0", "lang": "en", "speech": ["Nice place."]}
                ]}]}),
            )
            .entries(
                "City",
                "de",
                json!([
                    {"value": "Paris", "synonyms": ["Paris"]},
                    {"value": "Berlin", "synonyms": ["Berlin"]}
                ]),
            )
            .entries(
                "Color",
                "de",
                json!([{"value": "red", "synonyms": ["red", "crimson"]}]),
            )
            .entries(
                "HomeAddress",
                "de",
                json!([
                    {"value": "home", "synonyms": ["@City.name @Street.name"]},
                    {"value": "work", "synonyms": ["office", "@City.name"]}
                ]),
            );
        agent
    }
}
