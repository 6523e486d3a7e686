use serde::{Deserialize, Serialize};

/// Top level of an `<Intent>.json` definition file. Only the response part is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResponseFile {
    #[serde(default)]
    pub responses: Vec<Response>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Response {
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Message {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub speech: Option<Speech>,
}

/// Dialogflow stores speech either as one string or as a list of alternatives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Speech {
    One(String),
    Many(Vec<String>),
}

impl Speech {
    pub fn alternatives(&self) -> &[String] {
        match self {
            Self::One(s) => std::slice::from_ref(s),
            Self::Many(v) => v,
        }
    }
}

impl Message {
    /// Speech alternatives if this message is in `language`, otherwise empty.
    pub fn speech_for(&self, language: &str) -> &[String] {
        match (&self.lang, &self.speech) {
            (Some(lang), Some(speech)) if lang == language => speech.alternatives(),
            _ => &[],
        }
    }
}
