//! Rasa YAML/text fragments.
//!
//! Everything here is a pure function from source records to output text.
//! Converters decide where the text goes.

use dialog2rasa_core::model::{EntryRecord, ExampleRecord};
use dialog2rasa_core::RASA_FORMAT_VERSION;

/// Header opening every NLU training file.
pub fn nlu_header() -> String {
    format!("version: \"{RASA_FORMAT_VERSION}\"\n\nnlu:\n")
}

/// Header for a review-only compound entity file.
pub fn compound_header() -> String {
    format!("# Compound entity: Manual adaptation needed for Rasa\n{}", nlu_header())
}

/// One training example with entity fragments in `[text](entity)` form, trimmed.
pub fn example_line(record: &ExampleRecord) -> String {
    let mut line = String::new();
    for fragment in &record.data {
        match fragment.entity_id() {
            Some(entity) => {
                line.push('[');
                line.push_str(&fragment.text);
                line.push_str("](");
                line.push_str(&entity);
                line.push(')');
            }
            None => line.push_str(&fragment.text),
        }
    }
    line.trim().to_string()
}

pub fn intent_block(intent: &str, examples: &[String]) -> String {
    let mut out = format!("  - intent: {intent}\n    examples: |\n");
    push_examples(&mut out, examples.iter().map(String::as_str));
    out.push('\n');
    out
}

pub fn synonym_block(entry: &EntryRecord) -> String {
    let mut out = format!("  - synonym: {}\n    examples: |\n", entry.value);
    push_examples(&mut out, entry.synonyms.iter().map(String::as_str));
    out.push('\n');
    out
}

pub fn lookup_lines(entry: &EntryRecord) -> String {
    let mut out = String::new();
    for value in entry.lookup_values() {
        out.push_str(value);
        out.push('\n');
    }
    out
}

pub fn responses_header() -> String {
    "responses:\n".to_string()
}

/// `utter_<intent>` template with one quoted text line per alternative.
pub fn utter_template(intent: &str, speech: &[String]) -> String {
    let mut out = format!("  utter_{intent}:\n");
    for text in speech {
        out.push_str(&format!("    - text: {}\n", yaml_quote(text)));
    }
    out.push('\n');
    out
}

/// Review marker, `entities:` list and `slots:` block for the domain file.
pub fn slot_section(entities: &[String]) -> String {
    let mut out = String::from(
        "# Review needed: Dialogflow entities were mapped to Rasa entities and slots. \
         Confirm the types and mappings.\nentities:\n",
    );
    for entity in entities {
        out.push_str(&format!("  - {entity}\n"));
    }
    out.push_str("\nslots:\n");
    let slots: Vec<String> = entities
        .iter()
        .map(|entity| {
            format!(
                "  {entity}:\n    type: text\n    influence_conversation: false\n    \
                 mappings:\n    - type: from_entity\n      entity: {entity}\n"
            )
        })
        .collect();
    out.push_str(&slots.join("\n"));
    out.push('\n');
    out
}

fn push_examples<'a>(out: &mut String, examples: impl Iterator<Item = &'a str>) {
    for example in examples {
        out.push_str("      - ");
        out.push_str(example);
        out.push('\n');
    }
}

/// Double-quoted YAML scalar.
fn yaml_quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
