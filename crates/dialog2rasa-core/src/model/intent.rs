use serde::{Deserialize, Serialize};

/// One training example from a `<Intent>_usersays_<lang>.json` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExampleRecord {
    pub data: Vec<Fragment>,
}

/// A piece of an example, optionally tagged with an entity reference such as `@City.name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fragment {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

impl Fragment {
    /// Entity id used in inline annotations.
    ///
    /// Both `@` and `.` are dropped, so `@City.name` becomes `Cityname` and
    /// the role is folded into the entity name.
    pub fn entity_id(&self) -> Option<String> {
        self.meta
            .as_deref()
            .map(|meta| meta.chars().filter(|c| *c != '@' && *c != '.').collect())
    }
}
