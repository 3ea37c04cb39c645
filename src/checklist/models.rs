use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_TITLE: &str = "Checklist";

/// A shared checklist shown on the home page, keyed by its config entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub title: String,
    pub options: Vec<Value>,
    pub checked: Vec<Value>,
}

impl ChecklistItem {
    /// The empty checklist configured at `Home.body[key]`, if that entry has
    /// `"type": "checklist"`.
    pub fn from_config(config: &Value, key: &str) -> Option<Self> {
        let entry = config.get("Home")?.get("body")?.get(key)?;
        if entry.get("type").and_then(Value::as_str) != Some("checklist") {
            return None;
        }

        Some(Self {
            title: entry
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_TITLE)
                .to_string(),
            options: entry
                .get("options")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
            checked: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChecklistUpdate {
    #[serde(default)]
    pub checked: Vec<Value>,
}
