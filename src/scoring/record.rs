use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Schema-free section of a match record.
pub type Section = Map<String, Value>;

/// Phases a scouter can count scoring elements in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Auto,
    Teleop,
}

/// One team's observed performance in one match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default, deserialize_with = "object_or_empty")]
    pub pre_match: Section,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub auto: Section,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub teleop: Section,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub endgame: Section,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub misc: Section,
}

impl MatchRecord {
    pub fn phase(&self, phase: Phase) -> &Section {
        match phase {
            Phase::Auto => &self.auto,
            Phase::Teleop => &self.teleop,
        }
    }

    /// `pre_match.team_number` rendered as text, whether scouted as a string
    /// or a number.
    pub fn team_number(&self) -> Option<String> {
        match self.pre_match.get("team_number")? {
            Value::String(team) => Some(team.clone()),
            Value::Number(team) => Some(team.to_string()),
            _ => None,
        }
    }
}

/// Sections that arrive as anything other than an object are treated as empty.
pub fn object_or_empty<'de, D>(deserializer: D) -> Result<Section, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

/// [`object_or_empty`] for partial updates, where a present key replaces.
pub fn some_object_or_empty<'de, D>(deserializer: D) -> Result<Option<Section>, D::Error>
where
    D: Deserializer<'de>,
{
    object_or_empty(deserializer).map(Some)
}

/// Integer reading of a recorded count or configured value.
///
/// Numbers truncate toward zero, booleans count as 1 or 0 and integer strings
/// parse. Anything else has no integer reading.
pub fn coerce_int(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().map(f64::trunc),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<i64>().ok().map(|n| n as f64),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Python-style truthiness of a recorded flag.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
