use serde_json::{Map, Value};
use std::collections::HashMap;

use super::{coerce_int, Points};

/// Tag marking a field whose recorded number is already a point count.
pub const BOOLEAN_WITH_VALUE: &str = "Boolean with Value";

const DEFAULT_RAW_TABLE_CAP: usize = 50;

/// How a single rubric field scores the matching recorded field.
#[derive(Debug, Clone, PartialEq)]
pub enum RubricEntry {
    /// Bare number: awarded when a boolean flag is set.
    Flat(Points),
    /// Mapping with a numeric `Value`: per made action or per set flag.
    Weighted(Points),
    /// Mapping tagged `"Boolean with Value"`; recorded numbers count at face value.
    BooleanWithValue(Option<Points>),
    /// Anything else. Only bare recorded numbers score against it.
    Unvalued,
}

impl RubricEntry {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map(Self::Flat).unwrap_or(Self::Unvalued),
            Value::Object(map) => {
                let weight = map.get("Value").and_then(Value::as_f64);
                if is_boolean_with_value(map) {
                    Self::BooleanWithValue(weight)
                } else {
                    weight.map(Self::Weighted).unwrap_or(Self::Unvalued)
                }
            }
            _ => Self::Unvalued,
        }
    }

    /// The numeric `Value` carried by a mapping entry.
    pub fn weight(&self) -> Option<Points> {
        match self {
            Self::Weighted(weight) => Some(*weight),
            Self::BooleanWithValue(weight) => *weight,
            Self::Flat(_) | Self::Unvalued => None,
        }
    }
}

fn is_boolean_with_value(map: &Map<String, Value>) -> bool {
    ["Type", "type"]
        .iter()
        .any(|key| map.get(*key).and_then(Value::as_str) == Some(BOOLEAN_WITH_VALUE))
}

/// Field name to entry for one match phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseRubric {
    entries: HashMap<String, RubricEntry>,
}

impl PhaseRubric {
    pub fn from_value(value: Option<&Value>) -> Self {
        let entries = value
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(field, entry)| (field.clone(), RubricEntry::from_value(entry)))
                    .collect()
            })
            .unwrap_or_default();

        Self { entries }
    }

    pub fn get(&self, field: &str) -> Option<&RubricEntry> {
        self.entries.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Scoring for `match_form.endgame.final_status`.
#[derive(Debug, Clone, PartialEq)]
pub enum EndgameRubric {
    /// Parallel `options`/`values` arrays. Non-string options never match;
    /// values without an integer reading are kept as `None`.
    Indexed {
        options: Vec<Option<String>>,
        values: Vec<Option<Points>>,
    },
    /// Legacy form: status string to `{ "Value": n }`.
    ByStatus(HashMap<String, Option<Points>>),
}

impl Default for EndgameRubric {
    fn default() -> Self {
        Self::ByStatus(HashMap::new())
    }
}

impl EndgameRubric {
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(map) = value.and_then(Value::as_object) else {
            return Self::default();
        };

        if map.contains_key("options") && map.contains_key("values") {
            let options = array_of(map.get("options"))
                .iter()
                .map(|option| option.as_str().map(str::to_string))
                .collect();
            let values = array_of(map.get("values"))
                .iter()
                .map(coerce_int)
                .collect();
            return Self::Indexed { options, values };
        }

        let statuses = map
            .iter()
            .map(|(status, entry)| {
                let points = entry
                    .as_object()
                    .and_then(|entry| entry.get("Value"))
                    .and_then(coerce_int);
                (status.clone(), points)
            })
            .collect();

        Self::ByStatus(statuses)
    }
}

fn array_of(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// One entry of the admin-configured `rankings_options` table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOption {
    pub name: String,
    pub description: String,
}

/// Typed view over the administrator's configuration document.
///
/// Parsing never fails: missing or mistyped nodes become empty rubrics so a
/// half-edited configuration still scores whatever it can.
#[derive(Debug, Clone, PartialEq)]
pub struct Rubric {
    pub auto_period: PhaseRubric,
    pub teleop_period: PhaseRubric,
    pub final_status: EndgameRubric,
    pub rankings_options: Vec<RankingOption>,
    pub raw_table_cap: usize,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            auto_period: PhaseRubric::default(),
            teleop_period: PhaseRubric::default(),
            final_status: EndgameRubric::default(),
            rankings_options: Vec::new(),
            raw_table_cap: DEFAULT_RAW_TABLE_CAP,
        }
    }
}

impl Rubric {
    pub fn from_value(document: &Value) -> Self {
        let match_form = document.get("match_form");

        let final_status = match_form
            .and_then(|form| form.get("endgame"))
            .and_then(|endgame| endgame.get("final_status"));

        let rankings_options = document
            .get("rankings_options")
            .and_then(Value::as_object)
            .map(|options| {
                options
                    .iter()
                    .map(|(name, option)| RankingOption {
                        name: name.clone(),
                        description: option
                            .get("description")
                            .and_then(Value::as_str)
                            .unwrap_or(name.as_str())
                            .to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let raw_table_cap = document
            .get("limits")
            .and_then(|limits| limits.get("raw_table_cap"))
            .and_then(Value::as_u64)
            .map(|cap| cap as usize)
            .unwrap_or(DEFAULT_RAW_TABLE_CAP);

        Self {
            auto_period: PhaseRubric::from_value(match_form.and_then(|f| f.get("auto_period"))),
            teleop_period: PhaseRubric::from_value(
                match_form.and_then(|f| f.get("teleop_period")),
            ),
            final_status: EndgameRubric::from_value(final_status),
            rankings_options,
            raw_table_cap,
        }
    }

    pub fn ranking_option(&self, name: &str) -> Option<&RankingOption> {
        self.rankings_options.iter().find(|option| option.name == name)
    }

    pub fn default_ranking_option(&self) -> Option<&RankingOption> {
        self.rankings_options.first()
    }
}
