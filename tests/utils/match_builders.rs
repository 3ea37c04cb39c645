use serde_json::{json, Map, Value};

use scouting::MatchRecord;

/// Fluent builder for scouted match records.
#[derive(Debug, Clone, Default)]
pub struct MatchBuilder {
    pre_match: Map<String, Value>,
    auto: Map<String, Value>,
    teleop: Map<String, Value>,
    endgame: Map<String, Value>,
    misc: Map<String, Value>,
}

#[allow(dead_code)]
impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, team: u32) -> Self {
        self.pre_match.insert("team_number".into(), json!(team));
        self
    }

    pub fn match_number(mut self, number: u32) -> Self {
        self.pre_match.insert("match_number".into(), json!(number));
        self
    }

    pub fn auto(mut self, field: &str, value: Value) -> Self {
        self.auto.insert(field.into(), value);
        self
    }

    pub fn teleop(mut self, field: &str, value: Value) -> Self {
        self.teleop.insert(field.into(), value);
        self
    }

    pub fn auto_coral(self, level: &str, made: u32, missed: u32) -> Self {
        self.auto(level, json!({"Made": made, "Missed": missed}))
    }

    pub fn teleop_coral(self, level: &str, made: u32, missed: u32) -> Self {
        self.teleop(level, json!({"Made": made, "Missed": missed}))
    }

    pub fn leave(self) -> Self {
        self.auto("leave", json!(true))
    }

    pub fn final_status(mut self, status: &str) -> Self {
        self.endgame.insert("final_status".into(), json!(status));
        self
    }

    pub fn died(mut self) -> Self {
        self.misc.insert("died".into(), json!(true));
        self
    }

    pub fn tippy(mut self) -> Self {
        self.misc.insert("tippy".into(), json!("yes"));
        self
    }

    pub fn build(self) -> MatchRecord {
        MatchRecord {
            pre_match: self.pre_match,
            auto: self.auto,
            teleop: self.teleop,
            endgame: self.endgame,
            misc: self.misc,
        }
    }

    /// The request body a scouting form submits for this match.
    pub fn submission(self) -> Value {
        json!({
            "pre_match_json": self.pre_match,
            "auto_json": self.auto,
            "teleop_json": self.teleop,
            "endgame_json": self.endgame,
            "misc_json": self.misc,
        })
    }
}
