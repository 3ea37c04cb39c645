use serde_json::{json, Value};

/// A full-season configuration with every rubric entry shape.
#[allow(dead_code)]
pub fn reefscape_rubric() -> Value {
    json!({
        "match_form": {
            "pre_match": {"team_number": "number", "match_number": "number"},
            "auto_period": {
                "leave": 3,
                "L1": {"Value": 3},
                "L2": {"Value": 4},
                "L3": {"Value": 6},
                "L4": {"Value": 7},
                "net": {"Value": 4},
                "bonus": {"Type": "Boolean with Value", "Value": 5},
                "notes": "free text"
            },
            "teleop_period": {
                "L1": {"Value": 2},
                "L2": {"Value": 3},
                "L3": {"Value": 4},
                "L4": {"Value": 5},
                "processor": {"Value": 6},
                "defense": {"type": "Boolean with Value"}
            },
            "endgame": {
                "final_status": {
                    "options": ["None", "Park", "Shallow", "Deep"],
                    "values": [0, 2, 6, 12]
                }
            }
        },
        "rankings_options": {
            "Average Points": {"description": "Mean points per match"},
            "Average L4 Auto": {"description": "Coral scored on L4 in auto"},
            "Max Auto L4": {},
            "Average Teleop L4": {},
            "Died %": {"description": "Share of matches where the robot died"},
            "Tippy %": {},
            "Auto Coral %": {},
            "Teleop Coral %": {},
            "Cycle Time": {"description": "Not a known formula"}
        },
        "limits": {"raw_table_cap": 25},
        "Home": {
            "title": "Week 1 Scouting",
            "body": {
                "pit_prep": {
                    "type": "checklist",
                    "title": "Pit Prep",
                    "options": ["Battery charged", "Bumpers on", "Radio checked"]
                },
                "announcements": {"type": "text", "content": "Quals start at 9"}
            }
        }
    })
}

/// Older configuration with the status-keyed endgame form.
#[allow(dead_code)]
pub fn legacy_rubric() -> Value {
    json!({
        "match_form": {
            "auto_period": {"leave": 3, "L4": {"Value": 7}},
            "teleop_period": {"L4": {"Value": 5}},
            "endgame": {
                "final_status": {
                    "Park": {"Value": 2},
                    "Shallow": {"Value": 6},
                    "Deep": {"Value": 12}
                }
            }
        },
        "rankings_options": {"Average Points": {}}
    })
}
