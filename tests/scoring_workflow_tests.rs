use axum::http::StatusCode;
use serde_json::json;

use scouting::scoring::{
    endgame_score, score_section, score_section_detailed, MatchScore, Rubric,
};

mod utils;

use utils::*;

fn deep_climb_match() -> MatchBuilder {
    MatchBuilder::new()
        .team(4123)
        .match_number(12)
        .leave()
        .auto_coral("L4", 2, 1)
        .auto_coral("L1", 1, 1)
        .teleop_coral("L4", 3, 0)
        .teleop("processor", json!({"Made": 2}))
        .final_status("Deep")
}

#[tokio::test]
async fn test_submitted_match_is_scored_per_phase() {
    let app = TestAppBuilder::new().build();

    let body = app.submit(deep_climb_match().submission()).await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["autoPts"], 20.0);
    assert_eq!(body["telePts"], 27.0);
    assert_eq!(body["endPts"], 12.0);
    assert_eq!(body["total"], 59.0);
}

#[tokio::test]
async fn test_rubric_edits_apply_without_restart() {
    let app = TestAppBuilder::new().build();
    app.submit(deep_climb_match().submission()).await;

    let mut rubric = reefscape_rubric();
    rubric["match_form"]["auto_period"]["L4"] = json!({"Value": 10});
    rubric["match_form"]["endgame"]["final_status"]["values"] = json!([0, 2, 6, 14]);
    app.replace_rubric(&rubric);

    let (status, body) = app.get_json("/api/team/4123/matches").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["auto_points"], 26.0);
    assert_eq!(body[0]["endgame_points"], 14.0);
    assert_eq!(body[0]["total_points"], 67.0);
}

#[tokio::test]
async fn test_legacy_endgame_form_scores_by_status() {
    let app = TestAppBuilder::new().with_rubric(legacy_rubric()).build();

    let deep = app
        .submit(MatchBuilder::new().team(254).final_status("Deep").submission())
        .await;
    let unknown = app
        .submit(MatchBuilder::new().team(254).final_status("Climb").submission())
        .await;

    assert_eq!(deep["endPts"], 12.0);
    assert_eq!(unknown["endPts"], 0.0);
}

#[tokio::test]
async fn test_config_endpoint_returns_raw_document() {
    let app = TestAppBuilder::new().build();

    let (status, body) = app.get_json("/api/config").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, reefscape_rubric());
    let first_option = body["rankings_options"]
        .as_object()
        .and_then(|options| options.keys().next().cloned());
    assert_eq!(first_option.as_deref(), Some("Average Points"));
}

#[tokio::test]
async fn test_missing_rubric_file_is_a_server_error() {
    let app = TestAppBuilder::new().build();
    std::fs::remove_file(&app.rubric_path).unwrap();

    let (status, body) = app
        .send_json("POST", "/api/matches", &deep_climb_match().submission())
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Configuration error"));
}

#[tokio::test]
async fn test_malformed_sections_store_and_score_zero() {
    let app = TestAppBuilder::new().build();

    let body = app
        .submit(json!({
            "pre_match_json": {"team_number": 4123},
            "auto_json": "not an object",
            "teleop_json": [1, 2, 3],
            "endgame_json": {"final_status": 3},
            "misc_json": null
        }))
        .await;

    assert_eq!(body["total"], 0.0);

    let (_, matches) = app.get_json("/api/matches").await;
    assert_eq!(matches[0]["auto_json"], json!({}));
    assert_eq!(matches[0]["endgame_json"], json!({"final_status": 3}));
}

#[tokio::test]
async fn test_counts_and_values_read_as_integers() {
    let mut rubric = reefscape_rubric();
    rubric["match_form"]["endgame"]["final_status"]["values"] = json!(["0", "2", "6", "12"]);
    let app = TestAppBuilder::new().with_rubric(rubric).build();

    let body = app
        .submit(
            MatchBuilder::new()
                .team(4123)
                .auto("L4", json!({"Made": "3"}))
                .teleop("L4", json!({"Made": true}))
                .final_status("Deep")
                .submission(),
        )
        .await;

    assert_eq!(body["autoPts"], 21.0);
    assert_eq!(body["telePts"], 5.0);
    assert_eq!(body["endPts"], 12.0);
}

#[test]
fn test_every_entry_shape_scores_through_one_rubric() {
    let rubric = Rubric::from_value(&reefscape_rubric());
    let auto = json!({
        "leave": true,
        "bonus": 4,
        "net": true,
        "L2": 5,
        "L3": {"Made": 1.9, "Missed": 3},
        "notes": "fed from the left",
        "mystery": 10
    });
    let auto = auto.as_object().unwrap();

    let detailed = score_section_detailed(auto, &rubric.auto_period);
    let mut ignored = detailed.ignored.clone();
    ignored.sort();

    assert_eq!(detailed.total, 3.0 + 4.0 + 4.0 + 5.0 + 6.0);
    assert_eq!(ignored, vec!["mystery", "notes"]);
    assert_eq!(score_section(auto, &rubric.auto_period), detailed.total);
}

#[test]
fn test_untyped_boolean_with_value_only_counts_numbers() {
    let rubric = Rubric::from_value(&reefscape_rubric());

    let flagged = json!({"defense": true});
    let counted = json!({"defense": 3});

    assert_eq!(
        score_section(flagged.as_object().unwrap(), &rubric.teleop_period),
        0.0
    );
    assert_eq!(
        score_section(counted.as_object().unwrap(), &rubric.teleop_period),
        3.0
    );
}

#[test]
fn test_match_score_matches_phase_functions() {
    let rubric = Rubric::from_value(&reefscape_rubric());
    let record = deep_climb_match().build();

    let score = MatchScore::for_record(&record, &rubric);

    assert_eq!(score.auto, score_section(&record.auto, &rubric.auto_period));
    assert_eq!(score.endgame, endgame_score(&record.endgame, &rubric));
    assert_eq!(score.total(), 59.0);
}
