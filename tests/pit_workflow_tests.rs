use axum::{body::Body, http::StatusCode};
use serde_json::{json, Value};

mod utils;

use utils::*;

async fn scout_pit(app: &TestApp, pit: Value, image_path: Option<&str>) -> i64 {
    let (status, body) = app
        .send_json(
            "POST",
            "/api/pits",
            &json!({"pit_json": pit, "image_path": image_path}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "pit create failed: {body}");
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_team_pit_returns_the_latest_entry() {
    let app = TestAppBuilder::new().build();
    scout_pit(&app, json!({"team_number": 4123, "drive": "tank"}), None).await;
    scout_pit(&app, json!({"team_number": 254, "drive": "swerve"}), None).await;
    let latest = scout_pit(
        &app,
        json!({"team_number": 4123, "drive": "swerve"}),
        Some("uploads/4123.jpg"),
    )
    .await;

    let (status, pit) = app.get_json("/api/team/4123/pit").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(pit["id"], latest);
    assert_eq!(pit["pit_json"]["drive"], "swerve");
    assert_eq!(pit["image_path"], "uploads/4123.jpg");
    assert!(!pit["created_at"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_pit_list_follows_the_configured_cap() {
    let mut rubric = reefscape_rubric();
    rubric["limits"]["raw_table_cap"] = json!(2);
    let app = TestAppBuilder::new().with_rubric(rubric).build();
    for team in [1, 2, 3] {
        scout_pit(&app, json!({"team_number": team}), None).await;
    }

    let (_, pits) = app.get_json("/api/pits").await;
    let teams: Vec<&Value> = pits
        .as_array()
        .unwrap()
        .iter()
        .map(|pit| &pit["pit_json"]["team_number"])
        .collect();
    assert_eq!(teams, vec![&json!(3), &json!(2)]);

    let (_, pits) = app.get_json("/api/pits?limit=10&offset=2").await;
    assert_eq!(pits.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_checklists_come_from_the_home_page_config() {
    let app = TestAppBuilder::new().build();

    let (status, body) = app
        .send_json(
            "POST",
            "/api/checklist/pit_prep",
            &json!({"checked": ["Battery charged"]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, body) = app
        .send_json("POST", "/api/checklist/announcements", &json!({"checked": []}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Checklist not found in config");

    let (_, checklists) = app.get_json("/api/checklist").await;
    assert_eq!(checklists["pit_prep"]["title"], "Pit Prep");
    assert_eq!(checklists["pit_prep"]["checked"], json!(["Battery charged"]));
    assert_eq!(checklists["pit_prep"]["options"].as_array().unwrap().len(), 3);
    assert!(checklists.get("announcements").is_none());
}

#[tokio::test]
async fn test_checklist_added_to_config_is_available_without_restart() {
    let app = TestAppBuilder::new().build();
    let (status, _) = app
        .send_json("POST", "/api/checklist/drive_team", &json!({"checked": []}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut rubric = reefscape_rubric();
    rubric["Home"]["body"]["drive_team"] = json!({"type": "checklist"});
    app.replace_rubric(&rubric);

    let (status, _) = app
        .send_json("POST", "/api/checklist/drive_team", &json!({"checked": []}))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, checklists) = app.get_json("/api/checklist").await;
    assert_eq!(
        checklists["drive_team"],
        json!({"title": "Checklist", "options": [], "checked": []})
    );
}

#[tokio::test]
async fn test_pits_survive_export_and_import() {
    let source = TestAppBuilder::new().build();
    scout_pit(&source, json!({"team_number": 4123, "weight": 112.5}), None).await;
    scout_pit(
        &source,
        json!({"team_number": "254", "notes": "fast, \"quiet\" intake"}),
        Some("uploads/254.png"),
    )
    .await;

    let (status, csv) = source
        .request("GET", "/api/export/pits.csv", Body::empty())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(csv.starts_with(b"id,created_at,pit_json,image_path\n"));

    let target = TestAppBuilder::new().build();
    let (status, summary) = target
        .request("POST", "/api/import/csv", Body::from(csv))
        .await;
    assert_eq!(status, StatusCode::OK);
    let summary: Value = serde_json::from_slice(&summary).unwrap();
    assert_eq!(summary["message"], "Successfully processed 2 records");
    assert_eq!(summary["errors"], Value::Null);

    let (_, before) = source.get_json("/api/pits").await;
    let (_, after) = target.get_json("/api/pits").await;
    assert_eq!(before, after);

    let next = scout_pit(&target, json!({"team_number": 1678}), None).await;
    assert_eq!(next, 3);
}
