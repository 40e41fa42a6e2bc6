mod test_utils;

use test_utils::{valid_payload, TestApp};
use uuid::Uuid;

#[tokio::test]
async fn valid_submission_persists_parent_and_children() {
    let app = TestApp::spawn().await;

    let response = app.post_submission(&valid_payload()).await;
    assert_eq!(response.status(), 201);

    let body: serde_json::Value = response.json().await.expect("Invalid JSON body");
    let id: Uuid = body["id"]
        .as_str()
        .expect("Response is missing the submission id")
        .parse()
        .expect("Submission id is not a UUID");
    assert_eq!(body["message"], "Your career map has been received.");

    let (username, age): (String, i32) = sqlx::query_as(
        "SELECT username, age FROM submissions WHERE id = $1",
    )
    .bind(id)
    .fetch_one(&app.db_pool)
    .await
    .expect("Submission row was not persisted");

    assert_eq!(username, "margaret");
    assert_eq!(age, 32);
    assert_eq!(app.count_skills_for(id).await, 3);
}

#[tokio::test]
async fn missing_required_field_is_rejected() {
    let app = TestApp::spawn().await;

    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("age");

    let response = app.post_submission(&payload).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn age_outside_range_is_rejected() {
    let app = TestApp::spawn().await;

    for age in [17, 61] {
        let mut payload = valid_payload();
        payload["age"] = serde_json::json!(age);

        let response = app.post_submission(&payload).await;
        assert_eq!(response.status(), 400, "age {} should be rejected", age);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Validation failed");
        assert!(body["details"]
            .as_array()
            .unwrap()
            .iter()
            .any(|d| d["field"] == "age"));
    }
}

#[tokio::test]
async fn zero_experience_is_rejected() {
    let app = TestApp::spawn().await;

    let mut payload = valid_payload();
    payload["years_of_experience"] = serde_json::json!(0);

    let response = app.post_submission(&payload).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["details"]
        .as_array()
        .unwrap()
        .iter()
        .any(|d| d["field"] == "years_of_experience"));
}

#[tokio::test]
async fn one_char_username_is_rejected() {
    let app = TestApp::spawn().await;

    let mut payload = valid_payload();
    payload["username"] = serde_json::json!("m");

    let response = app.post_submission(&payload).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn empty_skill_list_is_rejected() {
    let app = TestApp::spawn().await;

    let mut payload = valid_payload();
    payload["skills"] = serde_json::json!([]);

    let response = app.post_submission(&payload).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["details"]
        .as_array()
        .unwrap()
        .iter()
        .any(|d| d["field"] == "skills"));
}

#[tokio::test]
async fn blank_skill_name_is_rejected() {
    let app = TestApp::spawn().await;

    let mut payload = valid_payload();
    payload["skills"] = serde_json::json!([{ "name": "" }]);

    let response = app.post_submission(&payload).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["details"]
        .as_array()
        .unwrap()
        .iter()
        .any(|d| d["field"] == "skills[0].name"));
}

#[tokio::test]
async fn unknown_purpose_code_is_rejected() {
    let app = TestApp::spawn().await;

    let mut payload = valid_payload();
    payload["purpose"] = serde_json::json!("world-domination");

    let response = app.post_submission(&payload).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn purpose_and_salary_are_optional() {
    let app = TestApp::spawn().await;

    let mut payload = valid_payload();
    let object = payload.as_object_mut().unwrap();
    object.remove("purpose");
    object.remove("annual_salary");

    let response = app.post_submission(&payload).await;
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn submission_is_returned_with_its_skills() {
    let app = TestApp::spawn().await;

    let created = app.post_submission(&valid_payload()).await;
    let created_body: serde_json::Value = created.json().await.unwrap();
    let id = created_body["id"].as_str().unwrap().to_string();

    let response = app.get_submission(&id).await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["username"], "margaret");
    assert_eq!(body["purpose"], "career-change");

    let skills = body["skills"].as_array().unwrap();
    assert_eq!(skills.len(), 3);
    assert!(skills.iter().all(|s| s["submission_id"] == body["id"]));
}

#[tokio::test]
async fn unknown_submission_id_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.get_submission(&Uuid::new_v4().to_string()).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn malformed_submission_id_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.get_submission("not-a-uuid").await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn listing_includes_created_submission() {
    let app = TestApp::spawn().await;

    app.post_submission(&valid_payload()).await;

    let response = app
        .client
        .get(format!("{}/api/v1/submissions", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["total"].as_i64().unwrap() >= 1);
    assert!(body["submissions"]
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["username"] == "margaret"));
}

#[tokio::test]
async fn deleting_submission_removes_its_skills() {
    let app = TestApp::spawn().await;

    let created = app.post_submission(&valid_payload()).await;
    let created_body: serde_json::Value = created.json().await.unwrap();
    let id = created_body["id"].as_str().unwrap().to_string();
    let uuid: Uuid = id.parse().unwrap();

    let response = app.delete_submission(&id).await;
    assert_eq!(response.status(), 204);

    assert_eq!(app.count_skills_for(uuid).await, 0);

    let response = app.get_submission(&id).await;
    assert_eq!(response.status(), 404);
}
