use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes;
use server::startup;
use service::auth::service::AuthConfig;

async fn build_app() -> anyhow::Result<(Router, String)> {
    let db = models::db::connect_to("sqlite::memory:").await?;
    let state = startup::build_state(
        db,
        AuthConfig { session_secret: "test-secret".into(), session_ttl_hours: 12 },
    )
    .await?;
    let app = routes::build_router(tower_http::cors::CorsLayer::very_permissive(), state);

    let req = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&json!({"username": "admin", "password": "admin"}))?))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(';').next())
        .expect("session cookie")
        .to_string();
    Ok((app, cookie))
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: &str,
    body: Option<Value>,
) -> anyhow::Result<axum::response::Response> {
    let builder = Request::builder().method(method).uri(uri).header("cookie", cookie);
    let req = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&value)?))?,
        None => builder.body(Body::empty())?,
    };
    Ok(app.clone().oneshot(req).await?)
}

async fn json_body(resp: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn events_listing_orders_by_literal_date_text() -> anyhow::Result<()> {
    let (app, cookie) = build_app().await?;

    for (title, date) in [("Late", "2024-12-01"), ("Weird", "9999-01-01"), ("Early", "2024-03-01")] {
        let resp = request(&app, "POST", "/events", &cookie, Some(json!({"title": title, "date": date}))).await?;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = request(&app, "GET", "/events", &cookie, None).await?;
    let listed = json_body(resp).await?;
    let titles: Vec<&str> = listed.as_array().unwrap().iter().map(|e| e["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Early", "Late", "Weird"]);
    Ok(())
}

#[tokio::test]
async fn event_validation_and_missing_ids() -> anyhow::Result<()> {
    let (app, cookie) = build_app().await?;

    let resp = request(&app, "POST", "/events", &cookie, Some(json!({"title": "", "date": "2024-01-01"}))).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = request(&app, "GET", "/events/999", &cookie, None).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = request(&app, "DELETE", "/events/999", &cookie, None).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn attendee_lifecycle_under_an_event() -> anyhow::Result<()> {
    let (app, cookie) = build_app().await?;

    let resp = request(&app, "POST", "/events", &cookie, Some(json!({"title": "Camp", "date": "2024-07-01"}))).await?;
    let event = json_body(resp).await?;
    let event_id = event["id"].as_i64().unwrap();

    let resp = request(
        &app,
        "POST",
        &format!("/events/{event_id}/attendees"),
        &cookie,
        Some(json!({"name": "Ann Lee", "phone": "555", "address": "12 Elm"})),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let ann = json_body(resp).await?;

    let resp = request(
        &app,
        "POST",
        &format!("/events/{event_id}/attendees"),
        &cookie,
        Some(json!({"name": "Ben"})),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Unknown event and missing name both fail before any write
    let resp = request(&app, "POST", "/events/999/attendees", &cookie, Some(json!({"name": "Ghost"}))).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = request(
        &app,
        "POST",
        &format!("/events/{event_id}/attendees"),
        &cookie,
        Some(json!({"name": "  "})),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = request(&app, "GET", &format!("/events/{event_id}"), &cookie, None).await?;
    let detail = json_body(resp).await?;
    assert_eq!(detail["attendees"].as_array().unwrap().len(), 2);
    assert_eq!(detail["attendees"][0]["name"], "Ann Lee");

    // Full replace drops the fields the edit form left empty
    let ann_id = ann["id"].as_i64().unwrap();
    let resp = request(
        &app,
        "PUT",
        &format!("/attendees/{ann_id}"),
        &cookie,
        Some(json!({"name": "Ann L.", "email": "ann@example.org"})),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let replaced = json_body(resp).await?;
    assert_eq!(replaced["name"], "Ann L.");
    assert_eq!(replaced["phone"], Value::Null);
    assert_eq!(replaced["email"], "ann@example.org");

    let resp = request(&app, "DELETE", &format!("/attendees/{ann_id}"), &cookie, None).await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = request(&app, "GET", &format!("/events/{event_id}"), &cookie, None).await?;
    let detail = json_body(resp).await?;
    assert_eq!(detail["attendees"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn deleting_an_event_takes_its_roster() -> anyhow::Result<()> {
    let (app, cookie) = build_app().await?;

    let resp = request(&app, "POST", "/events", &cookie, Some(json!({"title": "Camp", "date": "2024-07-01"}))).await?;
    let event_id = json_body(resp).await?["id"].as_i64().unwrap();
    let resp = request(
        &app,
        "POST",
        &format!("/events/{event_id}/attendees"),
        &cookie,
        Some(json!({"name": "Ann"})),
    )
    .await?;
    let attendee_id = json_body(resp).await?["id"].as_i64().unwrap();

    let resp = request(&app, "DELETE", &format!("/events/{event_id}"), &cookie, None).await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = request(&app, "GET", &format!("/events/{event_id}"), &cookie, None).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = request(&app, "PUT", &format!("/attendees/{attendee_id}"), &cookie, Some(json!({"name": "Ann"}))).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn exports_download_with_suggested_filenames() -> anyhow::Result<()> {
    let (app, cookie) = build_app().await?;

    let resp = request(&app, "POST", "/events", &cookie, Some(json!({"title": "Summer Camp", "date": "2024-07-01"}))).await?;
    let event_id = json_body(resp).await?["id"].as_i64().unwrap();
    request(
        &app,
        "POST",
        &format!("/events/{event_id}/attendees"),
        &cookie,
        Some(json!({"name": "Ann Lee", "phone": "555", "address": "12 Elm"})),
    )
    .await?;

    let resp = request(&app, "GET", &format!("/events/{event_id}/export/excel"), &cookie, None).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap().to_str()?.to_string();
    assert!(disposition.contains("Summer Camp_attendees.xlsx"));
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    assert!(bytes.starts_with(b"PK"));

    let resp = request(&app, "GET", &format!("/events/{event_id}/export/pdf"), &cookie, None).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/pdf");
    let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap().to_str()?.to_string();
    assert!(disposition.contains("Summer Camp_attendees.pdf"));
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    assert!(bytes.starts_with(b"%PDF"));

    let resp = request(&app, "GET", "/events/999/export/excel", &cookie, None).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
