//! Integration tests for the gurbani-api endpoints
//!
//! Drives the router directly against a seeded in-memory corpus; no
//! listener is bound.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use gurbani_api::{build_router, AppState};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: seed a minimal two-shabad corpus in memory
async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");

    let statements: &[&str] = &[
        "CREATE TABLE sources (id TEXT PRIMARY KEY, name_gurmukhi TEXT NOT NULL,
            name_english TEXT NOT NULL, length INTEGER NOT NULL,
            page_name_gurmukhi TEXT NOT NULL, page_name_english TEXT NOT NULL)",
        "CREATE TABLE writers (id INTEGER PRIMARY KEY, name_gurmukhi TEXT NOT NULL,
            name_english TEXT NOT NULL)",
        "CREATE TABLE sections (id INTEGER PRIMARY KEY, source_id TEXT NOT NULL,
            name_gurmukhi TEXT NOT NULL, name_english TEXT NOT NULL,
            start_page INTEGER NOT NULL, end_page INTEGER NOT NULL)",
        "CREATE TABLE shabads (id TEXT PRIMARY KEY, source_id TEXT NOT NULL,
            writer_id INTEGER NOT NULL, section_id INTEGER NOT NULL,
            order_id INTEGER NOT NULL UNIQUE)",
        "CREATE TABLE lines (id TEXT PRIMARY KEY, shabad_id TEXT NOT NULL,
            gurmukhi TEXT NOT NULL, source_page INTEGER NOT NULL,
            source_line INTEGER NOT NULL, first_letters TEXT NOT NULL)",
        "CREATE TABLE translations (line_id TEXT NOT NULL,
            translation_source_id INTEGER NOT NULL, translation TEXT NOT NULL)",
        "CREATE TABLE transliterations (line_id TEXT NOT NULL,
            language_id INTEGER NOT NULL, transliteration TEXT NOT NULL)",
        "INSERT INTO sources VALUES
            ('G', 'sRI gurU gRMQ swihb jI', 'Sri Guru Granth Sahib Ji', 1430, 'AMg', 'Ang')",
        "INSERT INTO writers VALUES (1, 'gurU nwnk dyv jI', 'Guru Nanak Dev Ji')",
        "INSERT INTO sections VALUES (1, 'G', 'jpujI swihb', 'Japji Sahib', 1, 8)",
        "INSERT INTO shabads VALUES ('S1', 'G', 1, 1, 1)",
        "INSERT INTO shabads VALUES ('S2', 'G', 1, 1, 2)",
        "INSERT INTO lines VALUES ('L1', 'S1', 'siq; nwmu ]', 1, 1, 'sn')",
        "INSERT INTO lines VALUES ('L2', 'S2', 'gur prswid ]', 2, 2, 'gp')",
        "INSERT INTO translations VALUES ('L1', 1, 'True is the Name')",
        "INSERT INTO transliterations VALUES ('L1', 1, 'sat; naam')",
    ];
    for stmt in statements {
        sqlx::query(stmt).execute(&pool).await.unwrap();
    }

    pool
}

/// Test helper: create app with test state
fn setup_app(db: SqlitePool) -> axum::Router {
    build_router(AppState::new(db))
}

/// Test helper: GET request
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "gurbani-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn line_endpoint_serves_the_assembled_view() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(get("/api/line/L1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;

    assert_eq!(body["id"], "L1");
    assert_eq!(body["shabadid"], "S1");
    assert_eq!(body["gurmukhi"]["akhar"], "siq nwmu ]");
    assert_eq!(body["gurmukhi"]["unicode"], "ਸਤਿ ਨਾਮੁ ॥");
    assert_eq!(body["larivaar"]["akhar"], "siqnwmu]");
    assert_eq!(body["translation"]["english"], "True is the Name");
    assert_eq!(body["translation"]["spanish"], "");
    assert_eq!(body["transliteration"]["english"]["text"], "sat naam");
    assert_eq!(body["transliteration"]["english"]["larivaar"], "satnaam");
    assert_eq!(body["source"]["pageName"]["english"], "Ang");
    assert_eq!(body["raag"]["raagwithpage"], "Japji Sahib (1-8)");
    assert_eq!(body["pageNum"], 1);
    assert_eq!(body["lineNum"], 1);
}

#[tokio::test]
async fn line_endpoint_unknown_id_is_404() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(get("/api/line/NOPE")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("line NOPE"));
}

#[tokio::test]
async fn shabad_endpoint_serves_header_and_lines() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(get("/api/shabad/S1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;

    assert_eq!(body["shabadinfo"]["shabadid"], "S1");
    assert_eq!(body["shabadinfo"]["pageno"], 1);
    assert_eq!(body["shabadinfo"]["count"], 1);
    assert_eq!(body["shabadinfo"]["navigation"]["previous"], Value::Null);
    assert_eq!(body["shabadinfo"]["navigation"]["next"]["id"], "S2");
    assert_eq!(body["shabadinfo"]["writer"]["english"], "Guru Nanak Dev Ji");

    let lines = body["shabad"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["line"]["id"], "L1");
    assert_eq!(lines[0]["line"]["lineNum"], 1);
    assert_eq!(lines[0]["line"]["firstletters"]["unicode"], "ਸਨ");
}

#[tokio::test]
async fn shabad_endpoint_unknown_id_is_404() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(get("/api/shabad/NOPE")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
