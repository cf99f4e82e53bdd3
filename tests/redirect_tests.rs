//! Redirect service tests
//!
//! The critical path: short code in, 302 out, with the incoming query
//! string carried through to the target URL.

use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use tempfile::TempDir;

use snaplink::api::routes;
use snaplink::config::{AppConfig, DatabaseConfig};
use snaplink::repository::{RepositoryHandle, UrlMapping};

fn sqlite_config(dir: &TempDir, name: &str) -> DatabaseConfig {
    DatabaseConfig {
        backend: "sqlite".to_string(),
        database_url: format!("sqlite://{}?mode=rwc", dir.path().join(name).display()),
    }
}

macro_rules! test_app {
    ($config:expr, $repository:expr) => {{
        let config = $config.clone();
        test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .app_data($repository.clone())
                .configure(|cfg| routes::configure(&config, cfg)),
        )
        .await
    }};
}

async fn insert_mapping(repository: &RepositoryHandle, code: &str, url: &str) {
    repository
        .get()
        .await
        .expect("repository")
        .insert(UrlMapping::new(code.to_string(), url.to_string()))
        .await
        .expect("insert");
}

#[actix_rt::test]
async fn known_code_redirects_to_original_url() {
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig::default();
    let repository = web::Data::new(RepositoryHandle::new(sqlite_config(&dir, "hit.db")));
    insert_mapping(&repository, "abcd1234", "https://example.com/target").await;
    let app = test_app!(config, repository);

    let req = TestRequest::get().uri("/redirect/abcd1234").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("https://example.com/target")
    );
}

#[actix_rt::test]
async fn unknown_code_returns_structured_404() {
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig::default();
    let repository = web::Data::new(RepositoryHandle::new(sqlite_config(&dir, "miss.db")));
    let app = test_app!(config, repository);

    let req = TestRequest::get().uri("/redirect/zzzzzzzz").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Shortened URL not found");
}

#[actix_rt::test]
async fn malformed_code_returns_404_without_store_hit() {
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig::default();
    let repository = web::Data::new(RepositoryHandle::new(sqlite_config(&dir, "shape.db")));
    // A mapping seeded directly with a code the generator would never mint
    // is intentionally unreachable over HTTP: the shape check 404s first.
    insert_mapping(&repository, "ABC", "https://example.com/seeded").await;
    let app = test_app!(config, repository);

    for code in ["ABC", "short", "UPPERCASE1"] {
        let req = TestRequest::get()
            .uri(&format!("/redirect/{}", code))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    // The mapping itself is present in the store.
    let stored = repository
        .get()
        .await
        .expect("repository")
        .find_by_code("ABC")
        .await
        .expect("lookup");
    assert!(stored.is_some());
}

#[actix_rt::test]
async fn query_string_is_appended_with_question_mark() {
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig::default();
    let repository = web::Data::new(RepositoryHandle::new(sqlite_config(&dir, "q1.db")));
    insert_mapping(&repository, "abcd1234", "http://e.com/p").await;
    let app = test_app!(config, repository);

    let req = TestRequest::get().uri("/redirect/abcd1234?x=1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("http://e.com/p?x=1")
    );
}

#[actix_rt::test]
async fn query_string_is_appended_with_ampersand_when_target_has_query() {
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig::default();
    let repository = web::Data::new(RepositoryHandle::new(sqlite_config(&dir, "q2.db")));
    insert_mapping(&repository, "abcd1234", "http://e.com/p?y=2").await;
    let app = test_app!(config, repository);

    let req = TestRequest::get().uri("/redirect/abcd1234?x=1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("http://e.com/p?y=2&x=1")
    );
}

#[actix_rt::test]
async fn repeated_lookups_are_idempotent() {
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig::default();
    let repository = web::Data::new(RepositoryHandle::new(sqlite_config(&dir, "idem.db")));
    insert_mapping(&repository, "abcd1234", "https://example.com/stable").await;
    let app = test_app!(config, repository);

    for _ in 0..3 {
        let req = TestRequest::get().uri("/redirect/abcd1234").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("https://example.com/stable")
        );
    }
}

#[actix_rt::test]
async fn shorten_then_redirect_round_trips() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = AppConfig::default();
    config.api.password = "round_trip".to_string();
    let repository = web::Data::new(RepositoryHandle::new(sqlite_config(&dir, "rt.db")));
    let app = test_app!(config, repository);

    let req = TestRequest::post()
        .uri("/shorten")
        .set_json(serde_json::json!({
            "password": "round_trip",
            "longURL": "https://example.com/round/trip",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let code = body["shortCode"].as_str().expect("shortCode");

    let req = TestRequest::get()
        .uri(&format!("/redirect/{}", code))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("https://example.com/round/trip")
    );
}
