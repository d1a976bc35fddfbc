use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        health::health_check,
        todos::{complete_todo, create_todo, delete_todo, get_todo, list_todos, update_todo},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    let cors = cors_layer(config);

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .route(
            "/todos/{id}/complete",
            put(complete_todo).patch(complete_todo),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer from the configured allow-lists.
///
/// A list left unset in the environment allows anything.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins = match &config.allowed_origins {
        Some(origins) => AllowOrigin::list(origins.iter().cloned()),
        None => AllowOrigin::any(),
    };
    let methods = match &config.allowed_methods {
        Some(methods) => AllowMethods::list(methods.iter().cloned()),
        None => AllowMethods::any(),
    };
    let headers = match &config.allowed_headers {
        Some(headers) => AllowHeaders::list(headers.iter().cloned()),
        None => AllowHeaders::any(),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, HeaderValue, Method, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn allow_all_config() -> Config {
        Config {
            sqlite_path: ":memory:".to_string(),
            allowed_origins: None,
            allowed_methods: None,
            allowed_headers: None,
        }
    }

    async fn test_app() -> Router {
        create_app(AppState::in_memory().await, &allow_all_config())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Healthy");
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_root_serves_health_check() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_todo_applies_defaults() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/todos",
                serde_json::json!({"title": "Buy milk"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["description"], "");
        assert_eq!(body["completed"], false);
        assert!(body["id"].as_i64().unwrap() > 0);
        assert_eq!(body["created_at"], body["updated_at"]);
    }

    #[tokio::test]
    async fn test_create_todo_accepts_null_description() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/todos",
                serde_json::json!({"title": "No notes", "description": null}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["description"], "");
    }

    #[tokio::test]
    async fn test_create_todo_rejects_empty_title() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/todos",
                serde_json::json!({"title": "   "}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Todo title cannot be empty");
    }

    #[tokio::test]
    async fn test_create_todo_rejects_overlong_title() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/todos",
                serde_json::json!({"title": "x".repeat(501)}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("max 500"));
    }

    #[tokio::test]
    async fn test_create_todo_rejects_missing_title() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(Method::POST, "/todos", serde_json::json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_create_todo_rejects_malformed_json() {
        let app = test_app().await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/todos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_list_todos_empty() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/todos")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["todos"], serde_json::json!([]));
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_list_todos_returns_all_with_total() {
        let app = test_app().await;

        for title in ["first", "second", "third"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/todos",
                    serde_json::json!({"title": title}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.oneshot(get_request("/todos")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 3);
        let titles: Vec<&str> = body["todos"]
            .as_array()
            .unwrap()
            .iter()
            .map(|todo| todo["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_get_todo_missing_returns_404() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/todos/999")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Todo not found: 999");
    }

    #[tokio::test]
    async fn test_get_todo_non_numeric_id_returns_400() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/todos/abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_todo_changes_only_supplied_fields() {
        let app = test_app().await;

        let created = body_json(
            app.clone()
                .oneshot(json_request(
                    Method::POST,
                    "/todos",
                    serde_json::json!({"title": "Plan trip", "description": "Pack bags"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let response = app
            .oneshot(json_request(
                Method::PATCH,
                &format!("/todos/{id}"),
                serde_json::json!({"description": "Book flights"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["title"], "Plan trip");
        assert_eq!(body["description"], "Book flights");
        assert_eq!(body["completed"], false);
        assert_eq!(body["created_at"], created["created_at"]);
    }

    #[tokio::test]
    async fn test_update_todo_missing_returns_404() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                Method::PATCH,
                "/todos/42",
                serde_json::json!({"title": "Ghost"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Todo not found: 42");
    }

    #[tokio::test]
    async fn test_update_todo_rejects_blank_title() {
        let app = test_app().await;

        let created = body_json(
            app.clone()
                .oneshot(json_request(
                    Method::POST,
                    "/todos",
                    serde_json::json!({"title": "Valid"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let response = app
            .oneshot(json_request(
                Method::PATCH,
                &format!("/todos/{id}"),
                serde_json::json!({"title": "  "}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Todo title cannot be empty");
    }

    #[tokio::test]
    async fn test_complete_todo_via_put_and_patch() {
        let app = test_app().await;

        let created = body_json(
            app.clone()
                .oneshot(json_request(
                    Method::POST,
                    "/todos",
                    serde_json::json!({"title": "Finish draft"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/todos/{id}/complete"),
                serde_json::json!({"completed": true}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["completed"], true);
        assert_eq!(body["title"], "Finish draft");

        let response = app
            .oneshot(json_request(
                Method::PATCH,
                &format!("/todos/{id}/complete"),
                serde_json::json!({"completed": false}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["completed"], false);
    }

    #[tokio::test]
    async fn test_complete_todo_missing_returns_404() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                Method::PUT,
                "/todos/7/complete",
                serde_json::json!({"completed": true}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_complete_todo_requires_body() {
        let app = test_app().await;

        let request = Request::builder()
            .method(Method::PUT)
            .uri("/todos/1/complete")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_todo_lifecycle() {
        let app = test_app().await;

        // Create
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/todos",
                serde_json::json!({"title": "Buy milk"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["completed"], false);
        assert_eq!(created["description"], "");
        let id = created["id"].as_i64().unwrap();

        // Complete
        let response = app
            .clone()
            .oneshot(json_request(
                Method::PATCH,
                &format!("/todos/{id}/complete"),
                serde_json::json!({"completed": true}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let completed = body_json(response).await;
        assert_eq!(completed["completed"], true);
        assert_eq!(completed["title"], "Buy milk");
        assert_ne!(completed["updated_at"], created["updated_at"]);

        // Delete
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/todos/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Gone
        let response = app
            .oneshot(get_request(&format!("/todos/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_todo_missing_returns_404() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/todos/123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Todo not found: 123");
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin_by_default() {
        let app = test_app().await;

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/todos")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(HeaderValue::as_bytes),
            Some(b"*".as_slice())
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_echoes_configured_origin() {
        let config = Config {
            sqlite_path: ":memory:".to_string(),
            allowed_origins: Some(vec![HeaderValue::from_static("https://example.com")]),
            allowed_methods: Some(vec![Method::GET, Method::POST]),
            allowed_headers: None,
        };
        let app = create_app(AppState::in_memory().await, &config);

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/todos")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(HeaderValue::as_bytes),
            Some(b"https://example.com".as_slice())
        );
    }
}
