use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        products::{
            create_product, delete_product, get_product, list_products, update_product,
        },
        root::index,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration for product endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let product_routes = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/livez", get(livez))
        .merge(product_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_app(AppState::default(), Duration::from_secs(10))
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_index() {
        let response = app()
            .oneshot(empty_request(Method::GET, "/"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "hello": "world" }));
    }

    #[tokio::test]
    async fn test_livez() {
        let response = app()
            .oneshot(empty_request(Method::GET, "/livez"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let app = app();

        // Create
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/products",
                json!({ "name": "Widget", "description": "A widget", "price": 9.99 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert_eq!(created["name"], "Widget");

        // Read
        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, &format!("/products/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);

        // Partial update
        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/products/{id}"),
                json!({ "price": 12.5 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "id": id, "name": "Widget", "description": "A widget", "price": 12.5 })
        );

        // Delete
        let response = app
            .clone()
            .oneshot(empty_request(Method::DELETE, &format!("/products/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Gone
        let response = app
            .oneshot(empty_request(Method::GET, &format!("/products/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Product not found" })
        );
    }

    #[tokio::test]
    async fn test_update_nonexistent_does_not_create() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/products/nonexistent",
                json!({ "name": "X" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Product not found" })
        );

        let response = app
            .oneshot(empty_request(Method::GET, "/products"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let response = app()
            .oneshot(empty_request(Method::GET, "/products/999999"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_no_content() {
        let app = app();

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(empty_request(Method::DELETE, "/products/never-existed"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NO_CONTENT);
        }
    }

    #[tokio::test]
    async fn test_empty_update_returns_current() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/products",
                json!({ "name": "Lamp", "description": "Desk lamp", "price": 20 }),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(json_request(
                Method::PUT,
                &format!("/products/{id}"),
                json!({ "color": "red" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_create_missing_field_is_bad_request() {
        let response = app()
            .oneshot(json_request(
                Method::POST,
                "/products",
                json!({ "name": "Widget", "description": "No price" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("price"));
    }

    #[tokio::test]
    async fn test_create_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/products")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_wrong_type_is_bad_request() {
        let response = app()
            .oneshot(json_request(
                Method::PUT,
                "/products/any",
                json!({ "price": "cheap" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_unstorable_price_is_bad_request() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/products",
                json!({ "name": "Widget", "description": "Too dear", "price": 1e200 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("price"));

        let response = app
            .oneshot(empty_request(Method::GET, "/products"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_update_unstorable_price_keeps_product() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/products",
                json!({ "name": "Widget", "description": "A widget", "price": 9.99 }),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let uri = format!("/products/{}", created["id"].as_str().unwrap());

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &uri,
                json!({ "name": "Renamed", "price": 1e-200 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app.oneshot(empty_request(Method::GET, &uri)).await.unwrap();
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn test_list_products() {
        let app = app();

        for name in ["Desk", "Chair"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/products",
                    json!({ "name": name, "description": "Furniture", "price": 100.0 }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(empty_request(Method::GET, "/products"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let products = body_json(response).await;
        let mut names: Vec<&str> = products
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Chair", "Desk"]);
    }
}
