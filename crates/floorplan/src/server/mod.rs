//! HTTP surface: `/analyze`, `/upload_project`, `/health`, `/schema`.

pub mod config;
pub mod error;
pub mod routes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorCode, ErrorResponse};
pub use routes::AnalyzeRequest;

/// Build the router for the given configuration.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/schema", get(routes::schema))
        .route("/analyze", post(routes::analyze))
        .route("/upload_project", post(routes::upload_project))
        .layer(DefaultBodyLimit::max(config.max_body_bytes()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve until `shutdown` resolves.
pub async fn serve<F>(config: ServerConfig, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode::encode_base64, response::WallsResponse};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;
    use tower::ServiceExt;

    fn app() -> Router {
        router(&ServerConfig::default())
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn png_base64(image: &RgbImage) -> String {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();
        encode_base64(&buffer.into_inner())
    }

    fn analyze_body(image: &RgbImage) -> String {
        serde_json::json!({ "image": png_base64(image) }).to_string()
    }

    #[tokio::test]
    async fn analyze_small_square() {
        let mut image = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            image.put_pixel(x, y, Rgb([0, 0, 0]));
        }

        let response = app()
            .oneshot(post_json("/analyze", analyze_body(&image)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"walls": [{"x": 1, "y": 1, "width": 2, "height": 2}]})
        );
    }

    #[tokio::test]
    async fn blank_image_is_success_with_no_walls() {
        let image = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));

        let response = app()
            .oneshot(post_json("/analyze", analyze_body(&image)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let parsed: WallsResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert!(parsed.walls.is_empty());
    }

    #[tokio::test]
    async fn corrupt_payload_is_a_decode_error() {
        let body = serde_json::json!({ "image": encode_base64(b"not an image") }).to_string();

        let response = app().oneshot(post_json("/analyze", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "DECODE_ERROR");
        assert!(json.get("walls").is_none());
    }

    #[tokio::test]
    async fn invalid_base64_is_a_decode_error() {
        let body = serde_json::json!({ "image": "%%%" }).to_string();

        let response = app().oneshot(post_json("/analyze", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "DECODE_ERROR");
    }

    #[tokio::test]
    async fn missing_image_field_is_rejected() {
        let response = app()
            .oneshot(post_json("/analyze", r#"{"picture": ""}"#.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn upload_project_returns_sample_hierarchy() {
        let response = app()
            .oneshot(post_json("/upload_project", r#"{"name": "demo"}"#.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["buildings"][0]["id"], "b_1");
        assert_eq!(json["buildings"][0]["floors"][0]["walls"][0]["children"][0]["id"], "door_001");
        assert!(json["projectId"].as_str().is_some_and(|id| id.len() == 36));
    }

    #[tokio::test]
    async fn health_reports_service() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn schema_describes_documents() {
        let request = Request::builder().uri("/schema").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        let json = body_json(response).await;
        assert!(json["analyze_request"]["properties"]["image"].is_object());
        assert!(json["analyze_response"]["properties"]["walls"].is_object());
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let config = ServerConfig { max_body_mb: 0, ..ServerConfig::default() };
        let image = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));

        let response = router(&config)
            .oneshot(post_json("/analyze", analyze_body(&image)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let response = app()
            .oneshot(post_json("/analyze", "{\"image\": ".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_REQUEST");
    }
}
