use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, router, RequestLog, FAKE_PNG};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn body_text(response: axum::response::Response) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- success ---

#[tokio::test]
async fn renders_png_for_valid_request() {
    let resp = app()
        .oneshot(get(
            "/v2/qrcode/url?url=https%3A%2F%2Fexample.com&size=l&error_correction=Q&eye_pattern=CIRC_CIRC",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    assert_eq!(body_bytes(resp).await, FAKE_PNG);
}

#[tokio::test]
async fn accepts_logo_parameters() {
    let resp = app()
        .oneshot(get(
            "/v2/qrcode/url?url=x&logo_url=https%3A%2F%2Fexample.com%2Flogo.png&logo_size=25&logo_excavated=true",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// --- validation ---

#[tokio::test]
async fn missing_url_returns_400_with_message() {
    let resp = app().oneshot(get("/v2/qrcode/url?size=s")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, "url is required");
}

#[tokio::test]
async fn unknown_eye_pattern_returns_400() {
    let resp = app()
        .oneshot(get("/v2/qrcode/url?url=x&eye_pattern=TRIANGLE"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, "invalid eye_pattern: TRIANGLE");
}

#[tokio::test]
async fn unknown_route_returns_404_with_empty_body() {
    let resp = app().oneshot(get("/v2/qrcode/text?url=x")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn post_is_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v2/qrcode/url?url=x")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- request log ---

#[tokio::test]
async fn request_log_records_decoded_params() {
    let log = RequestLog::default();
    let resp = router(log.clone())
        .oneshot(get("/v2/qrcode/url?url=https%3A%2F%2Fexample.com%2Fa+b&background_color=%23fff"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let entries = log.entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["url"], "https://example.com/a b");
    assert_eq!(entries[0]["background_color"], "#fff");
}

#[tokio::test]
async fn request_log_keeps_rejected_requests() {
    let log = RequestLog::default();
    let resp = router(log.clone())
        .oneshot(get("/v2/qrcode/url?size=huge"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let entries = log.entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["size"], "huge");
}
