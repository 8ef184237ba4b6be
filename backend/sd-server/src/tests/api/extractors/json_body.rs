use crate::{ApiError, CreateSaveDateRequest, JsonBody};

use axum::{body::Body, extract::FromRequest, http::Request};

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/save-date/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_extractor_with_valid_body() {
    let request = json_request(r#"{"title": "Meu Evento", "event_times": []}"#);

    let result = JsonBody::<CreateSaveDateRequest>::from_request(request, &()).await;

    let JsonBody(body) = result.unwrap();
    assert_eq!(body.title.as_deref(), Some("Meu Evento"));
    assert_eq!(body.event_times.map(|times| times.len()), Some(0));
    assert!(body.event_city.is_none());
}

#[tokio::test]
async fn test_extractor_with_malformed_json_returns_bad_request() {
    let request = json_request(r#"{"title": "#);

    let result = JsonBody::<CreateSaveDateRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_extractor_with_wrong_field_type_returns_bad_request() {
    let request = json_request(r#"{"title": 5}"#);

    let result = JsonBody::<CreateSaveDateRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_extractor_without_content_type_returns_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/save-date/")
        .body(Body::from("{}"))
        .unwrap();

    let result = JsonBody::<CreateSaveDateRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
