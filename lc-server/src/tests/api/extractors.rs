use crate::api::extractors::session_token::SessionToken;

use axum::extract::FromRequestParts;
use axum::http::Request;

async fn extract(request: Request<()>) -> Option<String> {
    let (mut parts, _) = request.into_parts();
    let SessionToken(token) = SessionToken::from_request_parts(&mut parts, &())
        .await
        .unwrap();
    token
}

#[tokio::test]
async fn bearer_token_is_extracted() {
    let request = Request::builder()
        .uri("/")
        .header("Authorization", "Bearer abc.def.ghi")
        .body(())
        .unwrap();

    assert_eq!(extract(request).await.as_deref(), Some("abc.def.ghi"));
}

#[tokio::test]
async fn missing_header_yields_none_instead_of_rejecting() {
    let request = Request::builder().uri("/").body(()).unwrap();

    assert_eq!(extract(request).await, None);
}

#[tokio::test]
async fn non_bearer_scheme_yields_none() {
    let request = Request::builder()
        .uri("/")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(())
        .unwrap();

    assert_eq!(extract(request).await, None);
}
