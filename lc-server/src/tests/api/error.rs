use crate::api::error::ApiError;

use lc_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn unauthenticated_maps_to_403() {
    let response = ApiError::Unauthenticated {
        location: location(),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn validation_maps_to_400_with_field() {
    let response = ApiError::Validation {
        message: "No email address found".to_string(),
        field: Some("email".to_string()),
        location: location(),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "No email address found");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let response = ApiError::NotFound {
        message: "No user record for this identity".to_string(),
        location: location(),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn internal_maps_to_500() {
    let response = ApiError::Internal {
        message: "Internal Server Error".to_string(),
        location: location(),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn database_errors_convert_without_leaking_details() {
    let db_error = DbError::UniqueViolation {
        constraint: "UNIQUE constraint failed: users.email".to_string(),
        location: location(),
    };

    let response = ApiError::from(db_error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "Database operation failed");
}
