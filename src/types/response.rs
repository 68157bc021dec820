use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// 201 with the created resource as the body
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// 204 with an empty body
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> axum::response::Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

/// 200 with the resource, or 404 with an empty body when it is absent.
///
/// Lookups answer "absent" without the JSON error payload; deletes of a
/// missing resource go through `AppError::NotFound` instead.
pub struct OrNotFound<T: Serialize>(pub Option<T>);

impl<T: Serialize> IntoResponse for OrNotFound<T> {
    fn into_response(self) -> axum::response::Response {
        match self.0 {
            Some(value) => (StatusCode::OK, Json(value)).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
