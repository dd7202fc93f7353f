/*
 * Responsibility
 * - Responses for requests that match no route (404) or no method (405)
 */
use crate::error::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
