// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Service Error

/// 서비스 전역 오류 모델
/// 1. InvalidRequest: 필수 입력 누락 또는 형식 오류 (HTTP 400)
/// 2. NotFound: 대상 레코드 없음 (HTTP 404)
/// 3. Unavailable: 스토어 연결/쿼리 실패 (HTTP 500)
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            ServiceError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            // 내부 원인은 로그로만 남기고 본문에는 노출하지 않는다
            ServiceError::Unavailable(_) | ServiceError::Io(_) | ServiceError::Malformed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

// endregion: --- Service Error

// region:    --- Tests

#[cfg(test)]
mod tests {
    use super::*;

    /// 오류 종류별 HTTP 상태 코드 매핑 검증
    #[test]
    fn test_error_status_mapping() {
        let response =
            ServiceError::InvalidRequest("Keyword query parameter is required".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ServiceError::NotFound("No item found with that ID.".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ServiceError::Unavailable(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// endregion: --- Tests
