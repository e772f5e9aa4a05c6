// region:    --- Imports
use crate::catalog;
use crate::config::Config;
use crate::error::ServiceError;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

// endregion: --- Imports

// region:    --- Router

/// 검색 서비스 라우터 구성
pub fn routes(config: Arc<Config>) -> Router {
    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", get(handle_search))
        .layer(cors)
        .with_state(config)
}

// endregion: --- Router

// region:    --- Search Handler

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    keyword: Option<String>,
}

/// 키워드 검색 요청 처리
/// 키워드 누락/공백 시 스토어 접근 없이 400 반환
pub async fn handle_search(
    State(config): State<Arc<Config>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    info!("{:<12} --> 검색 요청 처리 시작: {:?}", "Handler", params);

    let keyword = params.keyword.unwrap_or_default();
    if keyword.is_empty() {
        return ServiceError::InvalidRequest(
            "Keyword query parameter is required".to_string(),
        )
        .into_response();
    }

    match catalog::search_auctions(&config, &keyword).await {
        Ok(results) => Json(results).into_response(),
        Err(e) => e.into_response(),
    }
}

// endregion: --- Search Handler

// region:    --- Tests


// endregion: --- Tests
