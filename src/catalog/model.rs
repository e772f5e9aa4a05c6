// region:    --- Imports
use crate::error::ServiceError;
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Models

// 경매 레코드 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub starting_price: f64,
    pub reserve_price: f64,
}

// 신규 레코드 모델 (식별자는 스토어가 발급)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDraft {
    pub title: String,
    pub description: String,
    pub starting_price: f64,
    pub reserve_price: f64,
}

/// 부분 갱신 모델 (None 필드는 기존 값 유지)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_price: Option<f64>,
}

impl AuctionPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.starting_price.is_none()
            && self.reserve_price.is_none()
    }
}

// endregion: --- Models

// region:    --- Id Validation

/// 스토어 식별자 형식 검증: 양의 64비트 정수만 허용
/// 실패 시 스토어 접근 없이 InvalidRequest 반환
pub fn parse_auction_id(raw: &str) -> Result<i64, ServiceError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            ServiceError::InvalidRequest(
                "Invalid ID format. Please enter a positive numeric ID.".to_string(),
            )
        })
}

// endregion: --- Id Validation

// region:    --- Tests


// endregion: --- Tests
