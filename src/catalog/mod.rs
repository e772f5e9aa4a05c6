// region:    --- Imports
use crate::config::Config;
use crate::error::ServiceError;
use crate::store;
use tracing::info;

pub mod model;
pub mod queries;

use model::{Auction, AuctionDraft, AuctionPatch};

// endregion: --- Imports

// region:    --- Search

/// 키워드 검색: 제목 또는 설명에 키워드가 부분 문자열로 포함된 레코드 전체 조회
pub async fn search_auctions(
    config: &Config,
    keyword: &str,
) -> Result<Vec<Auction>, ServiceError> {
    info!("{:<12} --> 경매 검색 keyword: {}", "Query", keyword);
    let pattern = queries::contains_pattern(keyword);
    store::with_auctions(config, move |conn| {
        Box::pin(async move {
            sqlx::query_as::<_, Auction>(queries::SEARCH_AUCTIONS)
                .bind(pattern)
                .fetch_all(&mut *conn)
                .await
                .map_err(ServiceError::from)
        })
    })
    .await
}

// endregion: --- Search

// region:    --- Record Operations

/// 단건 조회
pub async fn get_auction(config: &Config, auction_id: i64) -> Result<Auction, ServiceError> {
    info!("{:<12} --> 경매 조회 id: {}", "Query", auction_id);
    store::with_auctions(config, move |conn| {
        Box::pin(async move {
            sqlx::query_as::<_, Auction>(queries::GET_AUCTION)
                .bind(auction_id)
                .fetch_optional(&mut *conn)
                .await?
                .ok_or_else(|| {
                    ServiceError::NotFound("No item found with that ID.".to_string())
                })
        })
    })
    .await
}

/// 전체 조회
pub async fn get_all_auctions(config: &Config) -> Result<Vec<Auction>, ServiceError> {
    info!("{:<12} --> 경매 전체 조회", "Query");
    store::with_auctions(config, move |conn| {
        Box::pin(async move {
            sqlx::query_as::<_, Auction>(queries::GET_ALL_AUCTIONS)
                .fetch_all(&mut *conn)
                .await
                .map_err(ServiceError::from)
        })
    })
    .await
}

/// 단건 등록 (식별자는 스토어가 발급)
pub async fn insert_auction(
    config: &Config,
    draft: &AuctionDraft,
) -> Result<Auction, ServiceError> {
    info!("{:<12} --> 경매 등록: {}", "Command", draft.title);
    let draft = draft.clone();
    store::with_auctions(config, move |conn| {
        Box::pin(async move {
            sqlx::query_as::<_, Auction>(queries::INSERT_AUCTION)
                .bind(draft.title)
                .bind(draft.description)
                .bind(draft.starting_price)
                .bind(draft.reserve_price)
                .fetch_one(&mut *conn)
                .await
                .map_err(ServiceError::from)
        })
    })
    .await
}

/// 일괄 등록: 시드 데이터를 단일 벌크 구문으로 삽입, 삽입 건수 반환
pub async fn insert_auctions(
    config: &Config,
    drafts: &[AuctionDraft],
) -> Result<u64, ServiceError> {
    info!("{:<12} --> 경매 일괄 등록 {}건", "Command", drafts.len());
    let titles: Vec<String> = drafts.iter().map(|d| d.title.clone()).collect();
    let descriptions: Vec<String> = drafts.iter().map(|d| d.description.clone()).collect();
    let starting_prices: Vec<f64> = drafts.iter().map(|d| d.starting_price).collect();
    let reserve_prices: Vec<f64> = drafts.iter().map(|d| d.reserve_price).collect();
    store::with_auctions(config, move |conn| {
        Box::pin(async move {
            let result = sqlx::query(queries::INSERT_AUCTIONS)
                .bind(titles)
                .bind(descriptions)
                .bind(starting_prices)
                .bind(reserve_prices)
                .execute(&mut *conn)
                .await?;
            Ok(result.rows_affected())
        })
    })
    .await
}

/// 부분 갱신: 지정된 필드만 덮어쓰고 나머지는 기존 값 유지
pub async fn update_auction(
    config: &Config,
    auction_id: i64,
    patch: AuctionPatch,
) -> Result<(), ServiceError> {
    info!("{:<12} --> 경매 갱신 id: {}", "Command", auction_id);
    store::with_auctions(config, move |conn| {
        Box::pin(async move {
            sqlx::query_scalar::<_, i64>(queries::UPDATE_AUCTION)
                .bind(auction_id)
                .bind(patch.title)
                .bind(patch.description)
                .bind(patch.starting_price)
                .bind(patch.reserve_price)
                .fetch_optional(&mut *conn)
                .await?
                .map(|_| ())
                .ok_or_else(|| {
                    ServiceError::NotFound("No item found with that ID.".to_string())
                })
        })
    })
    .await
}

/// 단건 삭제
pub async fn delete_auction(config: &Config, auction_id: i64) -> Result<(), ServiceError> {
    info!("{:<12} --> 경매 삭제 id: {}", "Command", auction_id);
    store::with_auctions(config, move |conn| {
        Box::pin(async move {
            let result = sqlx::query(queries::DELETE_AUCTION)
                .bind(auction_id)
                .execute(&mut *conn)
                .await?;
            if result.rows_affected() > 0 {
                Ok(())
            } else {
                Err(ServiceError::NotFound(format!(
                    "No item found with ID {auction_id}."
                )))
            }
        })
    })
    .await
}

/// 전체 삭제, 삭제 건수 반환
pub async fn delete_all_auctions(config: &Config) -> Result<u64, ServiceError> {
    info!("{:<12} --> 경매 전체 삭제", "Command");
    store::with_auctions(config, move |conn| {
        Box::pin(async move {
            let result = sqlx::query(queries::DELETE_ALL_AUCTIONS)
                .execute(&mut *conn)
                .await?;
            Ok(result.rows_affected())
        })
    })
    .await
}

// endregion: --- Record Operations
