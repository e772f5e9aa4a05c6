use auction_catalog::catalog;
use auction_catalog::catalog::model::{AuctionDraft, AuctionPatch};
use auction_catalog::config::Config;
use auction_catalog::error::ServiceError;
use auction_catalog::{handlers, store};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// 트레이싱 초기화
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 테스트용 설정 (DATABASE_URL 미설정 시 스토어 테스트 건너뜀)
fn test_config() -> Option<Config> {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL 미설정: 스토어 통합 테스트 건너뜀");
        return None;
    }
    Some(Config::from_env())
}

fn lamp_fixture() -> Vec<AuctionDraft> {
    vec![AuctionDraft {
        title: "Vintage Lamp".to_string(),
        description: "Brass base".to_string(),
        starting_price: 10.0,
        reserve_price: 25.0,
    }]
}

/// 검색 라우트의 키워드 필수 검증 (스토어 불필요)
#[tokio::test]
async fn test_search_route_requires_keyword() {
    init_tracing();
    let app = handlers::routes(Arc::new(Config::from_env()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Keyword query parameter is required");
}

/// 레코드 수명 주기 전체 시나리오
/// 시드 -> 검색 -> 등록 -> 조회 -> 갱신 -> 삭제 -> 전체 삭제
#[tokio::test]
async fn test_catalog_lifecycle() {
    init_tracing();
    let Some(config) = test_config() else {
        return;
    };

    store::ensure_schema(&config).await.unwrap();
    catalog::delete_all_auctions(&config).await.unwrap();

    // 빈 컬렉션 검색은 오류가 아닌 빈 목록
    let results = catalog::search_auctions(&config, "anything").await.unwrap();
    assert!(results.is_empty());

    // 시드 데이터 등록
    let seeded = catalog::insert_auctions(&config, &lamp_fixture())
        .await
        .unwrap();
    assert_eq!(seeded, 1);

    // 대소문자 무시 부분 일치 검색
    let results = catalog::search_auctions(&config, "lamp").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Vintage Lamp");

    let upper = catalog::search_auctions(&config, "LAMP").await.unwrap();
    assert_eq!(upper, results);

    let none = catalog::search_auctions(&config, "xyz").await.unwrap();
    assert!(none.is_empty());

    // 설명 필드도 검색 대상
    let by_description = catalog::search_auctions(&config, "brass").await.unwrap();
    assert_eq!(by_description.len(), 1);

    // LIKE 메타 문자는 문자 그대로 일치
    let literal = catalog::search_auctions(&config, "%").await.unwrap();
    assert!(literal.is_empty());

    // 단건 등록 후 전체 조회에 포함 확인
    let chair = catalog::insert_auction(
        &config,
        &AuctionDraft {
            title: "Chair".to_string(),
            description: "Oak chair".to_string(),
            starting_price: 15.0,
            reserve_price: 40.0,
        },
    )
    .await
    .unwrap();
    assert!(chair.id > 0);

    let all = catalog::get_all_auctions(&config).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|a| a.id == chair.id && a.title == "Chair"));

    // 전 필드 공란 갱신은 레코드를 변경하지 않는다
    catalog::update_auction(&config, chair.id, AuctionPatch::default())
        .await
        .unwrap();
    let unchanged = catalog::get_auction(&config, chair.id).await.unwrap();
    assert_eq!(unchanged, chair);

    // 부분 갱신은 지정 필드만 덮어쓴다
    let patch = AuctionPatch {
        reserve_price: Some(55.0),
        ..Default::default()
    };
    catalog::update_auction(&config, chair.id, patch).await.unwrap();
    let updated = catalog::get_auction(&config, chair.id).await.unwrap();
    assert_eq!(updated.reserve_price, 55.0);
    assert_eq!(updated.title, chair.title);
    assert_eq!(updated.starting_price, chair.starting_price);

    // 미존재 레코드 갱신/조회/삭제는 NotFound
    let missing = catalog::get_auction(&config, 999_999_999).await;
    assert!(matches!(missing, Err(ServiceError::NotFound(_))));

    catalog::delete_auction(&config, chair.id).await.unwrap();
    let gone = catalog::delete_auction(&config, chair.id).await;
    assert!(matches!(gone, Err(ServiceError::NotFound(_))));

    // 검색 서비스 경유 시나리오
    let app = handlers::routes(Arc::new(config.clone()));
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/search?keyword=lamp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Vintage Lamp");
    assert_eq!(body[0]["startingPrice"], 10.0);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/search?keyword=xyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, serde_json::json!([]));

    // 전체 삭제 후 전체 조회는 빈 목록
    let deleted = catalog::delete_all_auctions(&config).await.unwrap();
    assert_eq!(deleted, 1);
    let all = catalog::get_all_auctions(&config).await.unwrap();
    assert!(all.is_empty());
}
