// region:    --- Imports
use crate::config::Config;
use crate::error::ServiceError;
use sqlx::{Connection, PgConnection};
use std::future::Future;
use std::pin::Pin;
use tracing::{error, warn};

// endregion: --- Imports

// region:    --- Connection Lifecycle

/// 경매 컬렉션 단위 작업 실행 헬퍼
/// 1. 매 호출마다 새 연결을 연다 (풀링 없음)
/// 2. 작업 클로저에 연결을 넘겨 실행한다
/// 3. 성공/실패와 무관하게 연결을 닫은 뒤 결과를 반환한다
pub async fn with_auctions<F, T>(config: &Config, op: F) -> Result<T, ServiceError>
where
    F: for<'c> FnOnce(
        &'c mut PgConnection,
    ) -> Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'c>>,
{
    let mut conn = match PgConnection::connect(&config.database_url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("{:<12} --> 데이터베이스 연결 실패: {:?}", "Store", e);
            return Err(e.into());
        }
    };

    let result = op(&mut conn).await;

    // 연결 종료 실패는 작업 결과를 덮어쓰지 않는다
    if let Err(e) = conn.close().await {
        warn!("{:<12} --> 연결 종료 실패: {:?}", "Store", e);
    }

    if let Err(e) = &result {
        error!("{:<12} --> 데이터베이스 작업 실패: {:?}", "Store", e);
    }
    result
}

// endregion: --- Connection Lifecycle

// region:    --- Schema Bootstrap

/// 스키마 초기화 (멱등, 각 바이너리 기동 시 1회 실행)
pub async fn ensure_schema(config: &Config) -> Result<(), ServiceError> {
    let schema_sql = include_str!("../sql/01-create-schema.sql");
    with_auctions(config, move |conn| {
        Box::pin(async move {
            for statement in schema_sql.split(';') {
                let statement = statement.trim();
                if !statement.is_empty() {
                    sqlx::query(statement).execute(&mut *conn).await?;
                }
            }
            Ok(())
        })
    })
    .await
}

// endregion: --- Schema Bootstrap
