// region:    --- Imports
use auction_catalog::config::Config;
use auction_catalog::{handlers, store};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Main

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = Arc::new(Config::from_env());

    // 스키마 초기화
    if let Err(e) = store::ensure_schema(&config).await {
        error!("{:<12} --> 스키마 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 스키마 초기화 성공", "Main");

    // 라우터 설정
    let routes_all = handlers::routes(Arc::clone(&config));

    // 리스너 생성
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}

// endregion: --- Main
