// region:    --- Config

/// 기본 데이터베이스 접속 주소
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/auction_db";

/// 기본 서버 포트
pub const DEFAULT_PORT: u16 = 3000;

/// 환경 변수 기반 설정
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    /// 환경 변수에서 설정 로드 (미설정 시 기본값 사용)
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { database_url, port }
    }
}

// endregion: --- Config
