// region:    --- Imports
use auction_catalog::cli::{self, Command, Prompter};
use auction_catalog::config::Config;
use auction_catalog::error::ServiceError;
use auction_catalog::store;
use tracing::error;

// endregion: --- Imports

// region:    --- Main

/// 데이터 관리 도구: 프로세스당 명령 하나를 수행하고 종료한다
#[tokio::main]
async fn main() {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 알 수 없는 명령이나 누락은 사용법 안내 후 정상 종료
    let token = std::env::args().nth(1);
    let Some(command) = token.as_deref().and_then(Command::parse) else {
        println!("{}", cli::USAGE);
        return;
    };

    let config = Config::from_env();

    if let Err(e) = store::ensure_schema(&config).await {
        error!("{:<12} --> 스키마 초기화 실패: {:?}", "Cli", e);
        std::process::exit(1);
    }

    let mut prompter = Prompter::stdio();
    match cli::run(&config, command, &mut prompter).await {
        Ok(()) => {}
        // 입력 오류와 미존재 레코드는 안내 메시지 출력 후 정상 종료
        Err(e @ (ServiceError::InvalidRequest(_) | ServiceError::NotFound(_))) => {
            println!("{e}");
        }
        // 스토어/입출력 장애는 종료 코드 1
        Err(e) => {
            error!("{:<12} --> 명령 실행 실패: {:?}", "Cli", e);
            std::process::exit(1);
        }
    }
}

// endregion: --- Main
