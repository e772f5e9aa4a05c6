// region:    --- Imports
use crate::catalog;
use crate::catalog::model::{parse_auction_id, AuctionDraft, AuctionPatch};
use crate::config::Config;
use crate::error::ServiceError;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::path::Path;

// endregion: --- Imports

// region:    --- Commands

/// 시드 데이터 파일 고정 경로
pub const SEED_FILE: &str = "data/auction_data.json";

/// 사용법 안내문
pub const USAGE: &str = "\
Usage: catalog-cli <command>
Commands:
  seed               Seed data from data/auction_data.json
  deleteAllData      Delete all data
  addItem            Add a single item
  deleteItem         Delete a single item
  updateItem         Update a single item
  getItem            Retrieve a single item
  getAllItems        Retrieve all items";

/// 데이터 관리 명령
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Seed,
    DeleteAllData,
    AddItem,
    DeleteItem,
    UpdateItem,
    GetItem,
    GetAllItems,
}

impl Command {
    /// 명령 토큰 해석 (토큰은 원 도구와 동일한 camelCase)
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "seed" => Some(Command::Seed),
            "deleteAllData" => Some(Command::DeleteAllData),
            "addItem" => Some(Command::AddItem),
            "deleteItem" => Some(Command::DeleteItem),
            "updateItem" => Some(Command::UpdateItem),
            "getItem" => Some(Command::GetItem),
            "getAllItems" => Some(Command::GetAllItems),
            _ => None,
        }
    }
}

// endregion: --- Commands

// region:    --- Prompter

/// 대화형 입력 수집기
/// 스토어 접근과 분리되어 있어 테스트에서 준비된 입력을 주입할 수 있다
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Prompter {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// 프롬프트 출력 후 한 줄 입력 (앞뒤 공백 제거)
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Y/N 확인 (Y 또는 y만 승인으로 처리)
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{message} (Y/N): "))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}

/// 가격 입력 해석: 숫자가 아니면 스토어 접근 없이 거부
fn parse_price(field: &str, raw: &str) -> Result<f64, ServiceError> {
    raw.parse::<f64>().map_err(|_| {
        ServiceError::InvalidRequest(format!("{field} must be a number, got '{raw}'."))
    })
}

/// 신규 레코드 입력 수집 (모든 필드 필수)
pub fn collect_draft<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<AuctionDraft, ServiceError> {
    let title = prompter.ask("Title: ")?;
    let description = prompter.ask("Description: ")?;
    let starting_price = parse_price("Starting Price", &prompter.ask("Starting Price: ")?)?;
    let reserve_price = parse_price("Reserve Price", &prompter.ask("Reserve Price: ")?)?;
    Ok(AuctionDraft {
        title,
        description,
        starting_price,
        reserve_price,
    })
}

/// 갱신 입력 수집: 공란은 기존 값 유지
pub fn collect_patch<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<AuctionPatch, ServiceError> {
    let mut patch = AuctionPatch::default();

    let title = prompter.ask("Title (leave blank to keep current): ")?;
    if !title.is_empty() {
        patch.title = Some(title);
    }

    let description = prompter.ask("Description (leave blank to keep current): ")?;
    if !description.is_empty() {
        patch.description = Some(description);
    }

    let starting_price = prompter.ask("Starting Price (leave blank to keep current): ")?;
    if !starting_price.is_empty() {
        patch.starting_price = Some(parse_price("Starting Price", &starting_price)?);
    }

    let reserve_price = prompter.ask("Reserve Price (leave blank to keep current): ")?;
    if !reserve_price.is_empty() {
        patch.reserve_price = Some(parse_price("Reserve Price", &reserve_price)?);
    }

    Ok(patch)
}

// endregion: --- Prompter

// region:    --- Seed File

/// 시드 파일 로드 (식별자 없는 레코드 객체 배열)
pub fn load_seed_file(path: &Path) -> Result<Vec<AuctionDraft>, ServiceError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

// endregion: --- Seed File

// region:    --- Dispatch

/// 명령 실행: 명령당 단일 스토어 작업, 결과는 콘솔 출력
pub async fn run<R: BufRead, W: Write>(
    config: &Config,
    command: Command,
    prompter: &mut Prompter<R, W>,
) -> Result<(), ServiceError> {
    match command {
        Command::Seed => {
            let drafts = load_seed_file(Path::new(SEED_FILE))?;
            let count = catalog::insert_auctions(config, &drafts).await?;
            println!("Data seeded successfully from {SEED_FILE} ({count} items).");
        }
        Command::DeleteAllData => {
            if prompter.confirm("Are you sure you want to delete all data?")? {
                let count = catalog::delete_all_auctions(config).await?;
                println!("Successfully deleted {count} items.");
            } else {
                println!("Deletion canceled.");
            }
        }
        Command::AddItem => {
            let draft = collect_draft(prompter)?;
            let auction = catalog::insert_auction(config, &draft).await?;
            println!(
                "New item added successfully: {}",
                serde_json::to_string_pretty(&auction)?
            );
        }
        Command::DeleteItem => {
            let id = parse_auction_id(&prompter.ask("Enter the ID of the item to delete: ")?)?;
            catalog::delete_auction(config, id).await?;
            println!("Item with ID {id} deleted successfully.");
        }
        Command::UpdateItem => {
            let id = parse_auction_id(&prompter.ask("Enter the ID of the item to update: ")?)?;
            let patch = collect_patch(prompter)?;
            catalog::update_auction(config, id, patch.clone()).await?;
            println!(
                "Item updated successfully: {}",
                serde_json::to_string(&patch)?
            );
        }
        Command::GetItem => {
            let id =
                parse_auction_id(&prompter.ask("Enter the ID of the item to retrieve: ")?)?;
            let auction = catalog::get_auction(config, id).await?;
            println!("Retrieved item: {}", serde_json::to_string_pretty(&auction)?);
        }
        Command::GetAllItems => {
            let auctions = catalog::get_all_auctions(config).await?;
            println!(
                "Retrieved items: {}",
                serde_json::to_string_pretty(&auctions)?
            );
        }
    }
    Ok(())
}

// endregion: --- Dispatch

// region:    --- Tests


// endregion: --- Tests
