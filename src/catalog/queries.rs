/// 키워드 검색 (제목 또는 설명의 대소문자 무시 부분 일치)
pub const SEARCH_AUCTIONS: &str =
    "SELECT id, title, description, starting_price, reserve_price FROM auctions WHERE title ILIKE $1 OR description ILIKE $1";

/// 단건 조회
pub const GET_AUCTION: &str =
    "SELECT id, title, description, starting_price, reserve_price FROM auctions WHERE id = $1";

/// 전체 조회
pub const GET_ALL_AUCTIONS: &str =
    "SELECT id, title, description, starting_price, reserve_price FROM auctions";

/// 단건 등록
pub const INSERT_AUCTION: &str = r#"
    INSERT INTO auctions (title, description, starting_price, reserve_price)
    VALUES ($1, $2, $3, $4)
    RETURNING id, title, description, starting_price, reserve_price
"#;

/// 일괄 등록 (시드 전용, 단일 벌크 구문)
pub const INSERT_AUCTIONS: &str = r#"
    INSERT INTO auctions (title, description, starting_price, reserve_price)
    SELECT * FROM UNNEST($1::text[], $2::text[], $3::float8[], $4::float8[])
"#;

/// 부분 갱신 (NULL 파라미터는 기존 값 유지)
pub const UPDATE_AUCTION: &str = r#"
    UPDATE auctions
    SET title = COALESCE($2, title),
        description = COALESCE($3, description),
        starting_price = COALESCE($4, starting_price),
        reserve_price = COALESCE($5, reserve_price)
    WHERE id = $1
    RETURNING id
"#;

/// 단건 삭제
pub const DELETE_AUCTION: &str = "DELETE FROM auctions WHERE id = $1";

/// 전체 삭제
pub const DELETE_ALL_AUCTIONS: &str = "DELETE FROM auctions";

/// 검색어를 부분 일치 패턴으로 변환
/// LIKE 메타 문자(%, _, \)는 이스케이프하여 문자 그대로 일치시킨다
pub fn contains_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

// region:    --- Tests


// endregion: --- Tests
