use gridline_engine::game::GameStatus;
use gridline_engine::logger::{format_match_id, MatchLogger, MatchRecord, MoveRecord};
use gridline_engine::symbol::GameSymbol;

fn sample_record(id: &str) -> MatchRecord {
    MatchRecord {
        match_id: id.to_string(),
        seed: Some(42),
        size: 3,
        moves: vec![
            MoveRecord {
                turn: 0,
                symbol: GameSymbol::X,
                row: 0,
                column: 0,
            },
            MoveRecord {
                turn: 1,
                symbol: GameSymbol::O,
                row: 1,
                column: 1,
            },
        ],
        status: GameStatus::InProgress,
        winner: None,
        ts: None,
        meta: None,
    }
}

#[test]
fn match_id_format_is_date_dash_sequence() {
    assert_eq!(format_match_id("20250101", 7), "20250101-000007");
    assert_eq!(format_match_id("20250101", 123456), "20250101-123456");
}

#[test]
fn logger_hands_out_sequential_ids() {
    let mut logger = MatchLogger::with_date_for_test("20250101");
    assert_eq!(logger.next_id(), "20250101-000001");
    assert_eq!(logger.next_id(), "20250101-000002");
}

#[test]
fn record_round_trips_through_json() {
    let record = sample_record("20250101-000001");
    let json = serde_json::to_string(&record).unwrap();
    let back: MatchRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn logger_writes_one_json_line_per_record_with_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matches.jsonl");

    let mut logger = MatchLogger::create(&path).unwrap();
    let mut record = sample_record(&logger.next_id());
    record.status = GameStatus::Finished;
    record.winner = Some(GameSymbol::X);
    logger.write(&record).unwrap();
    let second = sample_record(&logger.next_id());
    logger.write(&second).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: MatchRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first.winner, Some(GameSymbol::X));
    // timestamp injected on write
    assert!(first.ts.is_some());
}

#[test]
fn logger_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("histories").join("matches.jsonl");
    let logger = MatchLogger::create(&path);
    assert!(logger.is_ok());
    assert!(path.exists());
}
