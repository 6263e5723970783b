use gridline_cli::exit_code;
use gridline_engine::logger::MatchRecord;

#[test]
fn sim_writes_replayable_history_through_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("history.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = gridline_cli::run(
        vec![
            "gridline", "sim", "--games", "4", "--seed", "9", "--output", &path_str,
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, exit_code::SUCCESS);

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Games: 4"));
    assert!(output.contains(&path_str));

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: Vec<MatchRecord> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 4);

    // match ids are sequential within a session
    let seqs: Vec<&str> = records
        .iter()
        .map(|r| r.match_id.rsplit('-').next().unwrap())
        .collect();
    assert_eq!(seqs, vec!["000001", "000002", "000003", "000004"]);

    for record in &records {
        assert!(record.status.is_terminal());
        assert!(record.ts.is_some());
        // moves replay onto a board of the recorded size
        for mv in &record.moves {
            assert!(mv.row < record.size && mv.column < record.size);
        }
    }
}
