use std::fs;

use jacks_engine::cards::parse_cards;
use jacks_engine::hand::HandRank;
use jacks_engine::logger::{HandLogger, HandRecord};

fn record(hand_id: &str) -> HandRecord {
    HandRecord {
        hand_id: hand_id.to_string(),
        seed: Some(1),
        bet: 2,
        dealt: parse_cards("J♠ J♥ 2♦ 5♣ 9♥").unwrap(),
        held: [true, true, false, false, false],
        final_hand: parse_cards("J♠ J♥ 3♦ 3♣ 9♦").unwrap(),
        rank: HandRank::TwoPair,
        winnings: 4,
        credits_after: 102,
        ts: None,
        meta: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&record("20250102-000001")).expect("write");
    logger.write(&record("20250102-000002")).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));

    let content = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let back: HandRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(back.rank, HandRank::TwoPair);
    assert_eq!(back.final_hand, record("x").final_hand);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("hands.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&record("20250102-000001")).unwrap();
    assert!(path.exists());
}

#[test]
fn sequential_ids_increment() {
    let mut logger = HandLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ts.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&record("20250102-000010")).expect("write");
    let line = fs::read_to_string(&path).unwrap();
    assert!(line.contains("\"ts\":\""), "ts should be injected");

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = HandRecord {
        ts: Some(preset.clone()),
        ..record("20250102-000011")
    };
    logger.write(&rec2).expect("write2");
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn append_continues_numbering_and_keeps_old_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");

    let mut first = HandLogger::append(&path).expect("open");
    let id1 = first.next_id();
    first.write(&record(&id1)).unwrap();
    let id2 = first.next_id();
    first.write(&record(&id2)).unwrap();
    drop(first);

    let mut second = HandLogger::append(&path).expect("reopen");
    let id3 = second.next_id();
    assert!(id3.ends_with("-000003"), "got {}", id3);
    second.write(&record(&id3)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn create_truncates_previous_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.jsonl");
    fs::write(&path, "{\"hand_id\":\"old\"}\n").unwrap();
    let mut logger = HandLogger::create(&path).unwrap();
    assert!(logger.next_id().ends_with("-000001"));
    logger.write(&record("20250102-000001")).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("\"old\""));
    assert_eq!(content.lines().count(), 1);
}
