mod common;
use common::*;

use iisparse::{ParserSession, ReadStrategy, MAX_RECORDS_PER_CHUNK};

fn fixture_lines(record_count: usize) -> Vec<String> {
    let mut lines = vec![
        "#Software: Microsoft Internet Information Services 8.5".to_string(),
        FULL_DIRECTIVE.to_string(),
    ];
    for i in 0..record_count {
        lines.push(data_line(&format!("10.0.{}.{}", i / 256, i % 256)));
    }
    lines
}

fn write_fixture(record_count: usize) -> tempfile::NamedTempFile {
    let lines = fixture_lines(record_count);
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    write_log(&refs)
}

#[test]
fn test_chunked_batches_are_capped_and_resume() {
    let file = write_fixture(2500);
    let mut session =
        ParserSession::open_with_strategy(file.path(), ReadStrategy::Chunked).unwrap();
    assert!(!session.is_bulk_mode());

    let first = session.read_next().unwrap();
    assert_eq!(first.len(), MAX_RECORDS_PER_CHUNK);
    assert!(session.is_active());

    let second = session.read_next().unwrap();
    assert_eq!(second.len(), MAX_RECORDS_PER_CHUNK);
    assert!(session.is_active());

    let third = session.read_next().unwrap();
    assert_eq!(third.len(), 500);
    assert!(!session.is_active());

    // Resumption is ordered: the second batch picks up exactly where
    // the first stopped.
    assert_eq!(first[0].client_ip.as_deref(), Some("10.0.0.0"));
    assert_eq!(second[0].client_ip.as_deref(), Some("10.0.3.232"));

    session.close();
}

#[test]
fn test_exact_multiple_of_cap_ends_with_empty_batch() {
    let file = write_fixture(2 * MAX_RECORDS_PER_CHUNK);
    let mut session =
        ParserSession::open_with_strategy(file.path(), ReadStrategy::Chunked).unwrap();

    assert_eq!(session.read_next().unwrap().len(), MAX_RECORDS_PER_CHUNK);
    assert!(session.is_active());
    assert_eq!(session.read_next().unwrap().len(), MAX_RECORDS_PER_CHUNK);
    assert!(session.is_active());

    // The cap fired exactly at the last record, so one more call is
    // needed to observe end-of-file.
    let last = session.read_next().unwrap();
    assert!(last.is_empty());
    assert!(!session.is_active());
}

#[test]
fn test_chunked_concatenation_matches_bulk_result() {
    let file = write_fixture(2345);

    let mut bulk = ParserSession::open(file.path()).unwrap();
    assert!(bulk.is_bulk_mode());
    let bulk_records = bulk.read_next().unwrap();

    let mut chunked =
        ParserSession::open_with_strategy(file.path(), ReadStrategy::Chunked).unwrap();
    let mut chunked_records = Vec::new();
    while chunked.is_active() {
        let batch = chunked.read_next().unwrap();
        assert!(batch.len() <= MAX_RECORDS_PER_CHUNK);
        chunked_records.extend(batch);
    }
    chunked.close();

    assert_eq!(chunked_records, bulk_records);
}

#[test]
fn test_batch_cap_counts_decoded_records_not_raw_lines() {
    // Comment lines interleaved with data must not count toward the cap.
    let mut lines = vec![FULL_DIRECTIVE.to_string()];
    for i in 0..MAX_RECORDS_PER_CHUNK + 10 {
        lines.push(format!("#Comment: {}", i));
        lines.push(data_line(&format!("10.1.{}.{}", i / 256, i % 256)));
    }
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = write_log(&refs);

    let mut session =
        ParserSession::open_with_strategy(file.path(), ReadStrategy::Chunked).unwrap();
    let first = session.read_next().unwrap();
    assert_eq!(first.len(), MAX_RECORDS_PER_CHUNK);
    assert!(session.is_active());

    let rest = session.read_next().unwrap();
    assert_eq!(rest.len(), 10);
    assert!(!session.is_active());
}

#[test]
fn test_progress_advances_across_batches() {
    let file = write_fixture(2500);
    let mut session =
        ParserSession::open_with_strategy(file.path(), ReadStrategy::Chunked).unwrap();

    let mut consumed = Vec::new();
    let mut last_estimate = 0;
    while session.is_active() {
        consumed.extend(session.read_next().unwrap());
        let estimate = session.estimate_progress(&consumed).unwrap();
        assert!(estimate >= last_estimate);
        assert!(estimate <= 100);
        last_estimate = estimate;
    }

    // Line terminators and comment lines are not part of the record
    // sums, so the final estimate lands just under 100.
    assert!(last_estimate > 90, "got {}", last_estimate);
}
