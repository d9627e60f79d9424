// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use lmscope::StaticLm;
use rstest::rstest;

fn make_resolution(model: &str, source: ResolutionSource) -> Resolution {
    Resolution {
        lm: StaticLm::handle(model, "test"),
        source,
    }
}

#[test]
fn test_record_and_retrieve() {
    let log = ResolutionLog::new();

    log.record(&make_resolution("haiku", ResolutionSource::Scope));

    assert_eq!(log.len(), 1);
    let resolutions = log.resolutions();
    assert_eq!(resolutions[0].seq, 0);
    assert_eq!(resolutions[0].model, "haiku");
    assert_eq!(resolutions[0].provider, "test");
    assert_eq!(resolutions[0].source, ResolutionSource::Scope);
}

#[rstest]
#[case(1, 1)]
#[case(5, 2)]
#[case(10, 5)]
#[case(3, 10)]
fn test_last_n(#[case] total: usize, #[case] n: usize) {
    let log = ResolutionLog::new();

    for i in 0..total {
        log.record(&make_resolution(
            &format!("model-{}", i),
            ResolutionSource::Default,
        ));
    }

    let last = log.last(n);
    let expected_len = n.min(total);
    assert_eq!(last.len(), expected_len);

    // Verify the last items are in order
    if expected_len > 0 {
        let start = total.saturating_sub(n);
        for (i, record) in last.iter().enumerate() {
            assert_eq!(record.model, format!("model-{}", start + i));
        }
    }
}

#[test]
fn test_count_and_tier_filters() {
    let log = ResolutionLog::new();
    log.record(&make_resolution("a", ResolutionSource::Instance));
    log.record(&make_resolution("b", ResolutionSource::Scope));
    log.record(&make_resolution("b", ResolutionSource::Scope));
    log.record(&make_resolution("c", ResolutionSource::Default));

    assert_eq!(log.count(|r| r.model == "b"), 2);
    assert_eq!(log.from_tier(ResolutionSource::Scope).len(), 2);
    assert_eq!(log.from_tier(ResolutionSource::Instance).len(), 1);
    assert_eq!(log.find_by_model("c").len(), 1);
    assert!(log.find_by_model("missing").is_empty());
}

#[test]
fn test_clear_and_empty() {
    let log = ResolutionLog::new();
    assert!(log.is_empty());

    log.record(&make_resolution("a", ResolutionSource::Default));
    assert!(!log.is_empty());

    log.clear();
    assert!(log.is_empty());
}

#[test]
fn test_clones_share_the_same_buffer() {
    let log = ResolutionLog::new();
    let alias = log.clone();

    log.record(&make_resolution("shared", ResolutionSource::Default));

    assert_eq!(alias.len(), 1);
    assert_eq!(alias.resolutions()[0].model, "shared");
}

#[test]
fn test_file_log_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resolutions.jsonl");

    let log = ResolutionLog::with_file(&path).unwrap();
    log.record(&make_resolution("haiku", ResolutionSource::Scope));
    log.record(&make_resolution("opus", ResolutionSource::Instance));

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: ResolvedLm = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first.model, "haiku");
    assert_eq!(first.source, ResolutionSource::Scope);
}

#[test]
fn test_seq_numbers_are_contiguous() {
    let log = ResolutionLog::new();
    for _ in 0..4 {
        log.record(&make_resolution("m", ResolutionSource::Default));
    }

    let seqs: Vec<u64> = log.resolutions().iter().map(|r| r.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2, 3]);
}
