use sizedupe::config::SessionConfig;
use sizedupe::duplicates::SortOrder;
use sizedupe::error::ExitCode;
use sizedupe::output::JsonOutput;
use sizedupe::session::Session;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_json_report_for_scenario() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"abcd").unwrap();
    fs::write(dir.path().join("b.txt"), b"abcd").unwrap();
    fs::write(dir.path().join("c.txt"), b"wxyz").unwrap();
    fs::write(dir.path().join("d.log"), b"abcd").unwrap();

    let config = SessionConfig::new(dir.path().to_path_buf())
        .with_extension("txt")
        .with_sort(SortOrder::Ascending);
    let mut session = Session::new(config);
    let detection = session.detect().unwrap();

    let output = JsonOutput::new(session.numbered(), &detection, ExitCode::Success);
    let mut buffer = Vec::new();
    output.write_to(&mut buffer).unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    let sizes = parsed["sizes"].as_array().unwrap();
    assert_eq!(sizes.len(), 1);
    assert_eq!(sizes[0]["size"].as_u64(), Some(4));

    let files = sizes[0]["groups"][0]["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["number"].as_u64(), Some(1));
    assert!(files[0]["path"].as_str().unwrap().ends_with("a.txt"));
    assert!(files[1]["path"].as_str().unwrap().ends_with("b.txt"));

    assert_eq!(parsed["summary"]["duplicate_groups"].as_u64(), Some(1));
    assert_eq!(parsed["summary"]["exit_code"].as_i64(), Some(0));
}

#[test]
fn test_json_report_empty_directory() {
    let dir = tempdir().unwrap();
    let mut session = Session::new(SessionConfig::new(dir.path().to_path_buf()));
    let detection = session.detect().unwrap();

    let output = JsonOutput::new(session.numbered(), &detection, ExitCode::Success);
    let json = output.to_json_pretty().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(parsed["sizes"].as_array().unwrap().is_empty());
    assert_eq!(parsed["summary"]["buckets"].as_u64(), Some(0));
}
