//! Tests for scoped document I/O

use pretty_assertions::assert_eq;
use relo_fs::{read_text, write_text, Error};
use tempfile::TempDir;

#[test]
fn round_trip_preserves_bytes_and_line_endings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.tsx");
    let content = "line-1\r\nline-2\nline-3\r\n\ttrailing\n";

    write_text(&path, content).unwrap();
    assert_eq!(read_text(&path).unwrap(), content);
}

#[test]
fn write_replaces_existing_content_fully() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");

    write_text(&path, "a much longer original content body").unwrap();
    write_text(&path, "short").unwrap();

    assert_eq!(read_text(&path).unwrap(), "short");
}

#[test]
fn write_leaves_no_temp_files_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");

    write_text(&path, "content").unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["doc.txt".to_string()]);
}

#[test]
fn read_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");

    let err = read_text(&path).unwrap_err();
    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
