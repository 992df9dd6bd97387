//! File logging. Kept in its own binary since the subscriber is global.

use mindwell::logging::init_logging;

#[test]
fn test_init_logging_creates_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("mindwell.log");

    init_logging(&path).unwrap();
    tracing::warn!("backend unreachable");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("mindwell starting"));
    assert!(contents.contains("backend unreachable"));

    // A second subscriber cannot be installed.
    assert!(init_logging(&path).is_err());
}
