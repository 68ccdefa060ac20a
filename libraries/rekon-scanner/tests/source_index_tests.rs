//! Integration tests for building the Source Index from disk


use rekon_scanner::{build_source_index, FileScanner, ScanError};
use tempfile::TempDir;
use test_helpers::{init_tracing, slash_path, touch};

#[test]
fn test_index_spans_all_roots() {
    init_tracing();
    let house = TempDir::new().unwrap();
    let techno = TempDir::new().unwrap();
    touch(house.path(), "Artist/intro.mp3");
    touch(house.path(), "Artist/Album/deep cut.flac");
    touch(techno.path(), "warehouse-2.wav");

    let roots = vec![slash_path(house.path()), slash_path(techno.path())];
    let index = build_source_index(&roots).unwrap();

    assert_eq!(index.len(), 3);
    assert_eq!(
        index.get("intro.mp3"),
        Some(format!("{}/Artist/intro.mp3", roots[0]).as_str())
    );
    assert_eq!(
        index.get("deep cut.flac"),
        Some(format!("{}/Artist/Album/deep cut.flac", roots[0]).as_str())
    );
    // Disk files are keyed by their own Root Name too
    assert_eq!(
        index.get("warehouse.wav"),
        Some(format!("{}/warehouse-2.wav", roots[1]).as_str())
    );
}

#[test]
fn test_later_root_wins_on_collision() {
    init_tracing();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    touch(first.path(), "a.mp3");
    touch(second.path(), "a-1.mp3");

    let roots = vec![slash_path(first.path()), slash_path(second.path())];
    let index = build_source_index(&roots).unwrap();

    assert_eq!(index.len(), 1);
    assert_eq!(
        index.get("a.mp3"),
        Some(format!("{}/a-1.mp3", roots[1]).as_str())
    );
}

#[test]
fn test_missing_and_empty_directories_are_not_errors() {
    init_tracing();
    let empty = TempDir::new().unwrap();
    let roots = vec![
        slash_path(empty.path()),
        format!("{}/does-not-exist", slash_path(empty.path())),
    ];

    let index = build_source_index(&roots).unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_empty_root_is_a_configuration_error() {
    let roots = vec![String::new()];
    assert!(matches!(
        build_source_index(&roots).unwrap_err(),
        ScanError::EmptyRoot
    ));
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_only_when_following_links() {
    init_tracing();
    let music = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    touch(elsewhere.path(), "linked.mp3");
    std::os::unix::fs::symlink(elsewhere.path(), music.path().join("external")).unwrap();

    let roots = vec![slash_path(music.path())];
    let index = FileScanner::new().build_index(&roots).unwrap();
    assert!(!index.contains("linked.mp3"));

    let index = FileScanner::new()
        .follow_links(true)
        .build_index(&roots)
        .unwrap();
    assert_eq!(
        index.get("linked.mp3"),
        Some(format!("{}/external/linked.mp3", roots[0]).as_str())
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_an_expansion_error() {
    use std::os::unix::fs::PermissionsExt;

    init_tracing();
    let music = TempDir::new().unwrap();
    touch(music.path(), "locked/a.mp3");
    let locked = music.path().join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Running as root bypasses permission checks; nothing to assert then
    let readable = std::fs::read_dir(&locked).is_ok();
    let result = build_source_index(&[slash_path(music.path())]);

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    if !readable {
        assert!(matches!(result.unwrap_err(), ScanError::Walk { .. }));
    }
}
