//! Common test utilities and fixtures
#![allow(dead_code)]
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Route log output through the test harness
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("rekon_cli=debug,rekon_reconcile=debug,rekon_scanner=debug")
            .with_test_writer()
            .init();
    });
}

/// Create an empty file, and its parent directories, under `root`
pub fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, b"").unwrap();
    path
}

/// Path as a forward-slash string, the form the scanner reports
pub fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// A library XML document holding `tracks` as `(id, file name, rating)`
pub fn library_xml(tracks: &[(&str, &str, &str)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<DJ_PLAYLISTS Version=\"1.0.0\">\n");
    xml.push_str("  <PRODUCT Name=\"rekordbox\" Version=\"6.8.5\"/>\n");
    xml.push_str(&format!("  <COLLECTION Entries=\"{}\">\n", tracks.len()));
    for (id, file, rating) in tracks {
        xml.push_str(&format!(
            "    <TRACK TrackID=\"{id}\" Name=\"{file}\" Rating=\"{rating}\" \
             Location=\"file://localhost/Users/dj/Old/{file}\"/>\n"
        ));
    }
    xml.push_str("  </COLLECTION>\n");
    xml.push_str("</DJ_PLAYLISTS>\n");
    xml
}
