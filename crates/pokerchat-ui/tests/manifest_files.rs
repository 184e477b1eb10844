use std::fs;

use pokerchat_core::{CardGridRenderer, IconError, Layout, Slot};
use pokerchat_ui::{IconManifest, IconStyle, MANIFEST_ENV, ManifestError, TableError};
use tempfile::tempdir;

#[test]
fn written_manifest_loads_into_tables() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("icons.json");
    let json = serde_json::to_string_pretty(&IconManifest::placeholder()).expect("serialize");
    fs::write(&path, json).expect("write manifest");

    let tables = IconManifest::load_tables(&path).expect("manifest loads");
    let renderer = CardGridRenderer::new(&tables, IconStyle::Plain);
    let hole: Vec<Slot> = ["As", "??"]
        .iter()
        .map(|text| text.parse().expect("slot"))
        .collect();
    assert_eq!(renderer.render_layout(&hole, Layout::HOLE), "A♠ 🂠\n♠ ▒");
}

#[test]
fn missing_file_reports_read_error_with_path() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    let err = IconManifest::load_tables(&path).expect_err("missing file");
    assert!(matches!(err, ManifestError::Read { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn malformed_json_reports_parse_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"upper\": [").expect("write");
    let err = IconManifest::load_tables(&path).expect_err("broken json");
    assert!(matches!(err, ManifestError::Parse { .. }));
}

#[test]
fn incomplete_manifest_names_missing_face_down() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("partial.json");
    let mut manifest = IconManifest::placeholder();
    manifest.lower.remove("face_down");
    fs::write(&path, serde_json::to_string(&manifest).expect("serialize")).expect("write");

    let err = IconManifest::load_tables(&path).expect_err("incomplete");
    assert!(matches!(
        err,
        ManifestError::Invalid {
            source: TableError::Icons(IconError::MissingFaceDown(_)),
            ..
        }
    ));
    assert!(err.to_string().contains("partial.json"));
}

#[test]
fn current_tables_default_to_placeholder() {
    if std::env::var_os(MANIFEST_ENV).is_some() {
        return;
    }
    let current = IconManifest::current().expect("placeholder tables");
    let placeholder = IconManifest::placeholder()
        .into_tables()
        .expect("placeholder validates");
    assert_eq!(current, &placeholder);
}
