use super::*;
use tempfile::TempDir;

fn global_for(dir: &TempDir) -> GlobalArgs {
    GlobalArgs {
        project_dir: dir.path().display().to_string(),
        config: None,
        folder: None,
        database: None,
        quiet: false,
    }
}

#[test]
fn test_defaults_without_config_file() {
    let dir = TempDir::new().unwrap();
    let (options, _) = prepare(&global_for(&dir)).unwrap();

    assert_eq!(options.folder, dir.path().join("migrations"));
    assert_eq!(options.database, "preen.duckdb");
}

#[test]
fn test_config_file_is_picked_up_from_project_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("preen.yml"),
        "folder: sql\ndatabase:\n  path: app.duckdb\n",
    )
    .unwrap();

    let (options, _) = prepare(&global_for(&dir)).unwrap();
    assert_eq!(options.folder, dir.path().join("sql"));
    assert_eq!(options.database, "app.duckdb");
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("preen.yml"),
        "folder: sql\ndatabase:\n  path: app.duckdb\n",
    )
    .unwrap();

    let mut global = global_for(&dir);
    global.folder = Some("other".to_string());
    global.database = Some(":memory:".to_string());

    let (options, _) = prepare(&global).unwrap();
    assert_eq!(options.folder, dir.path().join("other"));
    assert_eq!(options.database, ":memory:");
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    let mut global = global_for(&dir);
    global.config = Some(dir.path().join("missing.yml").display().to_string());

    assert!(prepare(&global).is_err());
}

#[test]
fn test_absolute_folder_flag_is_kept() {
    let dir = TempDir::new().unwrap();
    let mut global = global_for(&dir);
    global.folder = Some("/opt/migrations".to_string());

    let (options, _) = prepare(&global).unwrap();
    assert_eq!(options.folder, std::path::Path::new("/opt/migrations"));
}
