//! End-to-end tests for the configdocs binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[settings]]
name = "dbms.memory.heap.max_size"
description = "Maximum heap size. Accepts units."
default = "512m"

[[settings]]
name = "dbms.tx_log.rotation.size"
description = "Log rotation threshold."
deprecated = true
replaced_by = "db.tx_log.rotation.size"

[[settings]]
name = "dbms.index.fulltext.default_analyzer"
description = "Fulltext analyzer."
internal = true

[[settings]]
name = "metrics.enabled"
description = "Enable metrics."
dynamic = true
"#;

/// Workspace with a catalog and an empty config dir.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.toml"), CATALOG).unwrap();
    dir
}

#[allow(deprecated)]
fn cli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("configdocs").unwrap();
    cmd.current_dir(dir)
        .env_remove("CONFIGDOCS_CATALOG_PATH")
        .arg("--config")
        .arg(dir.join("no-config.toml"))
        .arg("--catalog")
        .arg(dir.join("settings.toml"));
    cmd
}

#[test]
fn test_help() {
    let dir = workspace();
    cli(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--deprecated-only"))
        .stdout(predicate::str::contains("--unsupported"));
}

#[test]
fn test_defaults_warn_and_render_to_stdout() {
    let dir = workspace();
    cli(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: configdocs"))
        .stdout(predicate::str::contains(
            "[x] No ID provided (--id=my-id), using default: 'settings-reference'",
        ))
        .stdout(predicate::str::contains("[[settings-reference]]"))
        .stdout(predicate::str::contains(".Settings reference"))
        .stdout(predicate::str::contains("[[config_dbms.memory.heap.max_size]]"))
        .stdout(predicate::str::contains("dbms.tx_log.rotation.size"))
        .stdout(predicate::str::contains("dbms.index.fulltext.default_analyzer").not());
}

#[test]
fn test_supplied_options_suppress_warnings() {
    let dir = workspace();
    cli(dir.path())
        .args(["--id=ref", "--title=Reference", "--id-prefix=cfg_"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] No").not())
        .stdout(predicate::str::contains("[[ref]]\n.Reference"))
        .stdout(predicate::str::contains("<<cfg_metrics.enabled,metrics.enabled>>"));
}

#[test]
fn test_prefix_with_unsupported_includes_internal() {
    let dir = workspace();
    cli(dir.path())
        .args(["--prefix=dbms.", "--unsupported"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dbms.index.fulltext.default_analyzer"))
        .stdout(predicate::str::contains("metrics.enabled").not());
}

#[test]
fn test_deprecated_false_excludes_deprecated() {
    let dir = workspace();
    cli(dir.path())
        .arg("--deprecated=false")
        .assert()
        .success()
        .stdout(predicate::str::contains("dbms.tx_log.rotation.size").not())
        .stdout(predicate::str::contains("dbms.memory.heap.max_size"));
}

#[test]
fn test_names_selects_listed() {
    let dir = workspace();
    cli(dir.path())
        .arg("--names=metrics.enabled,dbms.memory.heap.max_size")
        .assert()
        .success()
        .stdout(predicate::str::contains("[[config_metrics.enabled]]"))
        .stdout(predicate::str::contains("[[config_dbms.memory.heap.max_size]]"))
        .stdout(predicate::str::contains("dbms.tx_log.rotation.size").not());
}

#[test]
fn test_writes_out_file_creating_directories() {
    let dir = workspace();
    let out = dir.path().join("build/docs/settings.adoc");

    cli(dir.path())
        .arg("--deprecated-only")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saving docs in '"))
        .stdout(predicate::str::contains("[[settings-reference]]").not());

    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.contains("[[config_dbms.tx_log.rotation.size]]"));
    assert!(!doc.contains("metrics.enabled"));
}

#[test]
fn test_no_matching_setting_fails() {
    let dir = workspace();
    let out = dir.path().join("out/settings.adoc");

    cli(dir.path())
        .arg("--name=does.not.exist")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no matching element"));

    assert!(!out.exists());
}

#[test]
fn test_internal_only_name_fails_without_unsupported() {
    let dir = workspace();
    cli(dir.path())
        .args(["--name=dbms.index.fulltext.default_analyzer", "--internal=true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no matching element"));
}

#[test]
fn test_missing_catalog_fails() {
    let dir = TempDir::new().unwrap();
    cli(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_catalog_from_config_file() {
    let dir = workspace();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[catalog]\npath = \"settings.toml\"\n").unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("configdocs").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CONFIGDOCS_CATALOG_PATH")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("metrics.enabled"));
}
