use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn explicit_config_sets_root_tag_and_format() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, "text\n").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"[render]
root_tag = "section"

[output]
format = "json"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("typomark");
    cmd.current_dir(dir.path())
        .arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["tag"], "section");
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, "| a |\n| - |\n| b |\n").unwrap();
    fs::write(
        dir.path().join("typomark.toml"),
        "[render]\ntable_class = \"grid\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("typomark");
    cmd.current_dir(dir.path()).arg(input_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("▦ table class=\"grid\""));
}

#[test]
fn extra_params_override_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, "| a |\n| - |\n| b |\n").unwrap();

    let mut cmd = cargo_bin_cmd!("typomark");
    cmd.current_dir(dir.path())
        .arg(input_path.as_os_str())
        .arg("--extra-tables")
        .arg("false");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("table").not())
        .stdout(predicate::str::contains("¶ p"));
}

#[test]
fn boolean_override_before_input_path() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, "text\n").unwrap();

    let mut cmd = cargo_bin_cmd!("typomark");
    cmd.current_dir(dir.path())
        .arg("--extra-show-keys")
        .arg(input_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("⧉ article #0"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, "text\n").unwrap();

    let mut cmd = cargo_bin_cmd!("typomark");
    cmd.current_dir(dir.path())
        .arg(input_path.as_os_str())
        .arg("--config")
        .arg("nope.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
