use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn warden() -> Command {
    Command::cargo_bin("warden").unwrap()
}

#[test]
fn forbidden_edge_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("domain")).unwrap();
    fs::write(
        dir.path().join("domain").join("file.go"),
        "package domain\n\nimport \"p/data\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".importrules"),
        r#"LANG "Go";
IMPORTBASE "p";
IMPORTRULE "[IMPORTBASE]/domain" CANNOTIMPORT "[IMPORTBASE]/data";"#,
    )
    .unwrap();

    warden()
        .args(["--root", dir.path().to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn allow_override_passes() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("domain")).unwrap();
    fs::write(
        dir.path().join("domain").join("file.go"),
        "package domain\n\nimport \"p/data/detail/x\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".importrules"),
        r#"LANG "Go";
IMPORTBASE "p";
IMPORTRULE "[IMPORTBASE]/domain" CANNOTIMPORT "[IMPORTBASE]/data" ALLOW "[IMPORTBASE]/data/detail";"#,
    )
    .unwrap();

    warden()
        .args(["--root", dir.path().to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn clean_project_passes() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("domain")).unwrap();
    fs::write(
        dir.path().join("domain").join("file.go"),
        "package domain\n\nimport \"fmt\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".importrules"),
        r#"LANG "Go"; IMPORTRULE "p/domain" CANNOTIMPORT "p/infra";"#,
    )
    .unwrap();

    warden()
        .args(["--root", dir.path().to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn malformed_policy_fails_with_diagnostic() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".importrules"), r#"LANG "COBOL";"#).unwrap();

    let assert = warden()
        .args(["--root", dir.path().to_str().unwrap()])
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("unrecognized") || stderr.contains("error"));
}

#[test]
fn missing_policy_file_fails() {
    let dir = TempDir::new().unwrap();

    warden()
        .args(["--root", dir.path().to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn typescript_forbidden_edge_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("domain")).unwrap();
    fs::write(
        dir.path().join("domain").join("index.ts"),
        "import { db } from \"p/data\";\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".importrules"),
        r#"LANG "TypeScript";
IMPORTBASE "p";
IMPORTRULE "[IMPORTBASE]/domain" CANNOTIMPORT "[IMPORTBASE]/data";"#,
    )
    .unwrap();

    warden()
        .args(["--root", dir.path().to_str().unwrap()])
        .assert()
        .failure();
}
