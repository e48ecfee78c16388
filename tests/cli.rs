//! End-to-end tests for the `ng` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ng(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ng").unwrap();
    cmd.current_dir(dir)
        .env("XDG_DATA_HOME", dir.join(".data"))
        .arg("--no-color");
    cmd
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn init_without_name_fails_with_hint() {
    let dir = TempDir::new().unwrap();

    ng(dir.path())
        .arg("init")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("The `ng init` command requires a package.json"))
        .stderr(predicate::str::contains("`ng help`"))
        .stderr(predicate::str::contains("panicked").not());

    assert!(entries(dir.path()).is_empty());
}

#[test]
fn init_rejects_invalid_name() {
    let dir = TempDir::new().unwrap();

    ng(dir.path())
        .args(["init", "--name", "my.app", "--skip-npm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("We currently do not support a name of `my.app`."));

    assert!(entries(dir.path()).is_empty());
}

#[test]
fn init_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();

    ng(dir.path())
        .args(["init", "-n", "my-app", "--dry-run", "--skip-bower=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("package.json"))
        .stdout(predicate::str::contains("Installing packages").not());

    assert!(entries(dir.path()).is_empty());
}

#[test]
fn init_installs_default_blueprint() {
    let dir = TempDir::new().unwrap();

    ng(dir.path())
        .args(["init", "-n", "my-app", "--skip-npm", "--style", "scss", "-p", "acme"])
        .assert()
        .success();

    let package = fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"my-app\""));

    let index = fs::read_to_string(dir.path().join("src/index.html")).unwrap();
    assert!(index.contains("<title>MyApp</title>"));
    assert!(index.contains("<acme-root>"));
    assert!(dir.path().join("src/styles.scss").is_file());
    assert!(!dir.path().join("src/manifest.webapp").exists());
    assert!(!dir.path().join(".git").exists());
}

#[test]
fn init_uses_package_json_name_and_keeps_existing_files() {
    let dir = TempDir::new().unwrap();
    let original = "{ \"name\": \"foo\" }\n";
    fs::write(dir.path().join("package.json"), original).unwrap();

    ng(dir.path())
        .args(["init", "--name", ".", "--skip-npm", "--mobile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skip"));

    assert_eq!(fs::read_to_string(dir.path().join("package.json")).unwrap(), original);
    let index = fs::read_to_string(dir.path().join("src/index.html")).unwrap();
    assert!(index.contains("<title>Foo</title>"));
    assert!(dir.path().join("src/manifest.webapp").is_file());
}

#[test]
fn init_in_addon_project_uses_addon_blueprint() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "my-addon", "keywords": ["ember-addon"] }"#,
    )
    .unwrap();

    ng(dir.path())
        .args(["init", "--skip-npm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing blueprint 'addon'"));

    assert!(dir.path().join("index.js").is_file());
}

#[test]
fn init_reads_defaults_from_ng_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("ng.toml"),
        "[defaults]\nstyle = \"less\"\nsource_dir = \"app-src\"\nskip_npm = true\n",
    )
    .unwrap();

    ng(dir.path()).args(["init", "-n", "my-app"]).assert().success();

    assert!(dir.path().join("app-src/styles.less").is_file());
}

#[test]
fn init_rejects_invalid_ng_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ng.toml"), "[defaults]\nsytle = \"less\"\n").unwrap();

    ng(dir.path())
        .args(["init", "-n", "my-app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn init_glob_patterns_limit_installed_files() {
    let dir = TempDir::new().unwrap();

    ng(dir.path())
        .args(["init", "-n", "my-app", "--skip-npm", "*.json"])
        .assert()
        .success();

    assert_eq!(entries(dir.path()), vec!["package.json"]);
}

#[test]
fn init_with_custom_blueprint_path() {
    let dir = TempDir::new().unwrap();
    let files = dir.path().join("my-bp/files/__src__");
    fs::create_dir_all(&files).unwrap();
    fs::write(files.join("__name__.txt"), "hello <%= classifiedPackageName %>\n").unwrap();

    ng(dir.path())
        .args(["init", "-n", "my-app", "--skip-npm", "-b", "./my-bp"])
        .assert()
        .success();

    let rendered = fs::read_to_string(dir.path().join("src/my-app.txt")).unwrap();
    assert_eq!(rendered, "hello MyApp\n");
}

#[test]
fn init_unknown_blueprint_fails() {
    let dir = TempDir::new().unwrap();

    ng(dir.path())
        .args(["init", "-n", "my-app", "--skip-npm", "-b", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown blueprint: fancy"))
        .stderr(predicate::str::contains("Built-in blueprints: ng2, addon"));
}

#[test]
fn new_creates_project_directory() {
    let dir = TempDir::new().unwrap();

    ng(dir.path())
        .args(["new", "my-app", "--skip-npm", "--skip-git"])
        .assert()
        .success();

    let project = dir.path().join("my-app");
    assert!(project.join("package.json").is_file());
    assert!(project.join("src/main.ts").is_file());
    assert!(!project.join(".git").exists());
}

#[test]
fn new_dry_run_creates_nothing() {
    let dir = TempDir::new().unwrap();

    ng(dir.path())
        .args(["new", "my-app", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would create directory"));

    assert!(entries(dir.path()).is_empty());
}

#[test]
fn new_refuses_non_empty_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("my-app")).unwrap();
    fs::write(dir.path().join("my-app/keep.txt"), "x").unwrap();

    ng(dir.path())
        .args(["new", "my-app", "--skip-npm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_rejects_invalid_name_before_creating_directory() {
    let dir = TempDir::new().unwrap();

    ng(dir.path())
        .args(["new", "vendor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("We currently do not support a name of `vendor`."));

    assert!(entries(dir.path()).is_empty());
}
