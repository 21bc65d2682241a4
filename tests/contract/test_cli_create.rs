// Contract tests for the `create-ts` binary

use std::fs;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

fn create_ts() -> Command {
    Command::cargo_bin("create-ts").unwrap()
}

#[test]
fn test_create_named_project() {
    let temp_dir = TempDir::new().unwrap();

    create_ts()
        .current_dir(temp_dir.path())
        .write_stdin("demo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What would you like to name your project? (my-project): "))
        .stdout(predicate::str::contains("Created demo in "))
        .stdout(predicate::str::contains("cd demo"));

    let project = temp_dir.path().join("demo");
    let package = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"demo\""));
    assert!(package.contains("\"typescript\": \"^5.2.2\""));

    let tsconfig = fs::read_to_string(project.join("tsconfig.json")).unwrap();
    assert!(tsconfig.contains("\"include\": [\"src\"]"));

    assert!(project.join("src").is_dir());
    assert_eq!(fs::read_dir(project.join("src")).unwrap().count(), 0);

    let gitignore = fs::read_to_string(project.join(".gitignore")).unwrap();
    assert!(gitignore.lines().any(|line| line == "node_modules"));
}

#[test]
fn test_create_with_default_name() {
    let temp_dir = TempDir::new().unwrap();

    create_ts()
        .current_dir(temp_dir.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created my-project"));

    assert!(temp_dir.path().join("my-project").join("package.json").is_file());
}

#[test]
fn test_create_in_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("existing-app");
    fs::create_dir(&project).unwrap();

    create_ts()
        .current_dir(&project)
        .write_stdin(".\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created existing-app"))
        .stdout(predicate::str::contains("cd ").not());

    let package = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"existing-app\""));
}

#[test]
fn test_rejects_name_with_separator() {
    let temp_dir = TempDir::new().unwrap();

    create_ts()
        .current_dir(temp_dir.path())
        .write_stdin("a/b\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Must use simple project name, given: \"a/b\""));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_rejects_non_empty_target() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("demo");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("README.md"), "hello").unwrap();

    create_ts()
        .current_dir(temp_dir.path())
        .write_stdin("demo\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists and is not empty"));

    assert!(!project.join("package.json").exists());
}

#[test]
fn test_closed_stdin_fails() {
    let temp_dir = TempDir::new().unwrap();

    create_ts()
        .current_dir(temp_dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input closed"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp_dir = TempDir::new().unwrap();

    create_ts()
        .current_dir(temp_dir.path())
        .arg("-vv")
        .write_stdin("demo\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("project scaffolded"));
}

#[test]
fn test_short_help() {
    create_ts()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scaffold a new TypeScript project"));
}

#[test]
fn test_long_help() {
    create_ts()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("asks for a project name"))
        .stdout(predicate::str::contains("Answer '.' to scaffold into the current"));
}

#[test]
fn test_summary_quotes_name_with_space() {
    let temp_dir = TempDir::new().unwrap();

    create_ts()
        .current_dir(temp_dir.path())
        .write_stdin("with space\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cd 'with space'"));

    assert!(temp_dir.path().join("with space").join("package.json").is_file());
}
