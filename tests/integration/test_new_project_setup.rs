use std::fs;
use std::io::Cursor;
use tempfile::TempDir;
use serde_json::Value;
use create_ts::{create_project, resolve_location, scaffold, Prompter, ScaffoldError};

/// End-to-end scenarios through the library API, with scripted terminal input

fn scripted(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
}

#[tokio::test]
async fn test_scaffolded_files_are_valid_json() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = scripted("web-app\n");

    let report = create_project(&mut prompter, temp_dir.path()).await.unwrap();
    let project = report.target_dir();

    let package: Value =
        serde_json::from_str(&fs::read_to_string(project.join("package.json")).unwrap()).unwrap();
    assert_eq!(package["name"], "web-app");
    assert_eq!(package["private"], true);
    assert_eq!(package["version"], "0.0.1");
    assert_eq!(package["type"], "module");
    assert_eq!(package["scripts"]["build"], "tsc");
    assert_eq!(package["devDependencies"]["typescript"], "^5.2.2");

    let tsconfig: Value =
        serde_json::from_str(&fs::read_to_string(project.join("tsconfig.json")).unwrap()).unwrap();
    let options = &tsconfig["compilerOptions"];
    assert_eq!(options["target"], "ES2020");
    assert_eq!(options["module"], "ESNext");
    assert_eq!(options["moduleResolution"], "bundler");
    assert_eq!(options["strict"], true);
    assert_eq!(tsconfig["include"], serde_json::json!(["src"]));
}

#[tokio::test]
async fn test_report_lists_created_entries_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let location = resolve_location(temp_dir.path(), "demo").unwrap();

    let report = scaffold(&location).await.unwrap();

    let names: Vec<String> = report
        .created
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["package.json", "tsconfig.json", "src", ".gitignore"]);
}

#[tokio::test]
async fn test_second_run_with_same_name_fails() {
    let temp_dir = TempDir::new().unwrap();

    create_project(&mut scripted("demo\n"), temp_dir.path()).await.unwrap();
    let before = fs::read_to_string(temp_dir.path().join("demo/package.json")).unwrap();

    let result = create_project(&mut scripted("demo\n"), temp_dir.path()).await;

    assert!(matches!(result, Err(ScaffoldError::TargetNotEmpty(_))));
    let after = fs::read_to_string(temp_dir.path().join("demo/package.json")).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_traversal_names_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path().join("inner");
    fs::create_dir(&cwd).unwrap();

    for name in ["..", "../escape", "nested/dir"] {
        let result = create_project(&mut scripted(&format!("{name}\n")), &cwd).await;
        assert!(matches!(result, Err(ScaffoldError::InvalidName(_))), "{name}");
    }

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    assert_eq!(fs::read_dir(&cwd).unwrap().count(), 0);
}
