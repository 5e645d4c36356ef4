use std::{fs, path::PathBuf};

use pickitup::{scaffold::init_project, Error};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pickitup-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn creates_a_runnable_project() {
    let root = scratch("fresh");
    let project = root.join("space_game");
    init_project(&project).unwrap();

    let manifest = fs::read_to_string(project.join("Cargo.toml")).unwrap();
    assert!(manifest.contains("name = \"space_game\""));
    assert!(manifest.contains("pickitup ="));

    let main = fs::read_to_string(project.join("src/main.rs")).unwrap();
    assert!(main.contains("pickitup::main!"));
    assert!(main.contains("impl Game for"));

    let ignore = fs::read_to_string(project.join(".gitignore")).unwrap();
    assert!(ignore.contains("/target"));

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn refuses_existing_paths() {
    let root = scratch("existing");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("keep.txt"), "mine").unwrap();

    match init_project(&root) {
        Err(Error::ProjectExists(path)) => assert_eq!(path, root),
        other => panic!("expected ProjectExists, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "mine");
    assert!(!root.join("Cargo.toml").exists());

    fs::remove_dir_all(&root).unwrap();
}
