// tests/git_repository_test.rs
//
// Exercises Git2Repository against a real temporary repository.

use assembly_publish::git::{Git2Repository, Repository as _};
use git2::Repository;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Helper function to setup a temporary git repo for testing
fn setup_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");

    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    let content_path = temp_dir.path().join("AssemblyInfo.cs");
    fs::write(
        &content_path,
        "[assembly: AssemblyVersion(\"1.0.0.0\")]\n[assembly: AssemblyFileVersion(\"1.0.0.0\")]\n",
    )
    .expect("Could not write initial file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new("AssemblyInfo.cs"))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");

    repo.commit(
        Some("HEAD"),
        &repo.signature().expect("Could not get sig"),
        &repo.signature().expect("Could not get sig"),
        "Initial commit",
        &tree,
        &[],
    )
    .expect("Could not create commit");

    temp_dir
}

#[test]
fn test_head_commit_id_is_short() {
    let temp_dir = setup_test_repo();
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    let id = repo.head_commit_id().unwrap();
    assert_eq!(id.len(), 7);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_stage_and_commit() {
    let temp_dir = setup_test_repo();
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    fs::write(
        temp_dir.path().join("AssemblyInfo.cs"),
        "[assembly: AssemblyVersion(\"1.0.0.1\")]\n[assembly: AssemblyFileVersion(\"1.0.0.1\")]\n",
    )
    .unwrap();

    repo.stage_path(Path::new("AssemblyInfo.cs")).unwrap();
    repo.commit("Change version to: v1.0.0.1 Mode: revision")
        .unwrap();

    let raw = Repository::open(temp_dir.path()).unwrap();
    let head = raw.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(
        head.message().unwrap(),
        "Change version to: v1.0.0.1 Mode: revision"
    );
    assert_eq!(head.parent_count(), 1);
}

#[test]
fn test_create_and_find_annotated_tag() {
    let temp_dir = setup_test_repo();
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    repo.create_annotated_tag("v1.0.0.0", "production").unwrap();

    assert!(repo.tag_exists("v1.0.0.0").unwrap());
    assert!(!repo.tag_exists("v9.9.9.9").unwrap());

    let details = repo.list_tag_details().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].name, "v1.0.0.0");
    assert_eq!(details[0].message, "production");
    assert_eq!(details[0].tagger, "Test User");
    assert!(details[0].when_unix > 0);
}

#[test]
fn test_duplicate_tag_fails() {
    let temp_dir = setup_test_repo();
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    repo.create_annotated_tag("v1.0.0.0", "major").unwrap();
    assert!(repo.create_annotated_tag("v1.0.0.0", "major").is_err());
}

#[test]
fn test_lightweight_tag_falls_back_to_commit_author() {
    let temp_dir = setup_test_repo();

    let raw = Repository::open(temp_dir.path()).unwrap();
    let head = raw.head().unwrap().peel_to_commit().unwrap();
    raw.tag_lightweight("v0.9.0.0", head.as_object(), false)
        .unwrap();

    let repo = Git2Repository::open(temp_dir.path()).unwrap();
    let details = repo.list_tag_details().unwrap();

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].name, "v0.9.0.0");
    assert_eq!(details[0].message, "");
    assert_eq!(details[0].tagger, "Test User");
}

#[test]
fn test_push_to_missing_remote_is_a_remote_error() {
    let temp_dir = setup_test_repo();
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    let result = repo.push_tag("origin", "v1.0.0.0");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("No remote named 'origin'"));
}
