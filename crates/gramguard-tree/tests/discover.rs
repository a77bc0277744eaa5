//! Integration tests for tree discovery.

use camino::{Utf8Path, Utf8PathBuf};
use gramguard_tree::discover_trees;
use tempfile::TempDir;

fn write_file(path: &Utf8Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write file");
}

fn setup() -> (TempDir, Utf8PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 path");
    write_file(&root.join("b/second.tree.json"), "{}");
    write_file(&root.join("a/first.tree.json"), "{}");
    write_file(&root.join("a/notes.json"), "{}");
    write_file(&root.join("main.cpp"), "int main() {}");
    (temp, root)
}

#[test]
fn directories_are_searched_in_sorted_order() {
    let (_temp, root) = setup();
    let found = discover_trees(std::slice::from_ref(&root)).expect("discover");
    let names: Vec<_> = found
        .iter()
        .map(|p| p.strip_prefix(&root).expect("under root").as_str().to_string())
        .collect();
    assert_eq!(names, vec!["a/first.tree.json", "b/second.tree.json"]);
}

#[test]
fn explicit_files_keep_caller_order() {
    let (_temp, root) = setup();
    let inputs = vec![
        root.join("b/second.tree.json"),
        root.join("a/first.tree.json"),
    ];
    let found = discover_trees(&inputs).expect("discover");
    assert_eq!(found, inputs);
}

#[test]
fn missing_paths_are_passed_through_for_the_loader_to_report() {
    let (_temp, root) = setup();
    let missing = root.join("nope.tree.json");
    let found = discover_trees(std::slice::from_ref(&missing)).expect("discover");
    assert_eq!(found, vec![missing]);
}
