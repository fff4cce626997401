use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn check_blog_titles(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-blog-titles"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn create_post(root: &Path, folder_name: &str, title: &str) {
    let post_dir = root.join(folder_name);
    fs::create_dir_all(&post_dir).unwrap();
    fs::write(post_dir.join("contents.lr"), format!("title: {}\n---\nbody: Hi\n", title)).unwrap();
}

#[test]
fn matching_folders_exit_zero() {
    let dir = TempDir::new().unwrap();
    create_post(dir.path(), "my-first-post", "My First Post");

    let output = check_blog_titles(dir.path(), &["--path", "."]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn mismatch_without_fix_exits_one() {
    let dir = TempDir::new().unwrap();
    create_post(dir.path(), "wrong-name", "My First Post");

    let output = check_blog_titles(dir.path(), &["--path", "."]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mismatch in blog dir and blog title: wrong-name != my-first-post"));
    assert!(dir.path().join("wrong-name").is_dir());
}

#[test]
fn fix_renames_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    create_post(dir.path(), "wrong-name", "My First Post");

    let output = check_blog_titles(dir.path(), &["--path", ".", "--fix"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Renamed:"));
    assert!(!dir.path().join("wrong-name").exists());
    assert!(dir.path().join("my-first-post").join("contents.lr").is_file());
}

#[test]
fn quiet_mode_keeps_exit_code() {
    let dir = TempDir::new().unwrap();
    create_post(dir.path(), "wrong-name", "My First Post");

    let output = check_blog_titles(dir.path(), &["--path", ".", "--quiet"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().is_empty(), "stdout: {}", stdout);
}

#[test]
fn rename_conflict_is_an_error_not_a_fail() {
    let dir = TempDir::new().unwrap();
    create_post(dir.path(), "my-first-post", "My First Post");
    create_post(dir.path(), "wrong-name", "My First Post");

    let output = check_blog_titles(dir.path(), &["--path", ".", "--fix"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("wrong-name"), "stderr: {}", stderr);
    assert!(dir.path().join("wrong-name").is_dir());
}

#[test]
fn missing_blog_dir_is_an_error() {
    let dir = TempDir::new().unwrap();

    let output = check_blog_titles(dir.path(), &["--path", "no-such-dir"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-dir"));
}

#[test]
fn default_path_comes_from_config() {
    let dir = TempDir::new().unwrap();
    create_post(&dir.path().join("posts"), "wrong-name", "Configured Post");
    fs::write(dir.path().join("blog-titles.toml"), "[paths]\nblog_dir = \"posts\"\n").unwrap();

    let output = check_blog_titles(dir.path(), &["--config-path", "blog-titles.toml", "--fix"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(dir.path().join("posts").join("configured-post").is_dir());
}

#[test]
fn default_path_without_config() {
    let dir = TempDir::new().unwrap();
    create_post(&dir.path().join("kutubuku/content/blog"), "wrong-name", "My First Post");

    let output = check_blog_titles(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unreadable_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.toml"), "[paths\n").unwrap();

    let output = check_blog_titles(dir.path(), &["--config-path", "broken.toml"]);
    assert_eq!(output.status.code(), Some(2));
}
