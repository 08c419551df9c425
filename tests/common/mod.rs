#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn memoir_cmd() -> Command {
    let mut cmd = Command::cargo_bin("memoir").unwrap();
    cmd.env_remove("MEMOIR_ROOT");
    cmd
}

/// Write an entry file into an initialized journal
pub fn write_entry(
    root: &Path,
    id: u64,
    created_at: &str,
    title: &str,
    content: &str,
    mood: &str,
    tags: &[&str],
) {
    let tags = tags
        .iter()
        .map(|tag| format!("\"{}\"", tag))
        .collect::<Vec<_>>()
        .join(", ");
    let contents = format!(
        "id = {id}\n\
        title = \"{title}\"\n\
        content = '{content}'\n\
        primary_mood = \"{mood}\"\n\
        created_at = \"{created_at}\"\n\
        tags = [{tags}]\n"
    );
    fs::write(root.join("entries").join(format!("{id}.toml")), contents).unwrap();
}

/// Find the single exported file with the given prefix
pub fn find_export(dir: &Path, prefix: &str) -> PathBuf {
    let mut matches: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect();
    assert_eq!(matches.len(), 1, "expected one {} export", prefix);
    matches.remove(0)
}
