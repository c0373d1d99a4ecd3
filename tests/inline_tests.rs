//! Integration tests for export and flatten commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{flatnote_cmd, init_vault, write_file};

const NOTE: &str = "See ![[cat.png]] here\nand ![[missing.png]] there\n";
const FLAT: &str =
    "See ![cat.png](data:image/png;base64,AQI=) here\nand ![[missing.png]] there\n";

fn setup() -> (TempDir, TempDir) {
    let vault = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    init_vault(vault.path(), &out.path().join("exports"));
    write_file(vault.path(), "notes/Cat Note.md", NOTE.as_bytes());
    write_file(vault.path(), "attachments/cat.png", &[0x01, 0x02]);
    (vault, out)
}

#[test]
fn test_export_writes_flattened_copy() {
    let (vault, out) = setup();

    flatnote_cmd()
        .current_dir(vault.path())
        .arg("export")
        .arg("notes/Cat Note.md")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Note \"Cat Note\" has been exported to",
        ));

    let exported = out.path().join("exports/Cat Note.md");
    assert_eq!(fs::read_to_string(exported).unwrap(), FLAT);

    let original = fs::read_to_string(vault.path().join("notes/Cat Note.md")).unwrap();
    assert_eq!(original, NOTE);
}

#[test]
fn test_export_palette_alias_from_subdirectory() {
    let (vault, out) = setup();

    flatnote_cmd()
        .current_dir(vault.path().join("notes"))
        .arg("export-current-note")
        .arg("Cat Note.md")
        .assert()
        .success();

    assert!(out.path().join("exports/Cat Note.md").exists());
}

#[test]
fn test_flatten_rewrites_in_place() {
    let (vault, out) = setup();

    flatnote_cmd()
        .current_dir(vault.path())
        .arg("flatten")
        .arg("notes/Cat Note.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note \"Cat Note\" has been flattened"));

    let content = fs::read_to_string(vault.path().join("notes/Cat Note.md")).unwrap();
    assert_eq!(content, FLAT);
    assert!(!out.path().join("exports").exists());
}

#[test]
fn test_no_active_note() {
    let (vault, out) = setup();

    for command in ["export", "flatten"] {
        flatnote_cmd()
            .current_dir(vault.path())
            .arg(command)
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("No note is currently open"));
    }

    assert!(!out.path().join("exports").exists());
    let content = fs::read_to_string(vault.path().join("notes/Cat Note.md")).unwrap();
    assert_eq!(content, NOTE);
}

#[test]
fn test_note_not_found() {
    let (vault, _out) = setup();

    flatnote_cmd()
        .current_dir(vault.path())
        .arg("flatten")
        .arg("nope.md")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Note not found"));
}

#[test]
fn test_unreadable_export_dir_reports_write_failure() {
    let (vault, out) = setup();
    let blocker = out.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    flatnote_cmd()
        .current_dir(vault.path())
        .arg("config")
        .arg("export-path")
        .arg(blocker.join("sub"))
        .assert()
        .success();

    flatnote_cmd()
        .current_dir(vault.path())
        .arg("export")
        .arg("notes/Cat Note.md")
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Failed to write"));
}
