#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn data_file(temp: &TempDir) -> PathBuf {
    temp.path().join("items.json")
}

fn itemz(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("itemz").unwrap();
    cmd.arg("--data-file").arg(data);
    cmd
}

fn stored_ids(data: &Path) -> Vec<String> {
    let doc: Value = serde_json::from_str(&fs::read_to_string(data).unwrap()).unwrap();
    doc["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_full_workflow() {
    let temp = TempDir::new().unwrap();
    let data = data_file(&temp);

    itemz(&data)
        .arg("create")
        .write_stdin("Milk\n2%\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added successfully:"))
        .stdout(predicate::str::contains("\"name\": \"Milk\""));

    itemz(&data)
        .arg("c")
        .write_stdin("Eggs\ndozen\n")
        .assert()
        .success();

    let ids = stored_ids(&data);
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    itemz(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Items:"))
        .stdout(predicate::str::contains("Name: Milk"))
        .stdout(predicate::str::contains("Description: dozen"));

    // Empty answer keeps the current name
    itemz(&data)
        .args(["update", &ids[0]])
        .write_stdin("\nwhole\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Item updated successfully:"))
        .stdout(predicate::str::contains("\"name\": \"Milk\""))
        .stdout(predicate::str::contains("\"description\": \"whole\""));

    itemz(&data)
        .args(["d", &ids[1]])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Item with ID {} deleted successfully",
            ids[1]
        )));

    itemz(&data)
        .args(["find", &ids[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item found:"))
        .stdout(predicate::str::contains("\"description\": \"whole\""));

    assert_eq!(stored_ids(&data), vec![ids[0].clone()]);
}

#[test]
fn test_first_run_creates_empty_store() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("nested").join("items.json");

    itemz(&data)
        .arg("l")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found"));

    let doc: Value = serde_json::from_str(&fs::read_to_string(&data).unwrap()).unwrap();
    assert_eq!(doc, serde_json::json!({ "items": [] }));
}

#[test]
fn test_find_missing_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    itemz(&data_file(&temp))
        .args(["find", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item with ID 123 not found"));
}

#[test]
fn test_update_missing_skips_prompts() {
    let temp = TempDir::new().unwrap();
    itemz(&data_file(&temp))
        .args(["update", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item with ID 123 not found"))
        .stdout(predicate::str::contains("Enter name").not());
}

#[test]
fn test_delete_cancelled_keeps_item() {
    let temp = TempDir::new().unwrap();
    let data = data_file(&temp);
    itemz(&data)
        .arg("create")
        .write_stdin("Milk\n2%\n")
        .assert()
        .success();
    let id = stored_ids(&data).remove(0);

    itemz(&data)
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete operation cancelled"));

    // Enter alone takes the default, which is No
    itemz(&data)
        .args(["delete", &id])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete operation cancelled"));

    assert_eq!(stored_ids(&data), vec![id]);
}

#[test]
fn test_delete_missing_reports_not_found() {
    let temp = TempDir::new().unwrap();
    itemz(&data_file(&temp))
        .args(["delete", "nope"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Item with ID nope not found"));
}

#[test]
fn test_create_reprompts_on_empty_answer() {
    let temp = TempDir::new().unwrap();
    let data = data_file(&temp);
    itemz(&data)
        .arg("create")
        .write_stdin("\nMilk\n\n2%\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a name"))
        .stdout(predicate::str::contains("Please enter a description"))
        .stdout(predicate::str::contains("Item added successfully:"));

    assert_eq!(stored_ids(&data).len(), 1);
}

#[test]
fn test_create_with_closed_input_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let data = data_file(&temp);
    itemz(&data)
        .arg("create")
        .write_stdin("Milk\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt error"));

    assert!(stored_ids(&data).is_empty());
}

#[test]
fn test_malformed_store_is_fatal() {
    let temp = TempDir::new().unwrap();
    let data = data_file(&temp);
    fs::write(&data, "{ not json").unwrap();

    itemz(&data)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read store"));

    assert_eq!(fs::read_to_string(&data).unwrap(), "{ not json");
}

#[test]
fn test_no_command_prints_help() {
    let temp = TempDir::new().unwrap();
    itemz(&data_file(&temp))
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("itemz")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("itemz "));
}

#[test]
fn test_uuid_ids_from_config() {
    let temp = TempDir::new().unwrap();
    let data = data_file(&temp);
    fs::write(
        temp.path().join("config.json"),
        r#"{"id_format": "uuid", "pretty": false}"#,
    )
    .unwrap();

    itemz(&data)
        .arg("create")
        .write_stdin("Milk\n2%\n")
        .assert()
        .success();

    let id = stored_ids(&data).remove(0);
    assert!(uuid::Uuid::parse_str(&id).is_ok());
    assert!(!fs::read_to_string(&data).unwrap().contains('\n'));
}
