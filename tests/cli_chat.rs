mod common;

use predicates::prelude::*;

#[test]
fn chat_answers_from_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::write_config(dir.path());

    common::dlhub(&config)
        .arg("chat")
        .write_stdin("hello\n/exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi there!"))
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn chat_routes_misspelled_vendor() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::write_config(dir.path());

    common::dlhub(&config)
        .arg("chat")
        .write_stdin("nvida drivers please\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://hub.test/drivers.html#nvidia"));
}

#[test]
fn chat_learns_and_persists_answers() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::write_config(dir.path());

    common::dlhub(&config)
        .arg("chat")
        .write_stdin("where are the mirrors\n/teach Below the download button\nwhere are the mirrors\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't know that one yet"))
        .stdout(predicate::str::contains("I'll remember that"))
        .stdout(predicate::str::contains("Below the download button"));

    let saved = std::fs::read_to_string(dir.path().join("knowledge.json")).unwrap();
    assert!(saved.contains("where are the mirrors"));

    // A new session picks the answer up from disk
    common::dlhub(&config)
        .args(["chat", "Where are the mirrors?"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Below the download button"));
}

#[test]
fn teach_without_question_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::write_config(dir.path());

    common::dlhub(&config)
        .arg("chat")
        .write_stdin("/teach something\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no unanswered question"));
}

#[test]
fn unreadable_knowledge_file_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::write_config(dir.path());
    let knowledge = dir.path().join("knowledge.json");
    let corrupt = r#"[{"question":"a","answer":"b","learned_at":"2024-01-01T00:00:00Z"},]"#;
    std::fs::write(&knowledge, corrupt).unwrap();

    common::dlhub(&config)
        .arg("chat")
        .write_stdin("where are the mirrors\n/teach Below\nwhere are the mirrors\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not read learned answers"))
        .stdout(predicate::str::contains("Below"));

    assert_eq!(std::fs::read_to_string(&knowledge).unwrap(), corrupt);
}

#[test]
fn speech_toggle_is_saved_to_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::write_config(dir.path());

    common::dlhub(&config)
        .arg("chat")
        .write_stdin("/speech\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Speech enabled"));

    let saved = std::fs::read_to_string(&config).unwrap();
    assert!(saved.contains("speech = true"));
    assert!(saved.contains("https://hub.test"));

    common::dlhub(&config)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("speech = true"));
}

#[test]
fn open_request_keeps_punctuation() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::write_config(dir.path());

    common::dlhub(&config)
        .args(["chat", "open 7-zip"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opening 7-Zip"))
        .stdout(predicate::str::contains("https://hub.test/app.html?id=7zip"));
}
