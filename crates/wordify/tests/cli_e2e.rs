#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use tempfile::TempDir;

/// Nothing listens on the discard port, so every lookup fails to connect.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

const SERENE: &str = r#"[{"word":"serene","phonetics":[{"text":"/səˈriːn/"}],"meanings":[{"partOfSpeech":"adjective","definitions":[{"definition":"Calm and peaceful."}],"synonyms":["tranquil"],"antonyms":[]}]}]"#;

fn wordify(data: &TempDir, api: &str) -> Command {
    let mut cmd = Command::new(cargo_bin("wordify"));
    cmd.env("WORDIFY_DATA", data.path())
        .env("WORDIFY_API_BASE_URL", api)
        .env_remove("WORDIFY_REQUEST_TIMEOUT_SECS")
        .env_remove("WORDIFY_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

/// Answers `requests` HTTP requests with the same status and body.
fn serve(status: &'static str, body: &'static str, requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/entries/en", listener.local_addr().unwrap());
    thread::spawn(move || {
        for stream in listener.incoming().take(requests) {
            let mut stream = stream.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });
    base
}

fn read_key(data: &TempDir, key: &str) -> Option<String> {
    fs::read_to_string(data.path().join(format!("{}.json", key))).ok()
}

#[test]
fn test_lookup_renders_definition_and_records_history() {
    let data = TempDir::new().unwrap();
    let api = serve("200 OK", SERENE, 1);

    wordify(&data, &api)
        .args(["serene"])
        .assert()
        .success()
        .stdout(predicate::str::contains("serene"))
        .stdout(predicate::str::contains("adjective"))
        .stdout(predicate::str::contains("1. Calm and peaceful."))
        .stdout(predicate::str::contains("Synonyms: tranquil"));

    assert_eq!(
        read_key(&data, "wordify-history").as_deref(),
        Some(r#"["serene"]"#)
    );

    wordify(&data, UNREACHABLE_API)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. serene"));
}

#[test]
fn test_unknown_word_reports_not_found() {
    let data = TempDir::new().unwrap();
    let api = serve("404 Not Found", r#"{"title":"No Definitions Found"}"#, 1);

    wordify(&data, &api)
        .args(["define", "xyzzy123"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: No definitions found for \"xyzzy123\"",
        ));

    assert_eq!(read_key(&data, "wordify-history"), None);
}

#[test]
fn test_network_failure_reports_generic_error() {
    let data = TempDir::new().unwrap();
    wordify(&data, UNREACHABLE_API)
        .args(["serene"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to fetch definition"));
}

#[test]
fn test_blank_word_is_rejected() {
    let data = TempDir::new().unwrap();
    wordify(&data, UNREACHABLE_API)
        .args(["define", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a word to search"));
}

#[test]
fn test_today_is_silent_when_lookup_fails() {
    let data = TempDir::new().unwrap();
    wordify(&data, UNREACHABLE_API)
        .args(["today"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_today_shows_word_of_the_day() {
    let data = TempDir::new().unwrap();
    let api = serve("200 OK", SERENE, 1);
    wordify(&data, &api)
        .args(["today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Word of the Day"))
        .stdout(predicate::str::contains("serene adjective"));
}

#[test]
fn test_empty_lists_show_hints() {
    let data = TempDir::new().unwrap();
    wordify(&data, UNREACHABLE_API)
        .args(["favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You haven't added any favorite words yet.",
        ));
    wordify(&data, UNREACHABLE_API)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your search history is empty."));
}

#[test]
fn test_favorite_toggle_round_trip() {
    let data = TempDir::new().unwrap();

    wordify(&data, UNREACHABLE_API)
        .args(["fav", "serene"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites"));
    assert_eq!(
        read_key(&data, "wordify-favorites").as_deref(),
        Some(r#"["serene"]"#)
    );

    wordify(&data, UNREACHABLE_API)
        .args(["favs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. serene"));

    wordify(&data, UNREACHABLE_API)
        .args(["fav", "serene"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from favorites"));
    assert_eq!(read_key(&data, "wordify-favorites").as_deref(), Some("[]"));
}

#[test]
fn test_history_remove_and_clear() {
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("wordify-history.json"),
        r#"["luminous","serene","eloquent"]"#,
    )
    .unwrap();

    wordify(&data, UNREACHABLE_API)
        .args(["history", "remove", "serene"])
        .assert()
        .success();
    assert_eq!(
        read_key(&data, "wordify-history").as_deref(),
        Some(r#"["luminous","eloquent"]"#)
    );

    wordify(&data, UNREACHABLE_API)
        .args(["history", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search history cleared"));
    assert_eq!(read_key(&data, "wordify-history"), None);
}

#[test]
fn test_corrupt_history_loads_empty() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("wordify-history.json"), "{{oops").unwrap();

    wordify(&data, UNREACHABLE_API)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your search history is empty."));
}

#[test]
fn test_open_from_favorites_looks_up_entry() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("wordify-favorites.json"), r#"["serene"]"#).unwrap();
    let api = serve("200 OK", SERENE, 1);

    wordify(&data, &api)
        .args(["open", "1", "--from", "favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calm and peaceful."));
}

#[test]
fn test_open_out_of_range() {
    let data = TempDir::new().unwrap();
    wordify(&data, UNREACHABLE_API)
        .args(["open", "4", "--from", "favorites"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry 4 in favorites"));
}

#[test]
fn test_theme_is_persisted() {
    let data = TempDir::new().unwrap();

    wordify(&data, UNREACHABLE_API)
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
    assert_eq!(read_key(&data, "wordify-dark-mode").as_deref(), Some("true"));

    wordify(&data, UNREACHABLE_API)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
    assert_eq!(read_key(&data, "wordify-dark-mode").as_deref(), Some("false"));

    wordify(&data, UNREACHABLE_API)
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light").and(predicate::str::contains("system default").not()));
}

#[test]
fn test_json_output() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("wordify-favorites.json"), r#"["serene","luminous"]"#).unwrap();

    let output = wordify(&data, UNREACHABLE_API)
        .args(["favorites", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["words"], serde_json::json!(["serene", "luminous"]));
}

#[test]
fn test_config_shows_effective_values() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("wordify.toml"), "request_timeout_secs = 4\n").unwrap();

    wordify(&data, UNREACHABLE_API)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_base_url = http://127.0.0.1:9"))
        .stdout(predicate::str::contains("request_timeout_secs = 4"));
}

#[test]
fn test_invalid_config_file_fails() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("wordify.toml"), "log_level = [").unwrap();

    wordify(&data, UNREACHABLE_API)
        .args(["history"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
