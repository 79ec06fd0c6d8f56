use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_core_flags() {
    Command::cargo_bin("storecheck")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--products"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--out"));
}

#[test]
fn missing_url_is_an_argument_error() {
    Command::cargo_bin("storecheck")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));
}

// An unreachable agent endpoint must still produce a complete failure report:
// one record per checklist item, and a clean exit.
#[test]
fn unreachable_agent_still_writes_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");

    Command::cargo_bin("storecheck")
        .unwrap()
        .args([
            "--url",
            "https://shop.invalid",
            "--timeout",
            "5",
            "--agent-url",
            "http://127.0.0.1:9/run",
        ])
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["summary"]["total_tests"], 3);
    assert_eq!(report["summary"]["passed"], 0);
    assert_eq!(report["summary"]["failed"], 3);

    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["category"], "Product Page Validation");
    assert_eq!(results[1]["category"], "Image Validation");
    assert_eq!(results[2]["category"], "Error Detection");
    for r in results {
        assert_eq!(r["success"], false);
        assert!(r["details"]["raw"].is_string());
    }
}
