use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const NOW: &str = "2026-10-19T12:00:00Z";

fn repohealth(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repohealth").expect("binary should compile");
    cmd.current_dir(sandbox.path())
        .env("HOME", sandbox.path())
        .env_remove("RUST_LOG");
    cmd
}

fn sandbox() -> TempDir {
    TempDir::new().expect("temp dir should be created")
}

#[test]
fn rank_python_with_good_first_issues() {
    let dir = sandbox();
    repohealth(&dir)
        .args([
            "rank",
            "--language",
            "python",
            "--good-first-issues",
            "--now",
            NOW,
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("| 1 | fastapi | 92"))
        .stdout(predicate::str::contains("| 2 | tensorflow | 83"))
        .stdout(predicate::str::contains("react").not());
}

#[test]
fn rank_by_activity_orders_by_recency() {
    let dir = sandbox();
    let output = repohealth(&dir)
        .args(["rank", "--sort", "activity", "--now", NOW])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 output");
    let react = stdout.find("| react |").expect("react listed");
    let axios = stdout.find("| axios |").expect("axios listed");
    let nextjs = stdout.find("| nextjs |").expect("nextjs listed");
    assert!(nextjs < react);
    assert!(react < axios);
}

#[test]
fn rank_with_no_matches_exits_with_empty_code() {
    let dir = sandbox();
    repohealth(&dir)
        .args(["rank", "--language", "cobol"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("- none"));
}

#[test]
fn score_shows_breakdown_json() {
    let dir = sandbox();
    repohealth(&dir)
        .args(["--format", "json", "score", "react"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 88"))
        .stdout(predicate::str::contains("\"weighted_total\": 87.85"));
}

#[test]
fn score_unknown_repo_fails() {
    let dir = sandbox();
    repohealth(&dir)
        .args(["score", "leftpad"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("repository not found: leftpad"));
}

#[test]
fn compare_two_leaves_one_empty_slot() {
    let dir = sandbox();
    repohealth(&dir)
        .args(["compare", "react", "vue"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("## Slot 1: react"))
        .stdout(predicate::str::contains("## Slot 2: vue"))
        .stdout(predicate::str::contains("## Slot 3: empty"));
}

#[test]
fn compare_rejects_fourth_repo() {
    let dir = sandbox();
    repohealth(&dir)
        .args(["compare", "react", "vue", "deno", "axios"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("comparison selection is full"));
}

#[test]
fn recommend_lists_top_issue_counts() {
    let dir = sandbox();
    repohealth(&dir)
        .arg("recommend")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("| 1 | tensorflow"))
        .stdout(predicate::str::contains("| 2 | deno"))
        .stdout(predicate::str::contains("| 3 | nextjs"));
}

#[test]
fn similar_lists_same_language() {
    let dir = sandbox();
    repohealth(&dir)
        .args(["similar", "react"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Similar to react"))
        .stdout(predicate::str::contains("| axios |"))
        .stdout(predicate::str::contains("| nextjs |"));
}

#[test]
fn search_uses_configured_debounce_and_dataset() {
    let dir = sandbox();
    let dataset = r#"[
      {
        "id": "a",
        "name": "alpha-http",
        "language": "Go",
        "lastCommit": "1 day ago",
        "goodFirstIssues": 4,
        "ciStatus": "passing",
        "healthBreakdown": {
          "activity": 80, "community": 80, "documentation": 80,
          "freshness": 80, "compatibility": 80
        }
      },
      {
        "id": "b",
        "name": "beta",
        "language": "Go",
        "healthBreakdown": {
          "activity": 10, "community": 10, "documentation": 10,
          "freshness": 10, "compatibility": 10
        }
      }
    ]"#;
    fs::write(dir.path().join("repos.json"), dataset).expect("dataset should write");
    fs::write(
        dir.path().join("repohealth.toml"),
        "[dataset]\npath = \"repos.json\"\n\n[search]\ndebounce_ms = 1\n",
    )
    .expect("config should write");

    repohealth(&dir)
        .args(["search", "http"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("alpha-http | 80"))
        .stdout(predicate::str::contains("beta").not());

    repohealth(&dir)
        .args(["search", "gamma"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no repositories matched"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = sandbox();
    fs::write(dir.path().join("repohealth.toml"), "[search]\ndebounce_ms = 0\n")
        .expect("config should write");
    repohealth(&dir)
        .arg("recommend")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("search.debounce_ms"));
}

#[test]
fn search_activity_window_honours_now() {
    let dir = sandbox();
    let dataset = r#"[
      {
        "id": "a",
        "name": "alpha-http",
        "language": "Go",
        "lastCommit": "1 day ago",
        "healthBreakdown": {
          "activity": 80, "community": 80, "documentation": 80,
          "freshness": 80, "compatibility": 80
        }
      },
      {
        "id": "b",
        "name": "beta-http",
        "language": "Go",
        "lastCommit": "2026-10-01T00:00:00Z",
        "healthBreakdown": {
          "activity": 70, "community": 70, "documentation": 70,
          "freshness": 70, "compatibility": 70
        }
      }
    ]"#;
    fs::write(dir.path().join("repos.json"), dataset).expect("dataset should write");
    fs::write(
        dir.path().join("repohealth.toml"),
        "[dataset]\npath = \"repos.json\"\n\n[search]\ndebounce_ms = 1\n",
    )
    .expect("config should write");

    repohealth(&dir)
        .args(["search", "http", "--activity-days", "7", "--now", NOW])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("alpha-http"))
        .stdout(predicate::str::contains("beta-http").not());

    repohealth(&dir)
        .args([
            "search",
            "http",
            "--activity-days",
            "7",
            "--now",
            "2026-10-03T00:00:00Z",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("alpha-http"))
        .stdout(predicate::str::contains("beta-http"));

    repohealth(&dir)
        .args(["search", "http", "--now", "tomorrow"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--now"));
}
