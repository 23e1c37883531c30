#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run `lifeweeks` isolated from any real user config, with "today" pinned.
fn lifeweeks(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lifeweeks").unwrap();
    cmd.current_dir(dir.path())
        .env("LIFEWEEKS_CONFIG", dir.path().join("config.yaml"))
        .args(["--today", "2000-01-08"]);
    cmd
}

fn write_config(dir: &TempDir, yaml: &str) {
    std::fs::write(dir.path().join("config.yaml"), yaml).unwrap();
}

// ---------------------------------------------------------------------------
// lifeweeks grid
// ---------------------------------------------------------------------------

#[test]
fn grid_draws_one_row_per_year() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["grid", "--born", "2000-01-01", "--lifespan", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("   0 #@{}", ".".repeat(50))))
        .stdout(predicate::str::contains("1 of 52 weeks lived"));
}

#[test]
fn grid_without_birth_date_shows_empty_state() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .arg("grid")
        .assert()
        .success()
        .stdout(predicate::str::contains("No birth date set"));
}

#[test]
fn grid_json_matches_week_model() {
    let dir = TempDir::new().unwrap();
    let output = lifeweeks(&dir)
        .args(["--json", "grid", "--born", "2000-01-01", "--lifespan", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let weeks = view["grid"]["weeks"].as_array().unwrap();
    assert_eq!(weeks.len(), 52);
    assert_eq!(weeks[0]["lived"], true);
    assert_eq!(weeks[1]["is_current"], true);
    assert!(weeks[2..].iter().all(|w| w["lived"] == false));
    assert_eq!(view["grid"]["summary"]["weeks_lived"], 1);
}

#[test]
fn grid_json_without_birth_date_has_null_grid() {
    let dir = TempDir::new().unwrap();
    let output = lifeweeks(&dir).args(["-j", "grid"]).output().unwrap();
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(view["grid"].is_null());
}

#[test]
fn grid_places_extra_milestones() {
    let dir = TempDir::new().unwrap();
    let output = lifeweeks(&dir)
        .args([
            "-j",
            "grid",
            "--born",
            "2000-01-01",
            "--lifespan",
            "2",
            "--no-defaults",
            "--milestone",
            "10:Test",
            "--on",
            "2001-01-06:Walking",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        view["milestones"],
        serde_json::json!([
            { "week_index": 10, "description": "Test" },
            { "week_index": 53, "description": "Walking" },
        ])
    );
    assert_eq!(view["grid"]["weeks"][53]["milestone"]["description"], "Walking");
}

#[test]
fn grid_rejects_lifespan_outside_range() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["grid", "--born", "2000-01-01", "--lifespan", "121"])
        .assert()
        .failure();
}

#[test]
fn grid_rejects_future_birth_date() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["grid", "--born", "2000-02-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("later than today"));
}

#[test]
fn grid_rejects_bad_dated_milestone() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["grid", "--born", "2000-01-01", "--on", "someday:Trip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid date"));
}

// ---------------------------------------------------------------------------
// lifeweeks week / date
// ---------------------------------------------------------------------------

#[test]
fn week_maps_date_to_index() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["week", "--born", "2000-01-01", "2000-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("falls in week 8"));
}

#[test]
fn date_maps_index_to_tooltip() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["date", "--born", "2000-01-01", "1"])
        .assert()
        .success()
        .stdout("Week 2: Jan 8, 2000\n");
}

// ---------------------------------------------------------------------------
// lifeweeks milestones / config
// ---------------------------------------------------------------------------

#[test]
fn milestones_lists_defaults() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .arg("milestones")
        .assert()
        .success()
        .stdout(predicate::str::contains("Retirement"))
        .stdout(predicate::str::contains("3380"))
        .stdout(predicate::str::contains("65y 0w"));
}

#[test]
fn milestones_follow_config() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "milestones:\n  - years: 16\n    description: Driving licence\n",
    );
    let output = lifeweeks(&dir)
        .args(["-j", "milestones", "--born", "2000-01-01"])
        .output()
        .unwrap();
    let list: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["week_index"], 832);
    assert_eq!(list[0]["description"], "Driving licence");
}

#[test]
fn config_validate_reports_errors() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        "milestones:\n  - description: Nowhere\n",
    );
    lifeweeks(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("exactly one of"));
}

#[test]
fn config_validate_ok_without_file() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK."));
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_lifespan: 90"));
}

#[test]
fn unparseable_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "default_lifespan: [nope\n");
    lifeweeks(&dir)
        .arg("milestones")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

// ---------------------------------------------------------------------------
// lifeweeks session
// ---------------------------------------------------------------------------

#[test]
fn session_adds_milestone_by_click() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .arg("session")
        .write_stdin("born 2000-01-01\nclick 10\ndescribe Test\ncommit\nmilestones\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added milestone 'Test' at week 10."))
        .stdout(predicate::str::contains("    10  Test"));
}

#[test]
fn session_keeps_commit_disabled_without_date() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["session", "--born", "2000-01-01"])
        .write_stdin("by-date\ndescribe Trip\ncommit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not ready: no date selected"))
        .stdout(predicate::str::contains("error: cannot add milestone yet"));
}

#[test]
fn session_cancel_closes_editor() {
    let dir = TempDir::new().unwrap();
    lifeweeks(&dir)
        .args(["session", "--born", "2000-01-01"])
        .write_stdin("click 3\ndescribe nope\ncancel\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Editor closed."))
        .stdout(predicate::str::contains("editor: idle"));
}
