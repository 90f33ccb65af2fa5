//! Behavioral specs for `bonzai-hook hook`.

use serde_json::json;

use crate::prelude::*;

const ENTRY: &str = "bonzai-hook run";

// =============================================================================
// Install
// =============================================================================

/// > hook install creates .claude/settings.local.json with a Stop hook
#[test]
fn install_creates_settings() {
    let temp = Project::empty();

    hook_cmd()
        .args(["hook", "install"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Installed"));

    assert_eq!(
        temp.settings(),
        json!({
            "hooks": {
                "Stop": [{ "hooks": [{ "type": "command", "command": ENTRY }] }]
            }
        })
    );
}

/// > hook with no action installs
#[test]
fn bare_hook_installs() {
    let temp = Project::empty();

    hook_cmd()
        .arg("hook")
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.settings_path().exists());
}

/// > Unrecognized actions install
#[test]
fn unknown_action_installs() {
    let temp = Project::empty();

    hook_cmd()
        .args(["hook", "bogus"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Installed"));

    assert_eq!(temp.settings()["hooks"]["Stop"][0]["hooks"][0]["command"], ENTRY);
}

/// > Installing twice leaves a single entry
#[test]
fn install_twice_is_idempotent() {
    let temp = Project::empty();

    hook_cmd().args(["hook", "install"]).current_dir(temp.path()).assert().success();
    hook_cmd()
        .args(["hook", "-i"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("already installed"));

    assert_eq!(temp.settings()["hooks"]["Stop"].as_array().unwrap().len(), 1);
}

/// > Existing settings keys survive install
#[test]
fn install_keeps_existing_settings() {
    let temp = Project::empty();
    temp.file(
        ".claude/settings.local.json",
        r#"{"permissions": {"allow": ["Bash(ls)"]}}"#,
    );

    hook_cmd().args(["hook", "install"]).current_dir(temp.path()).assert().success();

    let settings = temp.settings();
    assert_eq!(settings["permissions"]["allow"][0], "Bash(ls)");
    assert_eq!(settings["hooks"]["Stop"][0]["hooks"][0]["command"], ENTRY);
}

/// > A settings file that is not a JSON object is not overwritten
#[test]
fn install_refuses_invalid_settings() {
    let temp = Project::empty();
    temp.file(".claude/settings.local.json", "[]");

    hook_cmd()
        .args(["hook", "install"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("not a JSON object"));

    assert_eq!(temp.read(".claude/settings.local.json"), "[]");
}

/// > A Stop value that is not a list is reported, not replaced
#[test]
fn install_refuses_malformed_stop() {
    let temp = Project::empty();
    let original = r#"{"hooks":{"Stop":{"custom":"keep-me"},"PreToolUse":[]}}"#;
    temp.file(".claude/settings.local.json", original);

    hook_cmd()
        .args(["hook", "install"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("hooks.Stop"));

    assert_eq!(temp.read(".claude/settings.local.json"), original);
}

/// > Rewriting settings keeps the user's key order
#[test]
fn install_keeps_key_order() {
    let temp = Project::empty();
    temp.file(
        ".claude/settings.local.json",
        r#"{"permissions": {}, "hooks": {"PreToolUse": [{"hooks": [{"command": "guard", "type": "command"}]}]}}"#,
    );

    hook_cmd().args(["hook", "install"]).current_dir(temp.path()).assert().success();

    let content = temp.read(".claude/settings.local.json");
    let at = |needle: &str| content.find(needle).unwrap();
    assert!(at("\"permissions\"") < at("\"hooks\""));
    assert!(at("\"PreToolUse\"") < at("\"Stop\""));
    assert!(at("\"command\": \"guard\"") < at("\"type\""));
}

// =============================================================================
// Uninstall
// =============================================================================

/// > hook uninstall removes the entry and empty containers
#[test]
fn uninstall_removes_hook() {
    let temp = Project::empty();

    hook_cmd().args(["hook", "install"]).current_dir(temp.path()).assert().success();
    hook_cmd()
        .args(["hook", "remove"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Removed"));

    assert_eq!(temp.settings(), json!({}));
}

/// > Uninstalling when absent is a no-op
#[test]
fn uninstall_when_absent() {
    let temp = Project::empty();

    hook_cmd()
        .args(["hook", "uninstall"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("not installed"));

    assert!(!temp.settings_path().exists());
}

// =============================================================================
// Status
// =============================================================================

/// > status reports autoBurn and hook state
#[test]
fn status_reports_both() {
    let temp = Project::empty();
    temp.file("bonzai/config.json", r#"{"autoBurn": {"enabled": true}}"#);

    hook_cmd()
        .args(["hook", "status"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Config autoBurn: enabled"))
        .stdout(predicates::str::contains("Claude hook: not installed"))
        .stdout(predicates::str::contains("bonzai-hook hook install"));
}

/// > status after install shows installed and no suggestion
#[test]
fn status_after_install() {
    let temp = Project::empty();
    temp.file("bonzai/config.json", r#"{"autoBurn": {"enabled": true}}"#);
    hook_cmd().args(["hook", "install"]).current_dir(temp.path()).assert().success();

    hook_cmd()
        .args(["hook", "-s"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Claude hook: installed"))
        .stdout(predicates::str::contains("hook install").not());
}

/// > status without project config reports autoBurn disabled
#[test]
fn status_without_config() {
    let temp = Project::empty();

    hook_cmd()
        .args(["hook", "status"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Config autoBurn: disabled"));
}
