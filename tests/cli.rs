use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fbtouch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fbtouch").expect("binary exists");
    // Keep the user's own config out of the picture.
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/fbtouch-test-config");
    cmd
}

#[test]
fn fbtouch_help_prints_usage() {
    fbtouch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Show touchscreen events on the Linux framebuffer",
        ))
        .stdout(predicate::str::contains("<DEVICE>"));
}

#[test]
fn version_includes_package_version() {
    fbtouch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_device_argument_exits_with_one() {
    fbtouch_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_arguments_exit_with_one() {
    fbtouch_cmd()
        .args(["/dev/input/event0", "/dev/input/event1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn unreadable_input_device_is_fatal() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("event-missing");

    fbtouch_cmd()
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to open input device"))
        .stderr(predicate::str::contains("event-missing"));
}

#[test]
fn non_framebuffer_device_is_fatal() {
    let temp = TempDir::new().unwrap();
    let events = temp.path().join("events");
    let not_fb = temp.path().join("fb");
    std::fs::write(&events, b"").unwrap();
    std::fs::write(&not_fb, b"").unwrap();

    fbtouch_cmd()
        .arg(&events)
        .arg("--framebuffer")
        .arg(&not_fb)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to set up framebuffer"))
        .stderr(predicate::str::contains("FBIOGET_VSCREENINFO"));
}

#[test]
fn framebuffer_path_comes_from_config() {
    let temp = TempDir::new().unwrap();
    let events = temp.path().join("events");
    std::fs::write(&events, b"").unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        "[framebuffer]\ndevice = \"/nonexistent/fb-from-config\"\n",
    )
    .unwrap();

    fbtouch_cmd()
        .arg(&events)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/fb-from-config"));
}

#[test]
fn invalid_config_is_fatal() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[input\n").unwrap();

    fbtouch_cmd()
        .arg("/dev/input/event0")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
}
