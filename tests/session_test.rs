//! End-to-end launcher tests against a scripted stand-in for the ssh client.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use berth::session::{Launcher, SessionError};
use berth::store::Server;
use tempfile::TempDir;

fn write_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-ssh");
    std::fs::write(&path, body).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn attempt_count(state: &Path) -> u32 {
    std::fs::read_to_string(state).unwrap().trim().parse().unwrap()
}

/// A script that counts its invocations in `state` and exits with
/// `early_exit` until the `clean_on` attempt, which exits 0.
fn counting_script(state: &Path, early_exit: u32, clean_on: u32) -> String {
    format!(
        "#!/bin/sh\n\
         state=\"{state}\"\n\
         n=$(cat \"$state\" 2>/dev/null || echo 0)\n\
         n=$((n + 1))\n\
         echo \"$n\" > \"$state\"\n\
         echo 'debug1: Connection established.' >&2\n\
         if [ \"$n\" -lt {clean_on} ]; then exit {early_exit}; fi\n\
         echo 'debug1: Entering interactive session.' >&2\n\
         exit 0\n",
        state = state.display(),
    )
}

#[test]
fn reconnects_after_abnormal_exits_until_clean() {
    let tmp = TempDir::new().unwrap();
    let state = tmp.path().join("attempts");
    let bin = write_script(tmp.path(), &counting_script(&state, 255, 3));

    let launcher =
        Launcher::new(bin.to_string_lossy()).with_retry_delay(Duration::from_millis(10));
    launcher.connect(&Server::new("t", "example.com")).unwrap();

    // Exit 255 twice, then 0: exactly three spawns, overall success.
    assert_eq!(attempt_count(&state), 3);
}

#[test]
fn ctrl_c_exit_halts_without_retry() {
    let tmp = TempDir::new().unwrap();
    let state = tmp.path().join("attempts");
    let script = format!(
        "#!/bin/sh\necho 1 > \"{}\"\nexit 130\n",
        state.display()
    );
    let bin = write_script(tmp.path(), &script);

    let launcher =
        Launcher::new(bin.to_string_lossy()).with_retry_delay(Duration::from_millis(10));
    launcher.connect(&Server::new("t", "example.com")).unwrap();
    assert_eq!(attempt_count(&state), 1);
}

#[test]
fn command_not_found_exit_halts_without_retry() {
    let tmp = TempDir::new().unwrap();
    let state = tmp.path().join("attempts");
    let script = format!(
        "#!/bin/sh\necho 1 > \"{}\"\nexit 127\n",
        state.display()
    );
    let bin = write_script(tmp.path(), &script);

    let launcher =
        Launcher::new(bin.to_string_lossy()).with_retry_delay(Duration::from_millis(10));
    launcher.connect(&Server::new("t", "example.com")).unwrap();
    assert_eq!(attempt_count(&state), 1);
}

#[test]
fn missing_binary_is_a_fatal_spawn_error() {
    let launcher = Launcher::new("/nonexistent/berth-fake-ssh");
    let err = launcher
        .connect(&Server::new("t", "example.com"))
        .unwrap_err();
    assert!(matches!(err, SessionError::Spawn { .. }));
}

#[test]
fn argument_contract_for_run_cmd() {
    let tmp = TempDir::new().unwrap();
    let args_file = tmp.path().join("args");
    let script = format!(
        "#!/bin/sh\nfor a in \"$@\"; do echo \"$a\"; done > \"{}\"\nexit 0\n",
        args_file.display()
    );
    let bin = write_script(tmp.path(), &script);

    let mut server = Server::new("t", "deploy@edge.example.com:2200");
    server.run_cmd = Some("uptime -p".into());

    let launcher = Launcher::new(bin.to_string_lossy());
    launcher.connect(&server).unwrap();

    let args: Vec<String> = std::fs::read_to_string(&args_file)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    // The remote command rides behind `--` so it can never parse as flags,
    // with a forced pseudo-terminal for interactive remote programs.
    assert_eq!(
        args,
        [
            "-p",
            "2200",
            "-v",
            "-t",
            "--",
            "deploy@edge.example.com",
            "uptime -p"
        ]
    );
}

#[test]
fn argument_contract_for_interactive_session() {
    let tmp = TempDir::new().unwrap();
    let args_file = tmp.path().join("args");
    let script = format!(
        "#!/bin/sh\nfor a in \"$@\"; do echo \"$a\"; done > \"{}\"\nexit 0\n",
        args_file.display()
    );
    let bin = write_script(tmp.path(), &script);

    let launcher = Launcher::new(bin.to_string_lossy());
    launcher.connect(&Server::new("t", "example.com")).unwrap();

    let args: Vec<String> = std::fs::read_to_string(&args_file)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    // No embedded port: defaults to 22.
    assert_eq!(args, ["-p", "22", "-v", "example.com"]);
}
