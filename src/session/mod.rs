//! Session launch and reconnect — spawning the ssh client, watching its
//! stderr for lifecycle markers, and retrying on abnormal exits.
//!
//! The retry loop is deliberately unbounded: a dropped connection keeps
//! reconnecting every [`RETRY_DELAY`] until the session ends cleanly or the
//! user interrupts with Ctrl+C (observed as exit code 130 from the child).
//! Imposing a retry cap here would silently defeat the feature.

pub mod monitor;

use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::render;
use crate::store::Server;
use monitor::StatusEvent;

/// Fixed pause between reconnect attempts.
pub const RETRY_DELAY: Duration = Duration::from_millis(3000);

const DEFAULT_PORT: &str = "22";

/// Failures that terminate a session command. Retryable exits are not errors;
/// they are [`ExitClass::Retry`] and stay inside the loop.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The client binary could not be started at all. Fatal, never retried —
    /// a missing or unexecutable binary will not fix itself.
    #[error("failed to launch '{binary}': {source}")]
    Spawn {
        binary: String,
        source: std::io::Error,
    },

    /// Waiting on the child failed.
    #[error("failed waiting for ssh to exit: {0}")]
    Wait(std::io::Error),
}

/// How a finished attempt steers the reconnect loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    /// Halt the loop. Covers exit 0, 127 (client misconfiguration retrying
    /// cannot fix), and 130 (deliberate Ctrl+C).
    Clean,
    /// Abnormal disconnect; sleep and respawn.
    Retry,
}

/// Classify a child exit code. `None` means the child died to a signal,
/// which is treated as an abnormal disconnect.
pub fn classify_exit(code: Option<i32>) -> ExitClass {
    match code {
        Some(0) | Some(127) | Some(130) => ExitClass::Clean,
        _ => ExitClass::Retry,
    }
}

/// Split a trailing `:port` off a hostname, defaulting to port 22. Any
/// `user@` prefix rides along with the host part.
pub fn split_host_port(hostname: &str) -> (&str, &str) {
    match hostname.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() => (host, port),
        _ => (hostname, DEFAULT_PORT),
    }
}

/// Launches ssh sessions for resolved records.
#[derive(Debug, Clone)]
pub struct Launcher {
    ssh_binary: String,
    retry_delay: Duration,
}

impl Launcher {
    pub fn new(ssh_binary: impl Into<String>) -> Self {
        Self {
            ssh_binary: ssh_binary.into(),
            retry_delay: RETRY_DELAY,
        }
    }

    /// Override the reconnect delay. Meant for tests; the normal path always
    /// uses [`RETRY_DELAY`].
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Run the session for a record, reconnecting until an attempt ends
    /// cleanly. Only a spawn or wait failure breaks out as an error.
    pub fn connect(&self, server: &Server) -> Result<(), SessionError> {
        let (host, port) = split_host_port(&server.hostname);
        run_retry_loop(
            || self.spawn_attempt(host, port, server.run_cmd.as_deref()),
            self.retry_delay,
            || render::warn("Reconnecting. Press Ctrl+C to abort."),
        )
    }

    /// One spawn-to-exit cycle of the ssh client.
    ///
    /// stdin/stdout go straight to the terminal. stderr is piped through the
    /// classifier thread, which suppresses handshake chatter, announces
    /// "Connected.", and forwards everything after login verbatim. The event
    /// stream closes on stderr EOF, i.e. at process exit, so draining it
    /// before reaping the child cannot hang.
    fn spawn_attempt(
        &self,
        host: &str,
        port: &str,
        run_cmd: Option<&str>,
    ) -> Result<ExitClass, SessionError> {
        let mut args: Vec<String> = vec!["-p".into(), port.into(), "-v".into()];
        match run_cmd {
            // `--` keeps the remote command from ever parsing as client flags.
            Some(cmd) => {
                args.push("-t".into());
                args.push("--".into());
                args.push(host.into());
                args.push(cmd.into());
            }
            None => args.push(host.into()),
        }
        debug!(binary = %self.ssh_binary, ?args, "spawning ssh");

        let mut child = Command::new(&self.ssh_binary)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SessionError::Spawn {
                binary: self.ssh_binary.clone(),
                source,
            })?;

        let stderr = child.stderr.take().expect("stderr was piped");
        let (tx, rx) = mpsc::channel();
        let reader = monitor::spawn_reader(stderr, tx);

        for event in rx {
            match event {
                StatusEvent::Connected => render::status("Connected."),
                StatusEvent::Passthrough(line) => eprintln!("{line}"),
            }
        }
        // Reader has hit EOF; the child is exiting or gone.
        let _ = reader.join();

        let status = child.wait().map_err(SessionError::Wait)?;
        debug!(?status, "ssh exited");
        Ok(classify_exit(status.code()))
    }
}

/// Drive attempts until one reports [`ExitClass::Clean`], sleeping
/// `retry_delay` after each retryable exit. Factored out of [`Launcher`] so
/// the loop policy is testable without spawning processes.
fn run_retry_loop(
    mut attempt: impl FnMut() -> Result<ExitClass, SessionError>,
    retry_delay: Duration,
    mut on_retry: impl FnMut(),
) -> Result<(), SessionError> {
    loop {
        match attempt()? {
            ExitClass::Clean => return Ok(()),
            ExitClass::Retry => {
                on_retry();
                std::thread::sleep(retry_delay);
            }
        }
    }
}
