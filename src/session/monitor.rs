//! Connection-status classification over the ssh client's stderr.
//!
//! With `-v`, OpenSSH narrates its handshake on stderr. Two marker substrings
//! are a stable enough contract to infer lifecycle state without touching the
//! wire protocol: "Connection established" (TCP connect succeeded) and
//! "Entering interactive session" (auth done, session opened). A reader
//! thread owns the lifecycle flags and surfaces discrete [`StatusEvent`]s
//! over a channel; nothing mutable is shared across the thread boundary.
//!
//! An ssh build that words these lines differently degrades gracefully: no
//! status message is emitted, and the session itself is unaffected.

use std::io::{BufRead, BufReader, Read};
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

const CONNECTED_MARKER: &str = "Connection established";
const SESSION_MARKER: &str = "Entering interactive session";

/// Discrete lifecycle events surfaced by the stderr reader.
#[derive(Debug, PartialEq, Eq)]
pub enum StatusEvent {
    /// The transport connected. Emitted at most once per attempt.
    Connected,
    /// A post-login stderr line to forward to the terminal verbatim.
    Passthrough(String),
}

/// Spawn the reader thread for a child's stderr. The thread ends on
/// end-of-stream (process exit) and drops its sender, which closes the
/// receiving side.
pub fn spawn_reader(
    stderr: impl Read + Send + 'static,
    events: Sender<StatusEvent>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let lines = BufReader::new(stderr).lines().map_while(Result::ok);
        classify_lines(lines, |event| {
            // A closed receiver just means the main flow stopped listening.
            let _ = events.send(event);
        });
    })
}

/// Run the per-line classifier. First match wins per line: the connection
/// marker flips `connected` once, the session marker flips `logged_in` once,
/// and everything after login passes through unfiltered. Verbose diagnostics
/// before login are suppressed.
fn classify_lines(lines: impl Iterator<Item = String>, mut emit: impl FnMut(StatusEvent)) {
    let mut connected = false;
    let mut logged_in = false;

    for line in lines {
        if !connected && line.contains(CONNECTED_MARKER) {
            connected = true;
            emit(StatusEvent::Connected);
        } else if !logged_in && line.contains(SESSION_MARKER) {
            logged_in = true;
        } else if logged_in {
            emit(StatusEvent::Passthrough(line));
        }
    }
}
