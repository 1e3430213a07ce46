//! Bounded Subprocess Execution
//!
//! External tools run to completion or are killed at the deadline. Stdout
//! and stderr are drained on reader threads so a chatty child cannot block
//! on a full pipe while we poll for its exit.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

/// Captured output of one tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Run `cmd` to completion, killing it if it outlives `timeout`.
///
/// `label` names the tool in log lines and error messages. Output is
/// captured lossily as UTF-8.
pub fn run_with_timeout(mut cmd: Command, label: &str, timeout: Duration) -> Result<ToolOutput> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn {label} ({:?})", cmd.get_program()))?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait().with_context(|| format!("waiting for {label}"))? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                log::warn!("{label} exceeded {timeout:?}, killing");
                let _ = child.kill();
                child
                    .wait()
                    .with_context(|| format!("reaping killed {label}"))?;
                bail!("{label} timed out after {timeout:?}");
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    log::debug!("{label} exited with {status}");

    Ok(ToolOutput {
        success: status.success(),
        stdout: join_drained(stdout),
        stderr: join_drained(stderr),
    })
}

fn drain(pipe: Option<impl Read + Send + 'static>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    })
}

fn join_drained(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
