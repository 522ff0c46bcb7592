//! External process invocation
//!
//! Runs the matcher under test exactly once with the query payload piped
//! to its stdin, capturing stdout and stderr and measuring the wall-clock
//! duration from spawn to exit. The run is fully synchronous; with a
//! timeout configured the wait is bounded and the child is killed on
//! expiry.

use std::io::{ErrorKind, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

/// How often the bounded wait polls the child for exit
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Errors produced while invoking the external tool
#[derive(Error, Debug)]
pub enum RunError {
    #[error("cannot launch {app}: {source}")]
    Spawn {
        app: String,
        source: std::io::Error,
    },

    #[error("cannot feed queries to {app}: {source}")]
    Stdin {
        app: String,
        source: std::io::Error,
    },

    #[error("{app} failed ({status}); captured output:\n{output}")]
    ExternalToolFailed {
        app: String,
        status: ExitStatus,
        output: String,
    },

    #[error("{app} did not finish within {timeout_secs}s")]
    TimedOut { app: String, timeout_secs: f64 },

    #[error("error while waiting for {app}: {source}")]
    Wait {
        app: String,
        source: std::io::Error,
    },
}

/// Output of one successful external invocation
#[derive(Debug)]
pub struct RunOutput {
    /// stdout and stderr of the tool, concatenated
    pub output: String,
    /// Wall-clock duration from spawn to exit
    pub elapsed: Duration,
}

/// Run `<app> <trie>` once with `payload` on its stdin and block until it
/// exits.
///
/// A non-zero exit status is surfaced as [`RunError::ExternalToolFailed`]
/// with the captured output. When `timeout` is set and expires first, the
/// child is killed and [`RunError::TimedOut`] is returned.
pub fn run_once(
    app: &str,
    trie: &str,
    payload: &str,
    timeout: Option<Duration>,
) -> Result<RunOutput, RunError> {
    let start = Instant::now();
    let mut child = Command::new(app)
        .arg(trie)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| RunError::Spawn {
            app: app.to_string(),
            source,
        })?;

    // Drain stdout/stderr on reader threads so a chatty tool cannot fill
    // the pipe and deadlock against our stdin write.
    let stdout = child.stdout.take().map(spawn_reader);
    let stderr = child.stderr.take().map(spawn_reader);

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(source) = stdin.write_all(payload.as_bytes()) {
            // A tool that exits without reading stdin closes the pipe
            // early; the exit status check below reports what happened.
            if source.kind() != ErrorKind::BrokenPipe {
                kill_and_reap(&mut child);
                return Err(RunError::Stdin {
                    app: app.to_string(),
                    source,
                });
            }
        }
        // stdin drops here, closing the pipe so the tool sees EOF
    }

    let status = wait_child(&mut child, app, timeout)?;
    let elapsed = start.elapsed();

    let mut output = join_reader(stdout);
    output.push_str(&join_reader(stderr));

    debug!(%status, elapsed_secs = elapsed.as_secs_f64(), "external tool finished");

    if !status.success() {
        return Err(RunError::ExternalToolFailed {
            app: app.to_string(),
            status,
            output,
        });
    }

    Ok(RunOutput { output, elapsed })
}

/// Wait for the child to exit, optionally bounded by `timeout`.
fn wait_child(
    child: &mut Child,
    app: &str,
    timeout: Option<Duration>,
) -> Result<ExitStatus, RunError> {
    let Some(timeout) = timeout else {
        return child.wait().map_err(|source| RunError::Wait {
            app: app.to_string(),
            source,
        });
    };

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    kill_and_reap(child);
                    return Err(RunError::TimedOut {
                        app: app.to_string(),
                        timeout_secs: timeout.as_secs_f64(),
                    });
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(source) => {
                return Err(RunError::Wait {
                    app: app.to_string(),
                    source,
                })
            }
        }
    }
}

/// Kill the child and reap it so no zombie lingers.
fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        // Tools are not required to emit UTF-8; capture what we can
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_reader(handle: Option<thread::JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}
