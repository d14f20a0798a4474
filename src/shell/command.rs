//! External process execution for reachability probes.
//!
//! Probe targets are not designed to support a true health-check flag:
//! most of them print usage text and exit non-zero when handed `--help`.
//! So execution here only needs to capture output and exit status, bounded
//! by a deadline so a misbehaving binary cannot hang a run.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How often to poll a running child for exit while the deadline has not
/// passed.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captured outcome of one spawned probe process.
#[derive(Debug, Clone)]
pub struct ProbeOutput {
    /// Exit code (None if killed by signal or by the deadline).
    pub exit_code: Option<i32>,

    /// Combined stdout and stderr, stdout first.
    pub output: String,

    /// Wall-clock execution time.
    pub duration: Duration,

    /// Whether the deadline expired before the process exited.
    pub timed_out: bool,
}

impl ProbeOutput {
    /// Whether the process exited with code zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Spawn `command` with `args`, capture stdout/stderr to completion, and
/// wait for exit, bounded by `timeout`.
///
/// Stdin is closed: probes never receive input. On deadline expiry the
/// child is killed and the output captured so far is returned with
/// `timed_out` set. Spawn failures (binary missing, permission denied)
/// surface as the underlying `io::Error` for the caller to classify.
pub fn execute_probe(
    command: &str,
    args: &[String],
    timeout: Duration,
) -> std::io::Result<ProbeOutput> {
    let start = Instant::now();

    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Readers run on their own threads so a child filling one pipe while
    // we wait on the other cannot deadlock.
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let stdout_handle = thread::spawn(move || read_to_string_lossy(stdout));
    let stderr_handle = thread::spawn(move || read_to_string_lossy(stderr));

    let deadline = start + timeout;
    let mut timed_out = false;
    let status = loop {
        match child.try_wait()? {
            Some(status) => break Some(status),
            None => {
                if Instant::now() >= deadline {
                    timed_out = true;
                    // Kill and reap; the pipes close and the readers drain.
                    let _ = child.kill();
                    let _ = child.wait();
                    break None;
                }
                thread::sleep(WAIT_POLL_INTERVAL);
            }
        }
    };

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();

    let mut output = stdout_output;
    if !stderr_output.is_empty() {
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&stderr_output);
    }

    Ok(ProbeOutput {
        exit_code: status.and_then(|s| s.code()),
        output,
        duration: start.elapsed(),
        timed_out,
    })
}

fn read_to_string_lossy(pipe: Option<impl Read>) -> String {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).to_string()
}
