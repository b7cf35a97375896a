//! Running external commands with a wall-clock bound.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error, warn};

use crate::error::{
    CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error,
};

/// How often a running child is polled for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Logs the full command line at debug level.
pub fn log_command(cmd: &Command) {
    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    debug!(
        "Running: {} {}",
        cmd.get_program().to_string_lossy(),
        args.join(" ")
    );
}

/// Runs `cmd` to completion, killing it once `timeout` has elapsed.
///
/// stdout and stderr are captured into anonymous temporary files rather than
/// pipes, so the child never stalls on a full pipe while we poll it.
/// A non-zero exit status is an error carrying the captured stderr.
pub fn run_command_with_timeout(cmd: &mut Command, timeout: Duration) -> CoreResult<Output> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    log_command(cmd);

    let mut stdout_file = tempfile::tempfile()?;
    let mut stderr_file = tempfile::tempfile()?;

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout_file.try_clone()?))
        .stderr(Stdio::from(stderr_file.try_clone()?))
        .spawn()
        .map_err(|e| {
            error!("Failed to spawn {}: {}", program, e);
            command_start_error(program.as_str(), e)
        })?;

    let status = match wait_with_deadline(&mut child, &program, timeout)? {
        Some(status) => status,
        None => {
            kill_and_reap(&mut child, &program);
            error!("{} timed out after {:?}", program, timeout);
            return Err(CoreError::Timeout {
                command: program,
                timeout,
            });
        }
    };

    let output = Output {
        status,
        stdout: read_captured(&mut stdout_file)?,
        stderr: read_captured(&mut stderr_file)?,
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        error!("{} failed with {}: {}", program, output.status, stderr);
        return Err(command_failed_error(program, output.status, stderr));
    }

    Ok(output)
}

/// Polls the child until it exits or the deadline passes. `None` means the
/// deadline passed first and the child is still running.
///
/// A timeout too large to represent as an `Instant` means no deadline.
fn wait_with_deadline(
    child: &mut Child,
    program: &str,
    timeout: Duration,
) -> CoreResult<Option<ExitStatus>> {
    let deadline = Instant::now().checked_add(timeout);
    if deadline.is_none() {
        debug!("Timeout {:?} for {} is unbounded", timeout, program);
    }
    loop {
        if let Some(status) = child
            .try_wait()
            .map_err(|e| command_wait_error(program, e))?
        {
            return Ok(Some(status));
        }

        let Some(deadline) = deadline else {
            thread::sleep(POLL_INTERVAL);
            continue;
        };
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

fn kill_and_reap(child: &mut Child, program: &str) {
    if let Err(e) = child.kill() {
        warn!("Failed to kill {} (pid {}): {}", program, child.id(), e);
    }
    if let Err(e) = child.wait() {
        warn!("Failed to reap {} (pid {}): {}", program, child.id(), e);
    }
}

fn read_captured(file: &mut File) -> CoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    file.seek(SeekFrom::Start(0))?;
    file.read_to_end(&mut buf)?;
    Ok(buf)
}
