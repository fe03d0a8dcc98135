//! Staged diff capture from a `git diff --staged` subprocess.

use std::io;
use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

use crate::buffer::ByteBuffer;
use crate::error::CaptureError;

/// Check that git is available before spawning anything.
///
/// Uses the `which` crate for cross-platform executable detection.
/// Works on Windows (where.exe), Unix (which), and WASI.
pub fn ensure_git_installed() -> Result<(), CaptureError> {
    if which::which("git").is_err() {
        return Err(CaptureError::GitNotInstalled);
    }
    Ok(())
}

/// Capture the staged diff of the current directory's repository.
pub async fn capture_staged_diff() -> Result<String, CaptureError> {
    capture_staged_diff_in(Path::new(".")).await
}

/// Capture the staged diff of the repository at `repo_dir` as text.
///
/// Runs `git diff --staged` and reads its stdout line by line, keeping each
/// line's terminator, until end of stream. The diff is of unbounded size, so
/// the stream is consumed incrementally rather than in one bulk read.
///
/// A clean staging area is not an error; the result is an empty string.
pub async fn capture_staged_diff_in(repo_dir: &Path) -> Result<String, CaptureError> {
    let mut child = Command::new("git")
        .args(["diff", "--staged"])
        .current_dir(repo_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(CaptureError::SpawnFailed)?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| CaptureError::ReadFailed(io::Error::other("child stdout was not captured")))?;

    let mut reader = BufReader::new(stdout);
    let mut accumulated = ByteBuffer::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .await
            .map_err(CaptureError::ReadFailed)?;
        if n == 0 {
            break;
        }
        accumulated.append(&line)?;
    }

    // Stdout is drained; collect stderr and the exit status.
    let output = child
        .wait_with_output()
        .await
        .map_err(CaptureError::ReadFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);
        return Err(CaptureError::NonZeroExit { code, stderr });
    }

    debug!(bytes = accumulated.len(), "captured staged diff");

    // The diff stream carries no encoding guarantee.
    Ok(String::from_utf8_lossy(accumulated.as_bytes()).to_string())
}
