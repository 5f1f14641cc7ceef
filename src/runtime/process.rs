//! External process execution
//!
//! Runs one child process per call, drains stdout and stderr into separate
//! buffers, and races the child against an optional timeout. Every outcome,
//! including a binary that cannot be launched, is reported as a
//! [`RawCommandResult`] rather than an error.

use crate::core::RawCommandResult;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

/// Error text reported when a command exceeds its timeout
pub const TIMEOUT_MESSAGE: &str = "Command timed out";

/// How long a terminated child gets to exit before it is killed outright
const KILL_GRACE: Duration = Duration::from_millis(250);

/// Options for a single command invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Working directory; the current directory when `None`
    pub cwd: Option<PathBuf>,
    /// Upper bound on how long the child may run
    pub timeout: Option<Duration>,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Anything that can run an external command and report its raw result
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn run(&self, program: &str, args: &[String], options: RunOptions) -> RawCommandResult;
}

/// Executor backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for ProcessRunner {
    async fn run(&self, program: &str, args: &[String], options: RunOptions) -> RawCommandResult {
        run_command(program, args, options).await
    }
}

/// Run `program` with `args` and collect its output
pub async fn run_command(program: &str, args: &[String], options: RunOptions) -> RawCommandResult {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .env("FORCE_COLOR", "0")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    debug!(program, ?args, cwd = ?options.cwd, "Spawning command");

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            warn!(program, error = %e, "Failed to launch command");
            return RawCommandResult::launch_failure(e.to_string());
        }
    };

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let mut out_buf = Vec::new();
    let mut err_buf = Vec::new();

    // Both pipes are drained while waiting so a chatty child cannot block on
    // a full pipe. Buffers only ever grow by whole reads, so whatever was
    // collected before a timeout is still intact afterwards.
    let finished = {
        let collect = async {
            let (_, _, status) = tokio::join!(
                drain(stdout, &mut out_buf),
                drain(stderr, &mut err_buf),
                child.wait()
            );
            status
        };
        match options.timeout {
            Some(limit) => tokio::time::timeout(limit, collect).await.ok(),
            None => Some(collect.await),
        }
    };

    let output = String::from_utf8_lossy(&out_buf).into_owned();
    let stderr_text = String::from_utf8_lossy(&err_buf).into_owned();

    match finished {
        None => {
            warn!(program, timeout = ?options.timeout, "Command timed out, terminating");
            terminate(&mut child).await;
            RawCommandResult {
                success: false,
                output,
                error: Some(TIMEOUT_MESSAGE.to_string()),
            }
        }
        Some(Err(e)) => {
            warn!(program, error = %e, "Failed waiting for command");
            RawCommandResult {
                success: false,
                output,
                error: Some(e.to_string()),
            }
        }
        Some(Ok(status)) => {
            debug!(program, ?status, "Command exited");
            from_exit(status, output, stderr_text)
        }
    }
}

fn from_exit(status: ExitStatus, output: String, stderr_text: String) -> RawCommandResult {
    let success = status.success();
    let error = if !stderr_text.is_empty() {
        Some(stderr_text)
    } else if success {
        None
    } else {
        Some(match status.code() {
            Some(code) => format!("Command exited with status {}", code),
            None => "Command terminated by signal".to_string(),
        })
    };

    RawCommandResult {
        success,
        output,
        error,
    }
}

async fn drain<R: AsyncRead + Unpin>(reader: Option<R>, sink: &mut Vec<u8>) {
    let Some(mut reader) = reader else {
        return;
    };
    let mut chunk = [0u8; 8192];
    loop {
        match reader.read(&mut chunk).await {
            Ok(0) => return,
            Ok(n) => sink.extend_from_slice(&chunk[..n]),
            Err(e) => {
                debug!(error = %e, "Stopped reading child output");
                return;
            }
        }
    }
}

/// Ask the child to stop, then kill it if it lingers
async fn terminate(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        if send_sigterm(pid) && tokio::time::timeout(KILL_GRACE, child.wait()).await.is_ok() {
            return;
        }
    }

    if let Err(e) = child.start_kill() {
        debug!(error = %e, "Child already gone");
        return;
    }
    let _ = tokio::time::timeout(KILL_GRACE, child.wait()).await;
}

/// Deliver SIGTERM to `pid`; false when the signal could not be sent
#[cfg(unix)]
fn send_sigterm(pid: u32) -> bool {
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return false;
    };
    // SAFETY: kill(2) takes no pointers; the pid belongs to a child we have not reaped.
    let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
    if rc != 0 {
        debug!(pid, error = %std::io::Error::last_os_error(), "SIGTERM not delivered");
    }
    rc == 0
}
