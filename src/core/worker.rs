//! Background worker for "open externally".
//!
//! Launching the platform opener can take arbitrarily long (or hang), so the event loop never
//! does it itself. Requests go over a crossbeam channel to a dedicated thread which spawns the
//! opener and reaps it on a throwaway thread. Outcomes are logged, never reported back.

use crate::error::{HorseError, Result};

use crossbeam_channel::{Sender, unbounded};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// The program (and leading arguments) used to open a path with its default application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCommand {
    program: &'static str,
    args: &'static [&'static str],
}

impl OpenCommand {
    /// Detects the native opener for this platform.
    pub(crate) fn detect() -> Result<Self> {
        if cfg!(target_os = "macos") {
            return Ok(Self {
                program: "open",
                args: &[],
            });
        }
        if cfg!(windows) {
            return Ok(Self {
                program: "cmd",
                args: &["/C", "start", ""],
            });
        }
        if cfg!(unix) {
            return which::which("xdg-open")
                .map(|_| Self {
                    program: "xdg-open",
                    args: &[],
                })
                .map_err(|_| HorseError::UnsupportedPlatform("xdg-open not found in PATH"));
        }
        Err(HorseError::UnsupportedPlatform(std::env::consts::OS))
    }

    fn command_for(&self, path: &Path) -> Command {
        let mut cmd = Command::new(self.program);
        cmd.args(self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

/// Handle to the opener thread. Dropping it lets the thread exit.
pub struct Opener {
    tx: Sender<PathBuf>,
}

impl Opener {
    /// Spawns the opener thread for the given command.
    pub(crate) fn spawn(command: OpenCommand) -> Self {
        let (tx, rx) = unbounded::<PathBuf>();

        thread::spawn(move || {
            while let Ok(path) = rx.recv() {
                match command.command_for(&path).spawn() {
                    Ok(mut child) => {
                        tracing::debug!(path = %path.display(), opener = command.program, "opened externally");
                        thread::spawn(move || {
                            let _ = child.wait();
                        });
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "external open failed");
                    }
                }
            }
        });

        Self { tx }
    }

    /// Queues `path` for opening and returns immediately.
    pub fn open(&self, path: PathBuf) {
        if self.tx.send(path).is_err() {
            tracing::warn!("opener thread is gone");
        }
    }
}
