// SPDX-License-Identifier: MPL-2.0
//! Handing URIs (mail links, web pages) to the desktop.

use crate::error::{Error, Result};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Opens a URI with whatever the platform associates with it.
pub trait Launcher: Send + Sync + std::fmt::Debug {
    /// # Errors
    ///
    /// Returns [`Error::Launch`] if no handler could be started.
    fn open(&self, uri: &str) -> Result<()>;
}

/// Launcher backed by `xdg-open`, `open`, or `cmd /C start`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, uri: &str) -> Result<()> {
        let mut command = platform_command(uri);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        match command.spawn() {
            Ok(_) => {
                log::info!("opened {}", redact(uri));
                Ok(())
            }
            Err(err) => {
                log::warn!("could not open {}: {}", redact(uri), err);
                Err(Error::Launch(err.to_string()))
            }
        }
    }
}

#[cfg(target_os = "windows")]
fn platform_command(uri: &str) -> Command {
    let mut command = Command::new("cmd");
    // Empty title argument so `start` does not treat the URI as one
    command.args(["/C", "start", "", uri]);
    command
}

#[cfg(target_os = "macos")]
fn platform_command(uri: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(uri);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_command(uri: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(uri);
    command
}

/// Keeps message bodies out of the log.
fn redact(uri: &str) -> &str {
    uri.split_once('?').map_or(uri, |(head, _)| head)
}

/// Launcher that only remembers what it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every `open` fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            opened: Mutex::default(),
            fail: true,
        }
    }

    /// URIs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl Launcher for RecordingLauncher {
    fn open(&self, uri: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Launch("launcher configured to fail".into()));
        }
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(uri.to_string());
        }
        Ok(())
    }
}

/// Waits `delay`, then opens `uri`.
///
/// # Errors
///
/// Propagates the launcher failure.
pub async fn open_after(launcher: Arc<dyn Launcher>, uri: String, delay: Duration) -> Result<()> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    launcher.open(&uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn redact_strips_query() {
        assert_eq!(
            redact("mailto:a@b.c?subject=secret&body=x"),
            "mailto:a@b.c"
        );
        assert_eq!(redact("https://github.com"), "https://github.com");
    }

    #[test]
    fn recording_launcher_keeps_order() {
        let launcher = RecordingLauncher::new();
        launcher.open("a").expect("open should succeed");
        launcher.open("b").expect("open should succeed");
        assert_eq!(launcher.opened(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn failing_launcher_reports_launch_error() {
        let launcher = RecordingLauncher::failing();
        assert!(matches!(launcher.open("x"), Err(Error::Launch(_))));
        assert!(launcher.opened().is_empty());
    }

    #[tokio::test]
    async fn open_after_waits_for_delay() {
        let launcher = Arc::new(RecordingLauncher::new());
        let start = Instant::now();
        open_after(launcher.clone(), "mailto:x".into(), Duration::from_millis(50))
            .await
            .expect("open should succeed");
        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(launcher.opened(), vec!["mailto:x".to_string()]);
    }
}
