use crate::error::{PortfolioError, Result};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tokio::task::JoinHandle;

/// Hands `url` to the platform opener. stdio is nulled so the child cannot
/// scribble over the alternate screen; a background task reaps it.
pub fn open_url(url: &str) -> Result<()> {
    if !is_openable(url) {
        return Err(PortfolioError::Config(format!("refusing to open {url:?}")));
    }
    launch(opener(url))?;
    tracing::info!(url, "opened link");
    Ok(())
}

fn launch(mut cmd: Command) -> Result<JoinHandle<Option<ExitStatus>>> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    let mut child = cmd.spawn()?;
    Ok(tokio::spawn(async move {
        match child.wait().await {
            Ok(status) => {
                if !status.success() {
                    tracing::warn!(%status, "link opener exited with failure");
                }
                Some(status)
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not wait on link opener");
                None
            }
        }
    }))
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

fn is_openable(url: &str) -> bool {
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}
