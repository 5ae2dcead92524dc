//! Action handlers: UpdateAction dispatch for native hosts
//!
//! The analyze call runs on a tokio task and reports back through the
//! message channel; download URLs are handed to the system browser.

use std::process::Command;
use std::sync::Arc;

use cronos_client::AnalyzeApi;
use cronos_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::{AnalysisFailure, Message};
use crate::UpdateAction;

/// Execute an action by spawning a background task
///
/// `browser` is the configured browser command; empty uses the platform
/// opener.
pub fn handle_action<A>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
    browser: &str,
) where
    A: AnalyzeApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::AnalyzeRequest { seq, request } => {
            tokio::spawn(async move {
                let outcome = api
                    .analyze(&request)
                    .await
                    .map_err(|e| AnalysisFailure::from(&e));
                if msg_tx
                    .send(Message::AnalysisCompleted { seq, outcome })
                    .await
                    .is_err()
                {
                    debug!("Analysis #{} finished after the event loop closed", seq);
                }
            });
        }

        UpdateAction::OpenUrl { url } => {
            if let Err(e) = open_url_in_browser(&url, browser) {
                warn!("Failed to open {}: {}", url, e);
            }
        }
    }
}

/// Open `url` in a browser without blocking
///
/// If `browser` is non-empty, uses it as the browser command.
/// Otherwise uses the platform-default browser opener.
pub fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
