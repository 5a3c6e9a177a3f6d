//! Share capabilities: platform share target and external navigation.
//!
//! Both are modeled as injected capabilities so the share flow can be
//! exercised in tests without touching the host platform. The system
//! implementations report what the platform actually supports; the flow
//! degrades to a compose URL whenever native sharing is unavailable.

use anyhow::Result;
use std::process::Command;

use crate::constants::INTENT_BASE_URL;

/// A file-plus-text payload offered to the platform share facility.
#[derive(Debug, Clone, Copy)]
pub struct ShareRequest<'a> {
    /// Name the receiving application should see (e.g., "card.png").
    pub file_name: &'a str,
    /// MIME type of the payload.
    pub mime: &'a str,
    /// Encoded image bytes.
    pub bytes: &'a [u8],
    /// Caption text shared alongside the file.
    pub text: &'a str,
}

/// Platform-native share facility.
pub trait ShareTarget {
    /// Whether the platform advertises support for sharing this exact payload.
    fn can_share(&self, request: &ShareRequest<'_>) -> bool;

    /// Hands the payload to the platform share facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects the payload or the user
    /// dismisses the share dialog.
    fn share(&self, request: &ShareRequest<'_>) -> Result<()>;
}

/// Fire-and-forget external navigation (opening a URL in the browser).
pub trait Navigator {
    /// Opens the URL in a new browsing context.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform opener cannot be spawned.
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs through the platform opener command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open(&self, url: &str) -> Result<()> {
        let mut command = opener_command(url);
        command.spawn()?;
        Ok(())
    }
}

/// Builds the platform-specific opener invocation.
fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// The platform share facility as seen from a terminal application.
///
/// Desktop platforms do not expose a share sheet to terminal processes, so
/// `can_share` reports `false` and the flow routes to the compose-URL
/// fallback, exactly like a browser without `navigator.canShare`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShare;

impl ShareTarget for SystemShare {
    fn can_share(&self, _request: &ShareRequest<'_>) -> bool {
        false
    }

    fn share(&self, _request: &ShareRequest<'_>) -> Result<()> {
        anyhow::bail!("platform share is not available on this system")
    }
}

/// Builds the social compose URL for the given message.
///
/// # Examples
///
/// ```
/// use makecard::export::intent_url;
///
/// let url = intent_url("#justmakethings");
/// assert_eq!(url, "https://x.com/intent/post?text=%23justmakethings");
/// ```
#[must_use]
pub fn intent_url(text: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("{INTENT_BASE_URL}?text={encoded}")
}
