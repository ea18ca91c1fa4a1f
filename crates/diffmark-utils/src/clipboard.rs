//! System clipboard access.
//!
//! On X11 and Wayland the clipboard contents are served by the process that
//! set them. Once the `Clipboard` handle is dropped (here: when the copy
//! returns) the text is only kept if a clipboard manager has taken it over.
//! Short-lived processes such as the CLI therefore depend on a running
//! clipboard manager on Linux; macOS and Windows keep the text regardless.

use arboard::Clipboard;
use thiserror::Error;

/// Errors that can occur when writing to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Copy `text` to the system clipboard, reporting failures.
pub fn try_copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard
        .set_text(text.to_owned())
        .map_err(ClipboardError::Write)?;
    log::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

/// Copy `text` to the system clipboard.
///
/// Fire-and-forget: failures are logged, never returned. See the module docs
/// for how long the text survives on Linux.
pub fn copy_text(text: &str) {
    if let Err(e) = try_copy_text(text) {
        log::warn!("{}", e);
    }
}
