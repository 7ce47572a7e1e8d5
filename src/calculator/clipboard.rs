//! Clipboard support for the value display.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy a display value to the system clipboard.
///
/// Error text is never copied; only values that parse as numbers are.
pub fn copy_to_clipboard(value: &str) -> Result<()> {
    if super::parse_number(value).is_err() {
        anyhow::bail!("Refusing to copy non-numeric display value: {value}");
    }

    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(value.to_string())
        .context("Failed to copy to clipboard")
}
