//! Clipboard capability seam. The intake core only ever calls this; the
//! write is attempted once, with no retry and no timeout, and whatever
//! the host reports is surfaced as-is. The rendered transcript stays on
//! stdout regardless, so a failed write is never fatal.

#[derive(thiserror::Error, Debug)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}
