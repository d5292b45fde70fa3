//! System clipboard access for the copy buttons.

use arboard::Clipboard;

/// Destination for copied text.
///
/// Abstracted so the controller can be driven without a display server.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// Handler for clipboard operations backed by the OS clipboard.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }
}

/// Open the OS clipboard, or explain why it is unavailable.
pub fn system_clipboard() -> Result<Box<dyn ClipboardSink>, String> {
    ClipboardHandler::new()
        .map(|handler| Box::new(handler) as Box<dyn ClipboardSink>)
        .map_err(|e| format!("Clipboard unavailable: {}", e))
}
