#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformCommand {
    /// Start polling the clipboard
    StartClipboardWatcher,
    /// Stop polling the clipboard
    StopClipboardWatcher,
    /// Leave the runtime loop
    Shutdown,
}
