//! OS-maintained clipboard change counters.
//!
//! macOS (`NSPasteboard.changeCount`) and Windows
//! (`GetClipboardSequenceNumber`) bump their counter on every write, even
//! when the new content equals the old. Other platforms have none.

pub(crate) type NativeChangeCount = fn() -> Option<u64>;

#[cfg(target_os = "macos")]
fn general_pasteboard_change_count() -> Option<u64> {
    use cocoa::base::{id, nil};
    use objc::{class, msg_send, sel, sel_impl};

    unsafe {
        let pasteboard: id = msg_send![class!(NSPasteboard), generalPasteboard];
        if pasteboard == nil {
            return None;
        }
        let count: isize = msg_send![pasteboard, changeCount];
        u64::try_from(count).ok()
    }
}

#[cfg(windows)]
fn clipboard_sequence_number() -> Option<u64> {
    // 0 when the window station denies clipboard access.
    let sequence = unsafe { winapi::um::winuser::GetClipboardSequenceNumber() };
    (sequence != 0).then_some(u64::from(sequence))
}

/// The platform's own counter, if it has one.
#[cfg(target_os = "macos")]
pub(crate) fn platform_change_count() -> Option<NativeChangeCount> {
    Some(general_pasteboard_change_count)
}

#[cfg(windows)]
pub(crate) fn platform_change_count() -> Option<NativeChangeCount> {
    Some(clipboard_sequence_number)
}

#[cfg(not(any(target_os = "macos", windows)))]
pub(crate) fn platform_change_count() -> Option<NativeChangeCount> {
    None
}
