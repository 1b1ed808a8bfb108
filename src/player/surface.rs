use raw_window_handle::{HasWindowHandle, RawWindowHandle};

use super::engine::EngineError;

/// Extract the platform window id the engine expects for embedded rendering.
/// Covers the window systems with an embeddable id; everything else (notably
/// Wayland) is reported as unsupported so the caller can fall back to a
/// detached engine-owned window.
pub fn window_id(window: &impl HasWindowHandle) -> Result<i64, EngineError> {
    let handle = window
        .window_handle()
        .map_err(|err| EngineError::Backend(format!("window handle unavailable: {err}")))?;

    match handle.as_raw() {
        RawWindowHandle::Win32(handle) => Ok(handle.hwnd.get() as i64),
        RawWindowHandle::AppKit(handle) => Ok(handle.ns_view.as_ptr() as i64),
        RawWindowHandle::Xlib(handle) => Ok(handle.window as i64),
        RawWindowHandle::Xcb(handle) => Ok(i64::from(handle.window.get())),
        other => Err(EngineError::UnsupportedWindowSystem(format!("{other:?}"))),
    }
}
