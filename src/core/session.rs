use std::path::PathBuf;

/// Mutable state of one playback session. Owned by the transport and shared
/// with the GUI shell through it; only the frame-loop thread touches it.
pub struct PlayerSession {
    /// Path of the currently loaded media, if any. Replaced wholesale on each
    /// file load; the engine releases the previous handle on replacement.
    pub media: Option<PathBuf>,
    /// Local mirror of the engine's play state. Not guaranteed consistent
    /// with the engine; it drives the poller and the mini-player handoff.
    pub is_playing: bool,
    /// Re-entrancy guard: set while the poller writes the progress indicator
    /// so the write cannot feed back into a seek.
    pub is_updating: bool,
    pub current_volume: i64,
    pub is_fullscreen: bool,
    pub is_orange: bool,
}

impl PlayerSession {
    pub fn new(volume: i64, orange_theme: bool) -> Self {
        Self {
            media: None,
            is_playing: false,
            is_updating: false,
            current_volume: volume.clamp(0, 100),
            is_fullscreen: false,
            is_orange: orange_theme,
        }
    }
}
