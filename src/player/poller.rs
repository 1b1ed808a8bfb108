use std::time::{Duration, Instant};

use super::transport::Transport;

pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Interval-gated progress poll, driven from the frame loop. Armed when
/// playback starts; it disarms itself on the first tick that finds the
/// session not playing, so pause/stop halt polling without an explicit
/// cancel.
pub struct ProgressPoller {
    interval: Duration,
    armed: bool,
    last_tick: Option<Instant>,
}

impl ProgressPoller {
    pub fn new() -> Self {
        Self::with_interval(POLL_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            armed: false,
            last_tick: None,
        }
    }

    /// Arm the poller; the first tick fires on the next frame.
    pub fn arm(&mut self) {
        self.armed = true;
        self.last_tick = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Run one poll cycle if due. Writes the indicator (0..100) with the
    /// session's re-entrancy flag held, so the write cannot be mistaken for
    /// a user seek. Engine errors are logged and polling stays armed.
    /// Returns whether the indicator was updated.
    pub fn tick(&mut self, transport: &mut Transport, indicator: &mut f32) -> bool {
        if !transport.session.is_playing {
            self.armed = false;
            return false;
        }
        if !self.armed {
            return false;
        }

        let now = Instant::now();
        if let Some(last) = self.last_tick {
            if now.duration_since(last) < self.interval {
                return false;
            }
        }
        self.last_tick = Some(now);

        let (length, position) = match (transport.length_ms(), transport.time_ms()) {
            (Ok(length), Ok(position)) => (length, position),
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("progress poll failed: {err}");
                return false;
            }
        };

        if length > 0 && position >= 0 {
            let progress = position as f64 / length as f64 * 100.0;
            transport.session.is_updating = true;
            *indicator = progress as f32;
            transport.session.is_updating = false;
            return true;
        }
        false
    }
}

impl Default for ProgressPoller {
    fn default() -> Self {
        Self::new()
    }
}
