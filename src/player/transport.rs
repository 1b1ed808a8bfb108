use std::path::PathBuf;

use crate::core::PlayerSession;

use super::engine::{ColorControl, EngineError, EngineFactory, EngineOptions, MediaEngine, SurfaceBinding};

/// Relative seek step used by the back/forward transport buttons.
pub const SEEK_STEP_MS: i64 = 5000;

/// Owns the active engine instance and the session state, and translates
/// widget-level commands into engine calls. All methods run on the frame-loop
/// thread; errors are returned to the caller, which logs and drops them.
pub struct Transport {
    engine: Box<dyn MediaEngine>,
    options: EngineOptions,
    surface: SurfaceBinding,
    pub session: PlayerSession,
}

impl Transport {
    pub fn new(
        engine: Box<dyn MediaEngine>,
        options: EngineOptions,
        surface: SurfaceBinding,
        session: PlayerSession,
    ) -> Self {
        Self { engine, options, surface, session }
    }

    /// Replace the active media and start playing it. The engine releases
    /// the previously loaded handle when the new one replaces it; the engine
    /// instance itself is kept.
    pub fn load(&mut self, path: PathBuf) -> Result<(), EngineError> {
        self.engine.load(&path)?;
        self.engine.bind_surface(&self.surface)?;
        self.session.media = Some(path);
        self.play()
    }

    pub fn play(&mut self) -> Result<(), EngineError> {
        if self.session.media.is_none() {
            return Ok(());
        }
        self.engine.play()?;
        self.session.is_playing = true;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), EngineError> {
        if self.session.media.is_none() {
            return Ok(());
        }
        self.engine.pause()?;
        self.session.is_playing = false;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), EngineError> {
        if self.session.media.is_none() {
            return Ok(());
        }
        self.engine.stop()?;
        self.session.is_playing = false;
        Ok(())
    }

    /// Seek by a signed offset from the current position. Backward seeks are
    /// clamped to 0; forward seeks may run past the end (engine-defined).
    pub fn seek_relative(&mut self, delta_ms: i64) -> Result<(), EngineError> {
        if self.session.media.is_none() {
            return Ok(());
        }
        let current = self.engine.time_ms()?;
        let target = (current + delta_ms).max(0);
        self.engine.set_time_ms(target)
    }

    /// Seek to a percentage of the reported duration. A no-op while the
    /// poller is writing the indicator, without media, or when the engine
    /// reports no usable duration.
    pub fn seek_absolute(&mut self, percent: f64) -> Result<(), EngineError> {
        if self.session.is_updating || self.session.media.is_none() {
            return Ok(());
        }
        let length = self.engine.length_ms()?;
        if length <= 0 {
            return Ok(());
        }
        let target = (percent / 100.0 * length as f64) as i64;
        self.engine.set_time_ms(target)
    }

    pub fn set_volume(&mut self, volume: i64) -> Result<(), EngineError> {
        let volume = volume.clamp(0, 100);
        self.engine.set_volume(volume)?;
        self.session.current_volume = volume;
        Ok(())
    }

    pub fn set_color(&mut self, control: ColorControl, value: f64) -> Result<(), EngineError> {
        if self.session.media.is_none() {
            return Ok(());
        }
        self.engine.set_color(control, value)
    }

    pub fn time_ms(&mut self) -> Result<i64, EngineError> {
        self.engine.time_ms()
    }

    pub fn length_ms(&mut self) -> Result<i64, EngineError> {
        self.engine.length_ms()
    }

    /// Stop playback ahead of shutdown; the engine instance is released when
    /// the transport is dropped.
    pub fn shutdown(&mut self) -> Result<(), EngineError> {
        self.engine.stop()
    }

    /// Tear the current engine instance down and rebuild it on another
    /// surface, carrying position and play/pause state across. `volume` is
    /// the value handed to the new instance (see `switcher::handoff_volume`).
    pub fn rehost(
        &mut self,
        factory: &dyn EngineFactory,
        surface: SurfaceBinding,
        volume: i64,
    ) -> Result<(), EngineError> {
        let was_playing = self.session.is_playing;
        let resume_ms = if self.session.media.is_some() {
            self.engine.time_ms().unwrap_or(0)
        } else {
            0
        };

        // The old instance stops rendering before its replacement exists, so
        // the two never draw to a visible surface at the same time.
        self.engine.stop()?;
        self.engine = factory.create(&self.options)?;

        self.engine.bind_surface(&surface)?;
        self.surface = surface;
        if let Some(path) = self.session.media.clone() {
            self.engine.load(&path)?;
        }

        self.engine.play()?;
        if self.session.media.is_some() {
            self.engine.set_time_ms(resume_ms)?;
        }
        self.engine.set_volume(volume)?;
        if !was_playing {
            self.engine.pause()?;
        }
        self.session.is_playing = was_playing;
        Ok(())
    }
}
