use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine call failed: {0}")]
    Backend(String),
    #[error("unsupported window system: {0}")]
    UnsupportedWindowSystem(String),
    #[error("media path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// One of the engine's video color controls. Slider range is 0.0..=2.0 with
/// 1.0 neutral; each backend maps that onto its own scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorControl {
    Brightness,
    Contrast,
    Saturation,
}

/// Where an engine instance renders its video.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceBinding {
    /// A window region owned by the GUI shell, identified by its platform
    /// window id (HWND / NSView pointer / X11 window).
    Embedded(i64),
    /// A window the engine creates and owns itself.
    Detached {
        title: String,
        width: u32,
        height: u32,
        always_on_top: bool,
    },
}

impl SurfaceBinding {
    pub fn mini_window() -> Self {
        SurfaceBinding::Detached {
            title: "Mini Player".to_string(),
            width: 300,
            height: 200,
            always_on_top: true,
        }
    }

    /// Used for the primary session when no platform window id is available
    /// (e.g. Wayland, which has no embeddable window id).
    pub fn fallback_window() -> Self {
        SurfaceBinding::Detached {
            title: "Reproductor Multimedia".to_string(),
            width: 900,
            height: 600,
            always_on_top: false,
        }
    }
}

/// Instance-level engine flags, applied once at engine creation.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub disable_hw_decode: bool,
    pub cache_secs: f64,
    pub quiet: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            disable_hw_decode: true,
            cache_secs: 3.0,
            quiet: true,
        }
    }
}

/// The playback engine consumed by the transport. One instance owns at most
/// one active playback session and one bound output surface; releasing the
/// instance (dropping it) frees its resources.
pub trait MediaEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;
    fn bind_surface(&mut self, surface: &SurfaceBinding) -> Result<(), EngineError>;
    fn play(&mut self) -> Result<(), EngineError>;
    fn pause(&mut self) -> Result<(), EngineError>;
    fn stop(&mut self) -> Result<(), EngineError>;
    fn time_ms(&mut self) -> Result<i64, EngineError>;
    fn set_time_ms(&mut self, ms: i64) -> Result<(), EngineError>;
    fn length_ms(&mut self) -> Result<i64, EngineError>;
    fn set_volume(&mut self, volume: i64) -> Result<(), EngineError>;
    fn set_color(&mut self, control: ColorControl, value: f64) -> Result<(), EngineError>;
}

/// Creates engine instances. The mini-player switch tears an instance down
/// and asks the factory for a fresh one rather than rebinding the old one.
pub trait EngineFactory {
    fn create(&self, options: &EngineOptions) -> Result<Box<dyn MediaEngine>, EngineError>;
}
