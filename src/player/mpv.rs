use std::path::Path;

use libmpv2::Mpv;

use super::engine::{ColorControl, EngineError, EngineFactory, EngineOptions, MediaEngine, SurfaceBinding};

/// libmpv-backed engine. All calls go through mpv's property/command
/// interface; the instance tears down its playback resources on drop.
pub struct MpvEngine {
    mpv: Mpv,
}

fn backend(err: libmpv2::Error) -> EngineError {
    EngineError::Backend(format!("{err:?}"))
}

/// Map the 0.0..=2.0 slider range (1.0 neutral) onto mpv's -100..=100
/// integer adjust range.
pub(crate) fn adjust_to_mpv(value: f64) -> i64 {
    (((value - 1.0) * 100.0).round() as i64).clamp(-100, 100)
}

impl ColorControl {
    fn property_name(self) -> &'static str {
        match self {
            ColorControl::Brightness => "brightness",
            ColorControl::Contrast => "contrast",
            ColorControl::Saturation => "saturation",
        }
    }
}

impl MpvEngine {
    pub fn new(options: &EngineOptions) -> Result<Self, EngineError> {
        let mpv = Mpv::with_initializer(|init| {
            if options.quiet {
                init.set_property("really-quiet", true)?;
            }
            if options.disable_hw_decode {
                init.set_property("hwdec", "no")?;
            }
            init.set_property("cache-secs", options.cache_secs)?;
            // Hold the last frame at end-of-file so time/duration queries
            // stay valid until the next load.
            init.set_property("keep-open", "yes")?;
            Ok(())
        })
        .map_err(backend)?;

        Ok(Self { mpv })
    }
}

impl MediaEngine for MpvEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        let target = path
            .to_str()
            .ok_or_else(|| EngineError::InvalidPath(path.to_path_buf()))?;
        // Quoted so paths with spaces survive mpv's command parser.
        self.mpv
            .command("loadfile", &[&format!("\"{target}\""), "replace"])
            .map_err(backend)
    }

    fn bind_surface(&mut self, surface: &SurfaceBinding) -> Result<(), EngineError> {
        match surface {
            SurfaceBinding::Embedded(wid) => {
                self.mpv.set_property("wid", *wid).map_err(backend)
            }
            SurfaceBinding::Detached { title, width, height, always_on_top } => {
                self.mpv.set_property("force-window", "yes").map_err(backend)?;
                self.mpv.set_property("title", title.as_str()).map_err(backend)?;
                self.mpv
                    .set_property("geometry", format!("{width}x{height}").as_str())
                    .map_err(backend)?;
                self.mpv.set_property("ontop", *always_on_top).map_err(backend)
            }
        }
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.mpv.set_property("pause", false).map_err(backend)
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.mpv.set_property("pause", true).map_err(backend)
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        self.mpv.command("stop", &[]).map_err(backend)
    }

    fn time_ms(&mut self) -> Result<i64, EngineError> {
        let seconds: f64 = self.mpv.get_property("time-pos").map_err(backend)?;
        Ok((seconds * 1000.0) as i64)
    }

    fn set_time_ms(&mut self, ms: i64) -> Result<(), EngineError> {
        let seconds = ms as f64 / 1000.0;
        self.mpv
            .command("seek", &[&format!("{seconds:.3}"), "absolute"])
            .map_err(backend)
    }

    fn length_ms(&mut self) -> Result<i64, EngineError> {
        let seconds: f64 = self.mpv.get_property("duration").map_err(backend)?;
        Ok((seconds * 1000.0) as i64)
    }

    fn set_volume(&mut self, volume: i64) -> Result<(), EngineError> {
        self.mpv.set_property("volume", volume).map_err(backend)
    }

    fn set_color(&mut self, control: ColorControl, value: f64) -> Result<(), EngineError> {
        self.mpv
            .set_property(control.property_name(), adjust_to_mpv(value))
            .map_err(backend)
    }
}

pub struct MpvEngineFactory;

impl EngineFactory for MpvEngineFactory {
    fn create(&self, options: &EngineOptions) -> Result<Box<dyn MediaEngine>, EngineError> {
        Ok(Box::new(MpvEngine::new(options)?))
    }
}
