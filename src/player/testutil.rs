use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::core::PlayerSession;

use super::engine::{ColorControl, EngineError, EngineFactory, EngineOptions, MediaEngine, SurfaceBinding};
use super::transport::Transport;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Load(PathBuf),
    BindEmbedded(i64),
    BindDetached,
    Play,
    Pause,
    Stop,
    SetTime(i64),
    SetVolume(i64),
    SetColor(ColorControl, f64),
}

#[derive(Debug, Default)]
pub(crate) struct EngineState {
    pub calls: Vec<Call>,
    pub time_ms: i64,
    pub length_ms: i64,
    pub fail_length: bool,
}

impl EngineState {
    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }
}

/// Scripted engine: records every call and plays back preset time/length
/// values so transport behavior can be asserted without a real backend.
pub(crate) struct FakeEngine {
    pub state: Arc<Mutex<EngineState>>,
}

impl MediaEngine for FakeEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        self.state.lock().unwrap().calls.push(Call::Load(path.to_path_buf()));
        Ok(())
    }

    fn bind_surface(&mut self, surface: &SurfaceBinding) -> Result<(), EngineError> {
        let call = match surface {
            SurfaceBinding::Embedded(wid) => Call::BindEmbedded(*wid),
            SurfaceBinding::Detached { .. } => Call::BindDetached,
        };
        self.state.lock().unwrap().calls.push(call);
        Ok(())
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.state.lock().unwrap().calls.push(Call::Play);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.state.lock().unwrap().calls.push(Call::Pause);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        self.state.lock().unwrap().calls.push(Call::Stop);
        Ok(())
    }

    fn time_ms(&mut self) -> Result<i64, EngineError> {
        Ok(self.state.lock().unwrap().time_ms)
    }

    fn set_time_ms(&mut self, ms: i64) -> Result<(), EngineError> {
        let mut state = self.state.lock().unwrap();
        state.time_ms = ms;
        state.calls.push(Call::SetTime(ms));
        Ok(())
    }

    fn length_ms(&mut self) -> Result<i64, EngineError> {
        let state = self.state.lock().unwrap();
        if state.fail_length {
            return Err(EngineError::Backend("length unavailable".to_string()));
        }
        Ok(state.length_ms)
    }

    fn set_volume(&mut self, volume: i64) -> Result<(), EngineError> {
        self.state.lock().unwrap().calls.push(Call::SetVolume(volume));
        Ok(())
    }

    fn set_color(&mut self, control: ColorControl, value: f64) -> Result<(), EngineError> {
        self.state.lock().unwrap().calls.push(Call::SetColor(control, value));
        Ok(())
    }
}

/// Factory that hands out `FakeEngine`s and keeps every created engine's
/// state reachable for assertions.
pub(crate) struct FakeFactory {
    pub created: Arc<Mutex<Vec<Arc<Mutex<EngineState>>>>>,
    pub length_ms: i64,
}

impl FakeFactory {
    pub fn new(length_ms: i64) -> Self {
        Self {
            created: Arc::new(Mutex::new(Vec::new())),
            length_ms,
        }
    }

    pub fn last_engine(&self) -> Arc<Mutex<EngineState>> {
        self.created.lock().unwrap().last().expect("no engine created").clone()
    }

    pub fn created_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

impl EngineFactory for FakeFactory {
    fn create(&self, _options: &EngineOptions) -> Result<Box<dyn MediaEngine>, EngineError> {
        let state = Arc::new(Mutex::new(EngineState {
            length_ms: self.length_ms,
            ..EngineState::default()
        }));
        self.created.lock().unwrap().push(state.clone());
        Ok(Box::new(FakeEngine { state }))
    }
}

/// Transport over a fake engine bound to an embedded surface, plus the
/// engine's shared state for assertions.
pub(crate) fn fake_transport(length_ms: i64) -> (Transport, Arc<Mutex<EngineState>>) {
    let state = Arc::new(Mutex::new(EngineState {
        length_ms,
        ..EngineState::default()
    }));
    let engine = Box::new(FakeEngine { state: state.clone() });
    let transport = Transport::new(
        engine,
        EngineOptions::default(),
        SurfaceBinding::Embedded(1),
        PlayerSession::new(50, false),
    );
    (transport, state)
}
