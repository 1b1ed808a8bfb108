use super::engine::{EngineError, EngineFactory, SurfaceBinding};
use super::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachState {
    Primary,
    Secondary,
}

/// Volume applied to a freshly attached session: the inversion of the
/// slider value. Switching surfaces twice leaves the engine at the inverted
/// value, since the slider itself is not updated by the handoff.
pub fn handoff_volume(volume: i64) -> i64 {
    100 - volume
}

/// Moves the playback session between the primary surface and the mini
/// player. Each direction tears the engine instance down and recreates it on
/// the target surface; there is no guard against redundant invocations, a
/// second `show_mini` simply performs another teardown/recreate cycle.
pub struct SessionSwitcher {
    attached: AttachState,
    primary: SurfaceBinding,
    mini: SurfaceBinding,
}

impl SessionSwitcher {
    pub fn new(primary: SurfaceBinding) -> Self {
        Self {
            attached: AttachState::Primary,
            primary,
            mini: SurfaceBinding::mini_window(),
        }
    }

    pub fn is_mini(&self) -> bool {
        self.attached == AttachState::Secondary
    }

    pub fn show_mini(
        &mut self,
        transport: &mut Transport,
        factory: &dyn EngineFactory,
    ) -> Result<(), EngineError> {
        let volume = handoff_volume(transport.session.current_volume);
        transport.rehost(factory, self.mini.clone(), volume)?;
        self.attached = AttachState::Secondary;
        Ok(())
    }

    pub fn hide_mini(
        &mut self,
        transport: &mut Transport,
        factory: &dyn EngineFactory,
    ) -> Result<(), EngineError> {
        let volume = handoff_volume(transport.session.current_volume);
        transport.rehost(factory, self.primary.clone(), volume)?;
        self.attached = AttachState::Primary;
        Ok(())
    }
}
