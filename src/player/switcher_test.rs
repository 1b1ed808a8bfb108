#[cfg(test)]
mod tests {

    use std::path::PathBuf;

    use crate::core::PlayerSession;
    use crate::player::testutil::{Call, FakeFactory};
    use crate::player::{EngineFactory, EngineOptions, SessionSwitcher, SurfaceBinding, Transport};
    use crate::player::switcher::handoff_volume;

    fn transport_from(factory: &FakeFactory) -> Transport {
        let engine = factory.create(&EngineOptions::default()).unwrap();
        Transport::new(
            engine,
            EngineOptions::default(),
            SurfaceBinding::Embedded(7),
            PlayerSession::new(50, false),
        )
    }

    #[test]
    fn test_handoff_volume_is_inverted() {
        assert_eq!(handoff_volume(30), 70);
        assert_eq!(handoff_volume(100), 0);
        assert_eq!(handoff_volume(0), 100);
    }

    #[test]
    fn test_mini_round_trip_restores_position_and_play_flag() {
        let factory = FakeFactory::new(300_000);
        let mut transport = transport_from(&factory);
        let mut switcher = SessionSwitcher::new(SurfaceBinding::Embedded(7));

        transport.load(PathBuf::from("/media/demo.mkv")).unwrap();
        factory.last_engine().lock().unwrap().time_ms = 42_000;

        switcher.show_mini(&mut transport, &factory).unwrap();
        assert!(switcher.is_mini());
        switcher.hide_mini(&mut transport, &factory).unwrap();
        assert!(!switcher.is_mini());

        let final_state = factory.last_engine();
        let final_state = final_state.lock().unwrap();
        assert_eq!(final_state.time_ms, 42_000);
        assert_eq!(final_state.calls.last(), Some(&Call::SetVolume(50)));
        assert!(transport.session.is_playing);
    }

    #[test]
    fn test_mini_switch_rebuilds_engine_on_target_surface() {
        let factory = FakeFactory::new(300_000);
        let mut transport = transport_from(&factory);
        let mut switcher = SessionSwitcher::new(SurfaceBinding::Embedded(7));

        transport.load(PathBuf::from("/media/demo.mkv")).unwrap();
        factory.last_engine().lock().unwrap().time_ms = 10_000;

        switcher.show_mini(&mut transport, &factory).unwrap();

        // One engine at construction, one for the mini session.
        assert_eq!(factory.created_count(), 2);

        let mini_state = factory.last_engine();
        let mini_state = mini_state.lock().unwrap();
        assert_eq!(
            mini_state.calls,
            vec![
                Call::BindDetached,
                Call::Load(PathBuf::from("/media/demo.mkv")),
                Call::Play,
                Call::SetTime(10_000),
                Call::SetVolume(50),
            ]
        );
    }

    #[test]
    fn test_mini_volume_handoff_is_literal_inversion() {
        let factory = FakeFactory::new(300_000);
        let mut transport = transport_from(&factory);
        let mut switcher = SessionSwitcher::new(SurfaceBinding::Embedded(7));

        transport.load(PathBuf::from("/media/demo.mkv")).unwrap();
        transport.set_volume(30).unwrap();

        switcher.show_mini(&mut transport, &factory).unwrap();

        let mini_state = factory.last_engine();
        assert_eq!(mini_state.lock().unwrap().calls.last(), Some(&Call::SetVolume(70)));
        // The slider value itself is untouched by the handoff.
        assert_eq!(transport.session.current_volume, 30);
    }

    #[test]
    fn test_paused_session_stays_paused_across_switch() {
        let factory = FakeFactory::new(300_000);
        let mut transport = transport_from(&factory);
        let mut switcher = SessionSwitcher::new(SurfaceBinding::Embedded(7));

        transport.load(PathBuf::from("/media/demo.mkv")).unwrap();
        transport.pause().unwrap();
        factory.last_engine().lock().unwrap().time_ms = 5_000;

        switcher.show_mini(&mut transport, &factory).unwrap();
        assert!(!transport.session.is_playing);

        let mini_state = factory.last_engine();
        let mini_guard = mini_state.lock().unwrap();
        assert_eq!(mini_guard.calls.last(), Some(&Call::Pause));
        assert_eq!(mini_guard.time_ms, 5_000);
        // Release the engine-state lock before hide_mini: rehost() re-locks the
        // same Mutex to read the resume position, and std Mutex is not reentrant.
        drop(mini_guard);

        switcher.hide_mini(&mut transport, &factory).unwrap();
        assert!(!transport.session.is_playing);
    }

    #[test]
    fn test_redundant_show_performs_another_cycle() {
        let factory = FakeFactory::new(300_000);
        let mut transport = transport_from(&factory);
        let mut switcher = SessionSwitcher::new(SurfaceBinding::Embedded(7));

        transport.load(PathBuf::from("/media/demo.mkv")).unwrap();
        switcher.show_mini(&mut transport, &factory).unwrap();
        switcher.show_mini(&mut transport, &factory).unwrap();

        // No idempotence guard: each invocation tears down and recreates.
        assert_eq!(factory.created_count(), 3);
        assert!(switcher.is_mini());
    }

    #[test]
    fn test_switch_without_media_does_not_load() {
        let factory = FakeFactory::new(300_000);
        let mut transport = transport_from(&factory);
        let mut switcher = SessionSwitcher::new(SurfaceBinding::Embedded(7));

        switcher.show_mini(&mut transport, &factory).unwrap();

        let mini_state = factory.last_engine();
        let mini_state = mini_state.lock().unwrap();
        assert_eq!(mini_state.count(|c| matches!(c, Call::Load(_))), 0);
        // Without a bound media there is nothing to seek back into.
        assert_eq!(mini_state.count(|c| matches!(c, Call::SetTime(_))), 0);
        assert_eq!(mini_state.calls.first(), Some(&Call::BindDetached));
    }
}
