//! Flows rund um Display-Abgleich: Debounce, Idempotenz, Session-Lebensdauer.

use std::time::{Duration, Instant};

use glam::Vec2;
use lineal::{AppController, AppIntent, AppState, DisplayDescriptor};

fn two_displays() -> Vec<DisplayDescriptor> {
    vec![
        DisplayDescriptor::new(1, Vec2::new(0.0, 0.0), Vec2::new(1920.0, 1080.0)),
        DisplayDescriptor::new(2, Vec2::new(1920.0, 0.0), Vec2::new(1280.0, 1024.0)),
    ]
}

fn make_app() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DisplaysDetected {
                displays: two_displays(),
            },
        )
        .expect("DisplaysDetected sollte ohne Fehler durchlaufen");
    (controller, state)
}

#[test]
fn test_reconcile_twice_preserves_session_identity() {
    let (mut controller, mut state) = make_app();

    state
        .registry
        .session_mut(1)
        .unwrap()
        .begin_drag(Vec2::new(10.0, 10.0));
    state.registry.session_mut(1).unwrap().end_drag();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DisplaysDetected {
                displays: two_displays(),
            },
        )
        .expect("Zweiter Abgleich sollte idempotent sein");

    assert_eq!(state.registry.len(), 2);
    // Punkte überleben: die Session wurde nicht neu angelegt
    assert!(state.registry.session(1).unwrap().has_segment());
}

#[test]
fn test_display_disconnect_discards_session_mid_drag() {
    let (mut controller, mut state) = make_app();

    // Drag auf Display 2 beginnt — und das Display verschwindet
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                display: 2,
                pos: Vec2::new(100.0, 100.0),
            },
        )
        .unwrap();

    let only_first = vec![two_displays()[0]];
    controller
        .handle_intent(
            &mut state,
            AppIntent::DisplaysDetected {
                displays: only_first,
            },
        )
        .unwrap();

    assert_eq!(state.registry.len(), 1);
    assert!(state.registry.session(2).is_none());

    // Nachzügler-Events des verschwundenen Displays sind harmlos
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                display: 2,
                pos: Vec2::new(200.0, 100.0),
            },
        )
        .expect("Events für verschwundene Displays dürfen nicht fehlschlagen");
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased { display: 2 })
        .expect("Release für verschwundene Displays darf nicht fehlschlagen");
}

#[test]
fn test_display_change_is_debounced() {
    let (mut controller, mut state) = make_app();
    let t0 = Instant::now();

    // Burst von drei Notifications: erst zwei Displays, dann eins
    controller
        .handle_intent(
            &mut state,
            AppIntent::DisplayConfigurationChanged {
                displays: two_displays(),
                now: t0,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DisplayConfigurationChanged {
                displays: two_displays(),
                now: t0 + Duration::from_millis(100),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DisplayConfigurationChanged {
                displays: vec![two_displays()[0]],
                now: t0 + Duration::from_millis(200),
            },
        )
        .unwrap();

    // Vor Ablauf des Ruhefensters passiert nichts
    controller
        .handle_intent(
            &mut state,
            AppIntent::ReconcileTimerFired {
                now: t0 + Duration::from_millis(400),
            },
        )
        .unwrap();
    assert_eq!(state.registry.len(), 2);

    // Nach Ablauf (gerechnet ab der LETZTEN Notification) gewinnt deren Liste
    controller
        .handle_intent(
            &mut state,
            AppIntent::ReconcileTimerFired {
                now: t0 + Duration::from_millis(800),
            },
        )
        .unwrap();
    assert_eq!(state.registry.len(), 1);
    assert!(state.registry.session(2).is_none());
}

#[test]
fn test_focus_suppressed_until_debounced_reconcile_runs() {
    let (mut controller, mut state) = make_app();
    let t0 = Instant::now();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerHovered {
                global_pos: Vec2::new(100.0, 100.0),
            },
        )
        .unwrap();
    assert!(state.registry.session(1).unwrap().is_focused());

    controller
        .handle_intent(
            &mut state,
            AppIntent::DisplayConfigurationChanged {
                displays: two_displays(),
                now: t0,
            },
        )
        .unwrap();

    // Während des Ruhefensters friert der Fokus ein
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerHovered {
                global_pos: Vec2::new(2500.0, 500.0),
            },
        )
        .unwrap();
    assert!(state.registry.session(1).unwrap().is_focused());
    assert!(!state.registry.session(2).unwrap().is_focused());

    // Abgleich ausführen, danach greift das Fokus-Routing wieder
    controller
        .handle_intent(
            &mut state,
            AppIntent::ReconcileTimerFired {
                now: t0 + Duration::from_millis(600),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerHovered {
                global_pos: Vec2::new(2500.0, 500.0),
            },
        )
        .unwrap();
    assert!(state.registry.session(2).unwrap().is_focused());
}

#[test]
fn test_resize_reclamps_existing_points() {
    let (mut controller, mut state) = make_app();

    let session = state.registry.session_mut(1).unwrap();
    session.begin_drag(Vec2::new(1900.0, 1000.0));
    session.end_drag();

    let mut displays = two_displays();
    displays[0].size = Vec2::new(1280.0, 720.0);
    controller
        .handle_intent(&mut state, AppIntent::DisplaysDetected { displays })
        .unwrap();

    // Session überlebt den Resize, Punkte liegen wieder im Sichtfenster
    let session = state.registry.session(1).unwrap();
    assert_eq!(session.start_point(), Some(Vec2::new(1280.0, 720.0)));
}

#[test]
fn test_new_sessions_inherit_current_options() {
    let (mut controller, mut state) = make_app();

    controller
        .handle_intent(
            &mut state,
            AppIntent::UnitSelected {
                unit: lineal::MeasurementUnit::Centimeters,
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::SnapIncrementChanged { degrees: 15.0 })
        .unwrap();

    // Drittes Display kommt dazu: Session startet mit aktuellen Optionen
    let mut displays = two_displays();
    displays.push(DisplayDescriptor::new(
        3,
        Vec2::new(0.0, 1080.0),
        Vec2::new(800.0, 600.0),
    ));
    controller
        .handle_intent(&mut state, AppIntent::DisplaysDetected { displays })
        .unwrap();

    let session = state.registry.session(3).expect("Session 3 vorhanden");
    assert_eq!(session.unit(), lineal::MeasurementUnit::Centimeters);
    assert_eq!(session.snap_increment_deg(), 15.0);
}
