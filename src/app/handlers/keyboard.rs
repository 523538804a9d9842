//! Handler für Tastatur-Eingaben: Nudge, Endpunkt-Wechsel, Snap-Modifier.

use glam::Vec2;

use crate::app::AppState;

/// Verschiebt den aktiven Endpunkt der fokussierten Session.
///
/// Mit gehaltenem Snap-Modifier wandert das Delta als Projektion entlang
/// der gerasterten Segment-Richtung (siehe `MeasurementSession::nudge`).
pub fn nudge(state: &mut AppState, delta: Vec2) {
    let snap_active = state.interaction.snap_modifier_engaged;
    if let Some(session) = state.registry.focused_session_mut() {
        session.nudge(delta, snap_active);
    }
}

/// Wechselt den aktiven Endpunkt der fokussierten Session.
pub fn toggle_active_point(state: &mut AppState) {
    if let Some(session) = state.registry.focused_session_mut() {
        session.toggle_active_point();
    }
}

/// Übernimmt den Snap-Modifier-Zustand.
///
/// Beim Loslassen wird die zuletzt angezeigte Snap-Projektion in den
/// Endpunkt der fokussierten Session geschrieben, damit die sichtbare
/// Position nicht zurückspringt.
pub fn set_snap_modifier(state: &mut AppState, engaged: bool) {
    let was_engaged = state.interaction.snap_modifier_engaged;
    state.interaction.snap_modifier_engaged = engaged;

    if was_engaged && !engaged {
        if let Some(session) = state.registry.focused_session_mut() {
            session.commit_snap();
        }
    }
}

/// Verwirft die Messung der fokussierten Session.
pub fn clear_measurement(state: &mut AppState) {
    if let Some(session) = state.registry.focused_session_mut() {
        session.reset();
        log::info!("Messung verworfen");
    }
}
