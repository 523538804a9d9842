//! Handler für Zeiger-Eingaben: Drag-Lebenszyklus und Fokus-Routing.

use glam::Vec2;

use crate::app::AppState;
use crate::core::DisplayId;

/// Beginnt einen Drag auf der Session des Displays, das das Event geliefert hat.
pub fn begin_drag(state: &mut AppState, display: DisplayId, pos: Vec2) {
    let Some(session) = state.registry.session_mut(display) else {
        log::warn!("Drag-Start für unbekanntes Display {display}");
        return;
    };
    session.begin_drag(pos);
}

/// Führt den Drag-Endpunkt nach.
pub fn update_drag(state: &mut AppState, display: DisplayId, pos: Vec2) {
    if let Some(session) = state.registry.session_mut(display) {
        session.update_drag(pos);
    }
}

/// Beendet den Drag; die Punkte bleiben stehen.
pub fn end_drag(state: &mut AppState, display: DisplayId) {
    if let Some(session) = state.registry.session_mut(display) {
        session.end_drag();
    }
}

/// Bestimmt die fokussierte Session anhand der globalen Zeigerposition.
pub fn update_focus(state: &mut AppState, global_pos: Vec2) {
    state.registry.focus_for(global_pos);
}
