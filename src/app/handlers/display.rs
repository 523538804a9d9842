//! Handler für Display-Konfiguration: sofortiger und debouncter Abgleich.

use std::time::Instant;

use crate::app::AppState;
use crate::core::DisplayDescriptor;

/// Gleicht die Registry sofort mit der Display-Liste ab (Startup).
pub fn reconcile_now(state: &mut AppState, displays: Vec<DisplayDescriptor>) {
    let defaults = state.session_defaults();
    state.registry.reconcile(&displays, defaults);
    log::info!("Display-Abgleich: {} Session(s)", state.registry.len());
}

/// Merkt eine Display-Änderung vor und startet das Ruhefenster neu.
///
/// Bis zum Ablauf werden Fokus-Updates unterdrückt, damit nicht auf
/// veralteter Geometrie gearbeitet wird.
pub fn schedule_reconcile(state: &mut AppState, displays: Vec<DisplayDescriptor>, now: Instant) {
    state.registry.mark_displays_changed();
    state.reconcile.schedule(displays, now);
    log::debug!("Display-Änderung gemeldet, Abgleich nach Ruhefenster");
}

/// Führt einen fälligen Abgleich aus; No-op solange das Fenster läuft.
pub fn run_pending_reconcile(state: &mut AppState, now: Instant) {
    if let Some(displays) = state.reconcile.take_due(now) {
        reconcile_now(state, displays);
    }
}
