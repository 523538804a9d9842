//! Handler für Konfiguration: Einheit, Winkelraster, Sichtbarkeit, Dialog.

use crate::app::AppState;
use crate::core::MeasurementUnit;
use crate::shared::RulerOptions;

/// Setzt die Anzeige-Einheit in den Optionen und auf allen Sessions.
pub fn set_unit(state: &mut AppState, unit: MeasurementUnit) {
    state.options.unit = unit;
    state.registry.for_each_session_mut(|s| s.set_unit(unit));
    log::info!("Einheit umgestellt auf {}", unit.suffix());
}

/// Setzt das Winkelraster. Werte außerhalb `(0, 180]` werden abgelehnt
/// und gewarnt — der bestehende Wert bleibt unverändert.
pub fn set_snap_increment(state: &mut AppState, degrees: f32) {
    if !(degrees > 0.0 && degrees <= 180.0) {
        log::warn!("Ungültiges Winkelraster {degrees}°, erwartet (0, 180]");
        return;
    }
    state.options.snap_increment_deg = degrees;
    state.registry.for_each_session_mut(|s| {
        s.set_snap_increment(degrees);
    });
}

/// Setzt den Umrechnungsfaktor Punkte pro Zoll.
pub fn set_points_per_inch(state: &mut AppState, points_per_inch: f32) {
    if points_per_inch <= 0.0 {
        log::warn!("Ungültiger ppi-Wert {points_per_inch}");
        return;
    }
    state.options.points_per_inch = points_per_inch;
    state
        .registry
        .for_each_session_mut(|s| s.set_points_per_inch(points_per_inch));
}

/// Schaltet das Overlay ein oder aus.
pub fn toggle_overlay_visibility(state: &mut AppState) {
    state.overlay_visible = !state.overlay_visible;
    log::info!(
        "Overlay {}",
        if state.overlay_visible {
            "eingeblendet"
        } else {
            "ausgeblendet"
        }
    );
}

/// Schaltet das Readout-Panel auf Sekundär-Displays um.
pub fn toggle_secondary_dial(state: &mut AppState) {
    state.options.show_secondary_dial = !state.options.show_secondary_dial;
}

/// Öffnet den Einstellungs-Dialog.
pub fn open_settings_dialog(state: &mut AppState) {
    state.ui.show_settings_dialog = true;
}

/// Schließt den Einstellungs-Dialog.
pub fn close_settings_dialog(state: &mut AppState) {
    state.ui.show_settings_dialog = false;
}

/// Speichert die Optionen als TOML neben der Binary.
pub fn persist_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&RulerOptions::config_path())
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
