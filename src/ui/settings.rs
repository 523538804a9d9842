//! Einstellungs-Dialog: Einheit, Winkelraster, ppi, Anzeige-Optionen.

use crate::app::{AppIntent, AppState};
use crate::core::MeasurementUnit;

/// Zeigt den Einstellungs-Dialog und gibt die ausgelösten Intents zurück.
pub fn show_settings_window(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.ui.show_settings_dialog {
        return events;
    }

    let mut open = true;
    egui::Window::new("Lineal — Einstellungen")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            // ── Einheit ─────────────────────────────────────────
            ui.label("Einheit:");
            ui.horizontal(|ui| {
                for unit in MeasurementUnit::ALL {
                    if ui
                        .radio(state.options.unit == unit, unit.label())
                        .clicked()
                    {
                        events.push(AppIntent::UnitSelected { unit });
                    }
                }
            });

            ui.add_space(8.0);

            // ── Winkelraster ────────────────────────────────────
            ui.label("Winkelraster (Shift):");
            let mut snap_increment = state.options.snap_increment_deg;
            if ui
                .add(
                    egui::Slider::new(&mut snap_increment, 1.0..=180.0)
                        .suffix("°")
                        .step_by(1.0),
                )
                .changed()
            {
                events.push(AppIntent::SnapIncrementChanged {
                    degrees: snap_increment,
                });
            }

            ui.add_space(8.0);

            // ── Skalierung ──────────────────────────────────────
            ui.label("Punkte pro Zoll:");
            let mut ppi = state.options.points_per_inch;
            if ui
                .add(egui::DragValue::new(&mut ppi).range(24.0..=600.0).speed(1.0))
                .changed()
            {
                events.push(AppIntent::PointsPerInchChanged {
                    points_per_inch: ppi,
                });
            }

            ui.add_space(8.0);

            // ── Anzeige ─────────────────────────────────────────
            let mut dial = state.options.show_secondary_dial;
            if ui
                .checkbox(&mut dial, "Readout auch auf Sekundär-Displays")
                .changed()
            {
                events.push(AppIntent::ToggleSecondaryDialRequested);
            }

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Overlay ausblenden (Esc)").clicked() {
                    events.push(AppIntent::ToggleOverlayRequested);
                }
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });

    if !open {
        events.push(AppIntent::CloseSettingsRequested);
    }

    events
}
