//! Application Controller für zentrale Event-Verarbeitung.

use super::overlay_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::DisplayId;
use crate::shared::OverlayScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger ===
            AppCommand::BeginDrag { display, pos } => {
                handlers::pointer::begin_drag(state, display, pos)
            }
            AppCommand::UpdateDrag { display, pos } => {
                handlers::pointer::update_drag(state, display, pos)
            }
            AppCommand::EndDrag { display } => handlers::pointer::end_drag(state, display),
            AppCommand::UpdateFocus { global_pos } => {
                handlers::pointer::update_focus(state, global_pos)
            }

            // === Tastatur ===
            AppCommand::SetSnapModifier { engaged } => {
                handlers::keyboard::set_snap_modifier(state, engaged)
            }
            AppCommand::NudgeActivePoint { delta } => handlers::keyboard::nudge(state, delta),
            AppCommand::ToggleActivePoint => handlers::keyboard::toggle_active_point(state),
            AppCommand::ClearMeasurement => handlers::keyboard::clear_measurement(state),

            // === Konfiguration ===
            AppCommand::SetUnit { unit } => handlers::settings::set_unit(state, unit),
            AppCommand::SetSnapIncrement { degrees } => {
                handlers::settings::set_snap_increment(state, degrees)
            }
            AppCommand::SetPointsPerInch { points_per_inch } => {
                handlers::settings::set_points_per_inch(state, points_per_inch)
            }
            AppCommand::ToggleOverlayVisibility => {
                handlers::settings::toggle_overlay_visibility(state)
            }
            AppCommand::ToggleSecondaryDial => handlers::settings::toggle_secondary_dial(state),
            AppCommand::OpenSettingsDialog => handlers::settings::open_settings_dialog(state),
            AppCommand::CloseSettingsDialog => handlers::settings::close_settings_dialog(state),
            AppCommand::PersistOptions => handlers::settings::persist_options(state)?,
            AppCommand::RequestExit => handlers::settings::request_exit(state),

            // === Displays ===
            AppCommand::ReconcileNow { displays } => {
                handlers::display::reconcile_now(state, displays)
            }
            AppCommand::ScheduleReconcile { displays, now } => {
                handlers::display::schedule_reconcile(state, displays, now)
            }
            AppCommand::RunPendingReconcile { now } => {
                handlers::display::run_pending_reconcile(state, now)
            }
        }

        Ok(())
    }

    /// Baut die Overlay-Szene eines Displays aus dem aktuellen AppState.
    pub fn build_overlay_scene(&self, state: &AppState, display: DisplayId) -> Option<OverlayScene> {
        overlay_scene::build(state, display)
    }
}
