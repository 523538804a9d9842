//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { display, pos } => {
            vec![AppCommand::BeginDrag { display, pos }]
        }
        AppIntent::PointerDragged { display, pos } => {
            vec![AppCommand::UpdateDrag { display, pos }]
        }
        AppIntent::PointerReleased { display } => vec![AppCommand::EndDrag { display }],
        AppIntent::PointerHovered { global_pos } => {
            vec![AppCommand::UpdateFocus { global_pos }]
        }
        AppIntent::SnapModifierChanged { engaged } => {
            vec![AppCommand::SetSnapModifier { engaged }]
        }
        AppIntent::NudgeKeyPressed { direction, large } => {
            let step = if large {
                state.options.nudge_step_large_px
            } else {
                state.options.nudge_step_px
            };
            vec![AppCommand::NudgeActivePoint {
                delta: direction.unit_delta() * step,
            }]
        }
        AppIntent::ToggleActivePointRequested => vec![AppCommand::ToggleActivePoint],
        AppIntent::ClearMeasurementRequested => vec![AppCommand::ClearMeasurement],
        AppIntent::UnitSelected { unit } => vec![AppCommand::SetUnit { unit }],
        AppIntent::SnapIncrementChanged { degrees } => {
            vec![AppCommand::SetSnapIncrement { degrees }]
        }
        AppIntent::PointsPerInchChanged { points_per_inch } => {
            vec![AppCommand::SetPointsPerInch { points_per_inch }]
        }
        AppIntent::ToggleOverlayRequested => vec![AppCommand::ToggleOverlayVisibility],
        AppIntent::ToggleSecondaryDialRequested => vec![AppCommand::ToggleSecondaryDial],
        AppIntent::OpenSettingsRequested => vec![AppCommand::OpenSettingsDialog],
        AppIntent::CloseSettingsRequested => {
            vec![AppCommand::CloseSettingsDialog, AppCommand::PersistOptions]
        }
        AppIntent::ExitRequested => vec![AppCommand::PersistOptions, AppCommand::RequestExit],
        AppIntent::DisplaysDetected { displays } => {
            vec![AppCommand::ReconcileNow { displays }]
        }
        AppIntent::DisplayConfigurationChanged { displays, now } => {
            vec![AppCommand::ScheduleReconcile { displays, now }]
        }
        AppIntent::ReconcileTimerFired { now } => {
            vec![AppCommand::RunPendingReconcile { now }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::NudgeDirection;
    use glam::Vec2;

    #[test]
    fn test_nudge_mapping_uses_configured_step() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::NudgeKeyPressed {
                direction: NudgeDirection::Right,
                large: false,
            },
        );
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            AppCommand::NudgeActivePoint { delta } => {
                assert_eq!(*delta, Vec2::new(state.options.nudge_step_px, 0.0));
            }
            other => panic!("Unerwarteter Command: {other:?}"),
        }
    }

    #[test]
    fn test_nudge_mapping_large_step() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::NudgeKeyPressed {
                direction: NudgeDirection::Up,
                large: true,
            },
        );
        match &commands[0] {
            AppCommand::NudgeActivePoint { delta } => {
                assert_eq!(*delta, Vec2::new(0.0, -state.options.nudge_step_large_px));
            }
            other => panic!("Unerwarteter Command: {other:?}"),
        }
    }

    #[test]
    fn test_close_settings_persists_options() {
        let state = AppState::new();
        let commands = map_intent_to_commands(&state, AppIntent::CloseSettingsRequested);
        assert!(matches!(commands[0], AppCommand::CloseSettingsDialog));
        assert!(matches!(commands[1], AppCommand::PersistOptions));
    }
}
