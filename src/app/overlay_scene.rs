//! Builder für Overlay-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::DisplayId;
use crate::shared::OverlayScene;

/// Baut die Szene für ein Display aus dem aktuellen AppState.
///
/// Die Snap-Projektion gilt nur für die fokussierte Session — nur sie
/// erhält den Modifier über den Input-Router.
pub fn build(state: &AppState, display: DisplayId) -> Option<OverlayScene> {
    let entry = state.registry.entry(display)?;
    let session = &entry.session;

    let snap_active = state.interaction.snap_modifier_engaged && session.is_focused();
    let readout = session.readout(snap_active);

    let show_dial =
        readout.is_some() && (session.is_focused() || state.options.show_secondary_dial);

    Some(OverlayScene {
        display,
        show_instructions: readout.is_none() && session.is_focused(),
        readout,
        show_dial,
        options: state.options.clone(),
    })
}
