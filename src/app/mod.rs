//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod overlay_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung
/// (Sessions, Optionen, Dialoge, Debounce).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, NudgeDirection};
pub use overlay_scene::build as build_overlay_scene;
pub use state::{AppState, InteractionState, ReconcileState, UiState};
