//! Lineal Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, NudgeDirection};
pub use crate::core::{
    ActivePoint, DisplayDescriptor, DisplayId, MeasurementSession, MeasurementUnit,
    SessionDefaults, SessionReadout, SessionRegistry, Viewport,
};
pub use shared::{OverlayScene, RulerOptions};
