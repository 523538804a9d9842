//! Overlay-Szene: read-only Vertrag zwischen App-Layer und Zeichnen.
//!
//! Die Szene ist eine Momentaufnahme pro Display; das Rendering ist eine
//! reine Funktion dieser Daten und mutiert nie Session-Zustand.

use crate::core::{DisplayId, SessionReadout};
use crate::shared::RulerOptions;

/// Alles was die Zeichen-Schicht für ein Display braucht.
#[derive(Debug, Clone)]
pub struct OverlayScene {
    /// Display, zu dem diese Szene gehört
    pub display: DisplayId,
    /// Readout des Segments, `None` wenn keines existiert
    pub readout: Option<SessionReadout>,
    /// Ob das Readout-Panel gezeichnet werden soll
    pub show_dial: bool,
    /// Ob der Instruktions-Hinweis gezeichnet werden soll
    pub show_instructions: bool,
    /// Zeichen-Optionen (Farben, Stärken)
    pub options: RulerOptions,
}
