//! Application State — zentrale Datenhaltung.

use std::time::{Duration, Instant};

use crate::core::{DisplayDescriptor, SessionDefaults, SessionRegistry};
use crate::shared::options::DISPLAY_DEBOUNCE_MS;
use crate::shared::RulerOptions;

use super::CommandLog;

/// Interaktions-Zustand der laufenden Eingabe.
#[derive(Debug, Default)]
pub struct InteractionState {
    /// Ob der Snap-Modifier (Shift) gerade gehalten wird
    pub snap_modifier_engaged: bool,
}

/// UI-bezogener Anwendungszustand.
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Einstellungs-Dialog sichtbar ist
    pub show_settings_dialog: bool,
}

/// Debounce-Zustand des Display-Abgleichs.
///
/// Jede neue Notification ersetzt die gemerkte Display-Liste und startet
/// das Ruhefenster neu — ein laufender Timer wird immer verdrängt, nie
/// parallel ausgeführt.
#[derive(Debug, Default)]
pub struct ReconcileState {
    /// Zuletzt gemeldete Display-Liste
    pub pending_displays: Option<Vec<DisplayDescriptor>>,
    /// Frühester Zeitpunkt für den Abgleich
    pub deadline: Option<Instant>,
}

impl ReconcileState {
    /// Merkt sich die Liste und setzt das Ruhefenster neu auf.
    pub fn schedule(&mut self, displays: Vec<DisplayDescriptor>, now: Instant) {
        self.pending_displays = Some(displays);
        self.deadline = Some(now + Duration::from_millis(DISPLAY_DEBOUNCE_MS));
    }

    /// Ob das Ruhefenster abgelaufen ist.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Entnimmt die fällige Display-Liste und löscht den Timer.
    pub fn take_due(&mut self, now: Instant) -> Option<Vec<DisplayDescriptor>> {
        if !self.is_due(now) {
            return None;
        }
        self.deadline = None;
        self.pending_displays.take()
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Eine Mess-Session pro Display
    pub registry: SessionRegistry,
    /// Modifier- und Eingabe-Zustand
    pub interaction: InteractionState,
    /// UI-State (Dialoge)
    pub ui: UiState,
    /// Debounce-Zustand für Display-Änderungen
    pub reconcile: ReconcileState,
    /// Laufzeit-Optionen (Einheit, Raster, Farben)
    pub options: RulerOptions,
    /// Ob das Overlay gerade sichtbar ist (Esc schaltet um)
    pub overlay_visible: bool,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self {
            registry: SessionRegistry::new(),
            interaction: InteractionState::default(),
            ui: UiState::default(),
            reconcile: ReconcileState::default(),
            options: RulerOptions::default(),
            overlay_visible: true,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Startwerte für neu angelegte Sessions aus den aktuellen Optionen.
    pub fn session_defaults(&self) -> SessionDefaults {
        self.options.session_defaults()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
