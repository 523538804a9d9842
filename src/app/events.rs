//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use std::time::Instant;

use glam::Vec2;

use crate::core::{DisplayDescriptor, DisplayId, MeasurementUnit};

/// Richtung eines diskreten Tastatur-Nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    /// Pfeil links
    Left,
    /// Pfeil rechts
    Right,
    /// Pfeil hoch
    Up,
    /// Pfeil runter
    Down,
}

impl NudgeDirection {
    /// Einheits-Delta im Screen-Raum (Y wächst nach unten).
    pub fn unit_delta(&self) -> Vec2 {
        match self {
            NudgeDirection::Left => Vec2::new(-1.0, 0.0),
            NudgeDirection::Right => Vec2::new(1.0, 0.0),
            NudgeDirection::Up => Vec2::new(0.0, -1.0),
            NudgeDirection::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Drag auf einem Display begonnen (lokale Display-Koordinaten)
    PointerPressed { display: DisplayId, pos: Vec2 },
    /// Drag-Position aktualisiert
    PointerDragged { display: DisplayId, pos: Vec2 },
    /// Drag beendet (Maus losgelassen)
    PointerReleased { display: DisplayId },
    /// Zeiger bewegt — globale Desktop-Koordinaten für das Fokus-Routing
    PointerHovered { global_pos: Vec2 },
    /// Snap-Modifier (Shift) gedrückt oder losgelassen
    SnapModifierChanged { engaged: bool },
    /// Pfeiltasten-Nudge des aktiven Endpunkts
    NudgeKeyPressed {
        direction: NudgeDirection,
        /// Große Schrittweite (Ctrl/Cmd gehalten)
        large: bool,
    },
    /// Aktiven Endpunkt wechseln (Tab)
    ToggleActivePointRequested,
    /// Messung verwerfen (Backspace/Entf)
    ClearMeasurementRequested,
    /// Anzeige-Einheit gewählt
    UnitSelected { unit: MeasurementUnit },
    /// Winkelraster geändert
    SnapIncrementChanged { degrees: f32 },
    /// Punkte-pro-Zoll geändert
    PointsPerInchChanged { points_per_inch: f32 },
    /// Overlay ein-/ausblenden (Esc)
    ToggleOverlayRequested,
    /// Readout-Panel auf Sekundär-Displays umschalten
    ToggleSecondaryDialRequested,
    /// Einstellungs-Dialog öffnen
    OpenSettingsRequested,
    /// Einstellungs-Dialog schließen (speichert die Optionen)
    CloseSettingsRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Displays beim Start erkannt — sofortiger Abgleich
    DisplaysDetected { displays: Vec<DisplayDescriptor> },
    /// Display-Konfiguration geändert — debouncter Abgleich
    DisplayConfigurationChanged {
        displays: Vec<DisplayDescriptor>,
        now: Instant,
    },
    /// Haupt-Loop meldet: Debounce-Fenster könnte abgelaufen sein
    ReconcileTimerFired { now: Instant },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Drag auf der Session eines Displays beginnen
    BeginDrag { display: DisplayId, pos: Vec2 },
    /// Drag-Endpunkt nachführen
    UpdateDrag { display: DisplayId, pos: Vec2 },
    /// Drag beenden
    EndDrag { display: DisplayId },
    /// Fokus anhand der globalen Zeigerposition neu bestimmen
    UpdateFocus { global_pos: Vec2 },
    /// Snap-Modifier-Zustand übernehmen (Commit beim Loslassen)
    SetSnapModifier { engaged: bool },
    /// Aktiven Endpunkt um ein Pixel-Delta verschieben
    NudgeActivePoint { delta: Vec2 },
    /// Aktiven Endpunkt wechseln
    ToggleActivePoint,
    /// Messung der fokussierten Session verwerfen
    ClearMeasurement,
    /// Einheit auf allen Sessions und in den Optionen setzen
    SetUnit { unit: MeasurementUnit },
    /// Winkelraster auf allen Sessions und in den Optionen setzen
    SetSnapIncrement { degrees: f32 },
    /// Punkte-pro-Zoll auf allen Sessions und in den Optionen setzen
    SetPointsPerInch { points_per_inch: f32 },
    /// Overlay-Sichtbarkeit umschalten
    ToggleOverlayVisibility,
    /// Sekundär-Dial umschalten
    ToggleSecondaryDial,
    /// Einstellungs-Dialog öffnen
    OpenSettingsDialog,
    /// Einstellungs-Dialog schließen
    CloseSettingsDialog,
    /// Optionen als TOML neben der Binary speichern
    PersistOptions,
    /// Anwendung kontrolliert beenden
    RequestExit,
    /// Sofortiger Display-Abgleich (Startup)
    ReconcileNow { displays: Vec<DisplayDescriptor> },
    /// Display-Abgleich mit Debounce-Fenster einplanen
    ScheduleReconcile {
        displays: Vec<DisplayDescriptor>,
        now: Instant,
    },
    /// Fälligen Abgleich ausführen (No-op solange das Fenster läuft)
    RunPendingReconcile { now: Instant },
}
