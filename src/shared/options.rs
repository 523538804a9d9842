//! Zentrale Konfiguration für Lineal.
//!
//! `RulerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{MeasurementUnit, SessionDefaults, DEFAULT_POINTS_PER_INCH};

// ── Messen ──────────────────────────────────────────────────────────

/// Standard-Winkelraster in Grad (Shift-Snap).
pub const SNAP_INCREMENT_DEG: f32 = 45.0;
/// Nudge-Schrittweite in Pixeln (Pfeiltaste).
pub const NUDGE_STEP_PX: f32 = 1.0;
/// Große Nudge-Schrittweite in Pixeln (Pfeiltaste + Ctrl/Cmd).
pub const NUDGE_STEP_LARGE_PX: f32 = 10.0;

// ── Display-Abgleich ────────────────────────────────────────────────

/// Ruhefenster in Millisekunden, bevor Display-Änderungen abgeglichen
/// werden. Betriebssysteme melden eine physische Änderung als Burst
/// mehrerer Notifications; nur die letzte zählt.
pub const DISPLAY_DEBOUNCE_MS: u64 = 500;
/// Abfrageintervall der Display-Konfiguration in Millisekunden.
pub const DISPLAY_POLL_INTERVAL_MS: u64 = 1000;

// ── Segment-Rendering ───────────────────────────────────────────────

/// Linienstärke des Messsegments in Pixeln.
pub const SEGMENT_STROKE_WIDTH: f32 = 3.0;
/// Farbe des Messsegments (RGBA: Blau).
pub const SEGMENT_COLOR: [f32; 4] = [0.1, 0.45, 0.95, 1.0];
/// Radius der Endpunkt-Griffe in Pixeln.
pub const HANDLE_RADIUS: f32 = 5.0;
/// Stärke der weißen Griff-Umrandung.
pub const HANDLE_OUTLINE_WIDTH: f32 = 2.0;
/// Füllfarbe des Start-Griffs (RGBA: Blau).
pub const HANDLE_COLOR_START: [f32; 4] = [0.1, 0.45, 0.95, 1.0];
/// Füllfarbe des End-Griffs (RGBA: Rot).
pub const HANDLE_COLOR_END: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
/// Abstand der Teilstriche entlang des Segments in Pixeln.
pub const TICK_SPACING_PX: f32 = 10.0;
/// Halbe Länge eines Teilstrichs in Pixeln.
pub const TICK_HALF_LENGTH_PX: f32 = 5.0;
/// Teilstriche auf einem Vielfachen dieses Abstands werden doppelt so lang.
pub const MAJOR_TICK_EVERY_PX: f32 = 50.0;
/// Strichlänge der gestrichelten Delta-Hilfslinien.
pub const DELTA_DASH_LENGTH: f32 = 5.0;

// ── Readout-Panel ───────────────────────────────────────────────────

/// Feste Breite des Readout-Panels in Pixeln.
pub const READOUT_PANEL_WIDTH: f32 = 140.0;
/// Vertikaler Versatz des Panels über dem Segment-Mittelpunkt.
pub const READOUT_PANEL_OFFSET_Y: f32 = 60.0;
/// Deckungsgrad des Panel-Hintergrunds.
pub const READOUT_PANEL_ALPHA: f32 = 0.75;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `lineal.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulerOptions {
    // ── Messen ──────────────────────────────────────────────────
    /// Anzeige-Einheit
    pub unit: MeasurementUnit,
    /// Winkelraster in Grad, muss in `(0, 180]` liegen
    pub snap_increment_deg: f32,
    /// Punkte pro Zoll für die Einheiten-Umrechnung
    pub points_per_inch: f32,
    /// Nudge-Schrittweite in Pixeln
    pub nudge_step_px: f32,
    /// Große Nudge-Schrittweite (mit Ctrl/Cmd)
    pub nudge_step_large_px: f32,

    // ── Anzeige ─────────────────────────────────────────────────
    /// Readout-Panel auch auf nicht fokussierten Displays zeigen
    #[serde(default)]
    pub show_secondary_dial: bool,
    /// Farbe des Messsegments (RGBA)
    pub segment_color: [f32; 4],
    /// Füllfarbe des Start-Griffs
    pub handle_color_start: [f32; 4],
    /// Füllfarbe des End-Griffs
    pub handle_color_end: [f32; 4],
}

impl Default for RulerOptions {
    fn default() -> Self {
        Self {
            unit: MeasurementUnit::Pixels,
            snap_increment_deg: SNAP_INCREMENT_DEG,
            points_per_inch: DEFAULT_POINTS_PER_INCH,
            nudge_step_px: NUDGE_STEP_PX,
            nudge_step_large_px: NUDGE_STEP_LARGE_PX,

            show_secondary_dial: false,
            segment_color: SEGMENT_COLOR,
            handle_color_start: HANDLE_COLOR_START,
            handle_color_end: HANDLE_COLOR_END,
        }
    }
}

impl RulerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("lineal"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("lineal.toml")
    }

    /// Startwerte für neu angelegte Sessions.
    pub fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            unit: self.unit,
            snap_increment_deg: self.snap_increment_deg,
            points_per_inch: self.points_per_inch,
        }
    }
}
