//! Reine Geometrie-Funktionen für Zwei-Punkt-Messungen.
//!
//! Alle Funktionen sind zustandslos und arbeiten im lokalen Pixelraum
//! eines Displays (Ursprung links oben, Y wächst nach unten).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Skalenfaktor Punkte pro Zoll (72 pt = 1 in).
pub const DEFAULT_POINTS_PER_INCH: f32 = 72.0;

/// Zentimeter pro Zoll.
const CENTIMETERS_PER_INCH: f32 = 2.54;

/// Winkel innerhalb dieser Toleranz (Grad) um 0°/360° werden auf exakt 0° gesetzt.
const HORIZONTAL_JITTER_DEG: f32 = 0.05;

/// Maßeinheit für Distanz- und Delta-Anzeigen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasurementUnit {
    /// Rohe Pixel
    #[default]
    Pixels,
    /// Zoll (über `points_per_inch`)
    Inches,
    /// Zentimeter (Zoll × 2.54)
    Centimeters,
}

impl MeasurementUnit {
    /// Alle Einheiten in Menü-Reihenfolge.
    pub const ALL: [MeasurementUnit; 3] = [
        MeasurementUnit::Pixels,
        MeasurementUnit::Inches,
        MeasurementUnit::Centimeters,
    ];

    /// Kurzes Einheiten-Suffix für Readouts.
    pub fn suffix(&self) -> &'static str {
        match self {
            MeasurementUnit::Pixels => "px",
            MeasurementUnit::Inches => "in",
            MeasurementUnit::Centimeters => "cm",
        }
    }

    /// Menü-Beschriftung.
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementUnit::Pixels => "Pixel",
            MeasurementUnit::Inches => "Zoll",
            MeasurementUnit::Centimeters => "Zentimeter",
        }
    }
}

/// Euklidischer Abstand zwischen zwei Punkten.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Winkel des Segments `a → b` in Grad, normalisiert auf `[0, 360)`.
///
/// Y wird negiert, damit wachsende Winkel gegen den Uhrzeigersinn laufen
/// und "Bildschirm oben" 90° entspricht (Winkelmesser-Konvention statt
/// roher Screen-Koordinaten). Werte dicht an der Horizontalen werden auf
/// exakt 0° gesetzt, sonst flackert die Anzeige durch Float-Jitter.
///
/// Vorbedingung: `a != b` — für ein Null-Segment ist kein Winkel definiert.
pub fn angle_degrees(a: Vec2, b: Vec2) -> f32 {
    debug_assert!(a != b, "angle_degrees: Null-Segment hat keinen Winkel");

    let d = b - a;
    let mut degrees = (-d.y).atan2(d.x).to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    if degrees < HORIZONTAL_JITTER_DEG || degrees > 360.0 - HORIZONTAL_JITTER_DEG {
        return 0.0;
    }
    degrees
}

/// Komponentenweise absolute Differenz (ΔX, ΔY).
pub fn delta(a: Vec2, b: Vec2) -> Vec2 {
    (b - a).abs()
}

/// Arithmetischer Mittelpunkt des Segments.
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Rechnet einen Pixelwert in die Ziel-Einheit um.
pub fn convert(value: f32, unit: MeasurementUnit, points_per_inch: f32) -> f32 {
    match unit {
        MeasurementUnit::Pixels => value,
        MeasurementUnit::Inches => value / points_per_inch,
        MeasurementUnit::Centimeters => (value / points_per_inch) * CENTIMETERS_PER_INCH,
    }
}
