//! Mess-Session: Zustandsmaschine eines Zwei-Punkt-Segments.
//!
//! Eine Session pro Display. Lebenszyklus: `Empty` (keine Punkte) →
//! `Drawing` (Maus gedrückt, beide Punkte folgen dem Zeiger) → `Defined`
//! (Maus losgelassen, Punkte stehen) → erneut `Drawing` bei neuem Drag.
//! Geleert wird nur über [`MeasurementSession::reset`] — Ausblenden ist
//! Sache der Fenster-Schicht, nicht dieser Zustandsmaschine.

use glam::Vec2;

use super::geometry::{self, MeasurementUnit, DEFAULT_POINTS_PER_INCH};
use super::snap::{self, Viewport};

/// Standard-Winkelraster in Grad (Shift-Snap).
pub const DEFAULT_SNAP_INCREMENT_DEG: f32 = 45.0;

/// Welcher Endpunkt von diskreten Nudge-Operationen bewegt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePoint {
    /// Startpunkt des Segments
    Start,
    /// Endpunkt des Segments
    #[default]
    End,
}

/// Startwerte für neu angelegte Sessions (aus den Laufzeit-Optionen).
#[derive(Debug, Clone, Copy)]
pub struct SessionDefaults {
    /// Anzeige-Einheit
    pub unit: MeasurementUnit,
    /// Winkelraster in Grad, muss in `(0, 180]` liegen
    pub snap_increment_deg: f32,
    /// Punkte pro Zoll für die Einheiten-Umrechnung
    pub points_per_inch: f32,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            unit: MeasurementUnit::Pixels,
            snap_increment_deg: DEFAULT_SNAP_INCREMENT_DEG,
            points_per_inch: DEFAULT_POINTS_PER_INCH,
        }
    }
}

/// Read-only Momentaufnahme eines definierten Segments für die Anzeige.
///
/// Wird bei jeder Abfrage neu aus den beiden Punkten berechnet — nichts
/// davon wird in der Session gecacht.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReadout {
    /// Startpunkt im lokalen Pixelraum
    pub start_point: Vec2,
    /// Effektiver Endpunkt (bei gehaltenem Snap-Modifier der gesnappte)
    pub end_point: Vec2,
    /// Aktiver Endpunkt für Nudges
    pub active_point: ActivePoint,
    /// Distanz-Anzeige inkl. Einheiten-Suffix, z.B. "141.4 px"
    pub distance_text: String,
    /// Winkel-Anzeige, z.B. "45.0°"
    pub angle_text: String,
    /// ΔX-Anzeige (umgerechnet, ohne Suffix)
    pub delta_x_text: String,
    /// ΔY-Anzeige (umgerechnet, ohne Suffix)
    pub delta_y_text: String,
    /// Ob diese Session gerade Eingaben erhält
    pub is_focused: bool,
}

/// Zustandsmaschine eines Zwei-Punkt-Segments.
///
/// Invarianten: `end_point` ist nur gesetzt wenn auch `start_point`
/// gesetzt ist; gesetzte Punkte liegen immer im Sichtfenster (jeder
/// Schreibzugriff klemmt); `snap_increment_deg` liegt in `(0, 180]`.
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    start_point: Option<Vec2>,
    end_point: Option<Vec2>,
    is_drawing: bool,
    active_point: ActivePoint,
    snap_increment_deg: f32,
    unit: MeasurementUnit,
    points_per_inch: f32,
    is_focused: bool,
    viewport: Viewport,
}

impl MeasurementSession {
    /// Erstellt eine leere Session für das angegebene Sichtfenster.
    pub fn new(viewport: Viewport, defaults: SessionDefaults) -> Self {
        Self {
            start_point: None,
            end_point: None,
            is_drawing: false,
            active_point: ActivePoint::End,
            snap_increment_deg: defaults.snap_increment_deg,
            unit: defaults.unit,
            points_per_inch: defaults.points_per_inch,
            is_focused: false,
            viewport,
        }
    }

    // ── Zugriff ─────────────────────────────────────────────────

    /// Startpunkt, falls ein Segment begonnen wurde.
    pub fn start_point(&self) -> Option<Vec2> {
        self.start_point
    }

    /// Gespeicherter Endpunkt (ungesnappt, siehe [`Self::effective_end_point`]).
    pub fn end_point(&self) -> Option<Vec2> {
        self.end_point
    }

    /// Ob gerade ein Drag läuft.
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Aktiver Endpunkt für Nudge-Operationen.
    pub fn active_point(&self) -> ActivePoint {
        self.active_point
    }

    /// Aktuelles Winkelraster in Grad.
    pub fn snap_increment_deg(&self) -> f32 {
        self.snap_increment_deg
    }

    /// Aktuelle Anzeige-Einheit.
    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    /// Aktueller Umrechnungsfaktor Punkte pro Zoll.
    pub fn points_per_inch(&self) -> f32 {
        self.points_per_inch
    }

    /// Ob diese Session gerade Eingaben erhält.
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Aktuelles Sichtfenster.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Ob beide Punkte gesetzt sind.
    pub fn has_segment(&self) -> bool {
        self.start_point.is_some() && self.end_point.is_some()
    }

    // ── Drag-Lebenszyklus ───────────────────────────────────────

    /// Beginnt einen neuen Drag an `point` (ersetzt ein vorhandenes Segment).
    ///
    /// Läuft bereits ein Drag, wird nur der Endpunkt nachgeführt — so
    /// bleibt die Operation bei doppelt gemeldeten Drag-Starts harmlos.
    pub fn begin_drag(&mut self, point: Vec2) {
        let clamped = self.viewport.clamp(point);
        if self.is_drawing {
            self.end_point = Some(clamped);
            return;
        }
        self.start_point = Some(clamped);
        self.end_point = Some(clamped);
        self.is_drawing = true;
    }

    /// Führt den Endpunkt während eines laufenden Drags nach.
    pub fn update_drag(&mut self, point: Vec2) {
        if !self.is_drawing {
            return;
        }
        self.end_point = Some(self.viewport.clamp(point));
    }

    /// Beendet den Drag; die Punkte bleiben wie zuletzt gesetzt.
    pub fn end_drag(&mut self) {
        self.is_drawing = false;
    }

    /// Verwirft das Segment vollständig.
    pub fn reset(&mut self) {
        self.start_point = None;
        self.end_point = None;
        self.is_drawing = false;
        self.active_point = ActivePoint::End;
    }

    // ── Snap-Projektion ─────────────────────────────────────────

    /// Effektiver Endpunkt für Anzeige und Readouts.
    ///
    /// Ohne Snap-Modifier der gespeicherte Endpunkt; mit Modifier die
    /// Projektion auf das Winkelraster. Der gespeicherte Endpunkt wird
    /// dabei *nicht* überschrieben — erst [`Self::commit_snap`] beim
    /// Loslassen des Modifiers schreibt die Projektion zurück, damit die
    /// sichtbare Position nicht springt.
    pub fn effective_end_point(&self, snap_active: bool) -> Option<Vec2> {
        let start = self.start_point?;
        let end = self.end_point?;
        if snap_active && start != end {
            Some(snap::snap_to_angle(
                start,
                end,
                self.snap_increment_deg,
                self.viewport,
            ))
        } else {
            Some(end)
        }
    }

    /// Schreibt die gesnappte Projektion in den Endpunkt zurück.
    ///
    /// Wird vom Input-Router beim Loslassen des Snap-Modifiers aufgerufen.
    pub fn commit_snap(&mut self) {
        if let Some(snapped) = self.effective_end_point(true) {
            self.end_point = Some(snapped);
        }
    }

    // ── Editieren ───────────────────────────────────────────────

    /// Wechselt den aktiven Endpunkt. No-op ohne definiertes Segment.
    pub fn toggle_active_point(&mut self) {
        if !self.has_segment() {
            return;
        }
        self.active_point = match self.active_point {
            ActivePoint::Start => ActivePoint::End,
            ActivePoint::End => ActivePoint::Start,
        };
    }

    /// Setzt das Winkelraster. Werte außerhalb `(0, 180]` werden
    /// abgelehnt (No-op), damit Aufrufer ungültige Konfiguration erkennen.
    pub fn set_snap_increment(&mut self, degrees: f32) -> bool {
        if degrees > 0.0 && degrees <= 180.0 {
            self.snap_increment_deg = degrees;
            true
        } else {
            false
        }
    }

    /// Setzt die Anzeige-Einheit.
    pub fn set_unit(&mut self, unit: MeasurementUnit) {
        self.unit = unit;
    }

    /// Setzt den Umrechnungsfaktor Punkte pro Zoll.
    pub fn set_points_per_inch(&mut self, points_per_inch: f32) {
        self.points_per_inch = points_per_inch;
    }

    /// Setzt das Fokus-Flag (von der Registry verwaltet).
    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    /// Verschiebt den aktiven Punkt um ein diskretes Delta.
    ///
    /// Ohne Snap-Modifier wandert der Punkt um das rohe Delta,
    /// komponentenweise ins Sichtfenster geklemmt. Mit Modifier wird das
    /// Delta auf die gesnappte Segment-Richtung projiziert: der Nudge
    /// ändert die Segment-Länge entlang der gerasterten Linie, statt den
    /// Punkt von der Achse zu schieben. Ein Delta exakt senkrecht zur
    /// Linie hat Projektion 0 und bewegt nichts. Die Richtung wird bei
    /// jedem Aufruf aus den aktuellen Punkten neu bestimmt.
    pub fn nudge(&mut self, delta: Vec2, snap_active: bool) {
        let (Some(start), Some(end)) = (self.start_point, self.end_point) else {
            return;
        };

        if !snap_active {
            match self.active_point {
                ActivePoint::Start => {
                    self.start_point = Some(self.viewport.clamp(start + delta));
                }
                ActivePoint::End => {
                    self.end_point = Some(self.viewport.clamp(end + delta));
                }
            }
            return;
        }

        if start == end {
            // Null-Segment hat keine Richtung zum Projizieren
            return;
        }

        let increment = self.snap_increment_deg.to_radians();
        let d = end - start;
        let snapped_angle = (d.y.atan2(d.x) / increment).round() * increment;
        let direction = Vec2::new(snapped_angle.cos(), snapped_angle.sin());
        let projection = delta.dot(direction);
        let length = d.length();

        match self.active_point {
            ActivePoint::End => {
                // Länge wächst mit der Projektion, gemessen vom Startpunkt
                let target = start + direction * (length + projection);
                self.end_point = Some(snap::clamp_along_ray(start, target, self.viewport));
            }
            ActivePoint::Start => {
                // Start Richtung Ende bewegt = Segment wird kürzer
                let target = end - direction * (length - projection);
                self.start_point = Some(snap::clamp_along_ray(end, target, self.viewport));
            }
        }
    }

    /// Übernimmt ein neues Sichtfenster und klemmt vorhandene Punkte
    /// komponentenweise hinein (Display-Resize ist selten, hier reicht
    /// hartes Klemmen statt strahltreuem Clamping).
    pub fn ensure_visible(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(start) = self.start_point {
            self.start_point = Some(viewport.clamp(start));
        }
        if let Some(end) = self.end_point {
            self.end_point = Some(viewport.clamp(end));
        }
    }

    // ── Readouts ────────────────────────────────────────────────

    /// Baut die Anzeige-Momentaufnahme, falls ein Segment existiert.
    ///
    /// Alle Werte werden aus den beiden Punkten abgeleitet; ein
    /// Null-Segment meldet Distanz 0 und Winkel 0.
    pub fn readout(&self, snap_active: bool) -> Option<SessionReadout> {
        let start = self.start_point?;
        let end = self.effective_end_point(snap_active)?;

        let raw_distance = geometry::distance(start, end);
        let angle = if start == end {
            0.0
        } else {
            geometry::angle_degrees(start, end)
        };
        let d = geometry::delta(start, end);

        Some(SessionReadout {
            start_point: start,
            end_point: end,
            active_point: self.active_point,
            distance_text: format!(
                "{:.1} {}",
                geometry::convert(raw_distance, self.unit, self.points_per_inch),
                self.unit.suffix()
            ),
            angle_text: format!("{:.1}°", angle),
            delta_x_text: format!(
                "{:.1}",
                geometry::convert(d.x, self.unit, self.points_per_inch)
            ),
            delta_y_text: format!(
                "{:.1}",
                geometry::convert(d.y, self.unit, self.points_per_inch)
            ),
            is_focused: self.is_focused,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn session_1000() -> MeasurementSession {
        MeasurementSession::new(Viewport::new(1000.0, 800.0), SessionDefaults::default())
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut session = session_1000();
        assert!(!session.has_segment());

        session.begin_drag(Vec2::new(10.0, 20.0));
        assert!(session.is_drawing());
        assert_eq!(session.start_point(), Some(Vec2::new(10.0, 20.0)));
        assert_eq!(session.end_point(), Some(Vec2::new(10.0, 20.0)));

        session.update_drag(Vec2::new(110.0, 20.0));
        assert_eq!(session.end_point(), Some(Vec2::new(110.0, 20.0)));

        session.end_drag();
        assert!(!session.is_drawing());
        assert!(session.has_segment());
    }

    #[test]
    fn test_begin_drag_while_drawing_updates_only_end() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(10.0, 10.0));
        // Doppelter Drag-Start: Startpunkt bleibt stehen
        session.begin_drag(Vec2::new(50.0, 50.0));
        assert_eq!(session.start_point(), Some(Vec2::new(10.0, 10.0)));
        assert_eq!(session.end_point(), Some(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn test_new_drag_replaces_defined_segment() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(10.0, 10.0));
        session.update_drag(Vec2::new(100.0, 10.0));
        session.end_drag();

        session.begin_drag(Vec2::new(300.0, 300.0));
        assert_eq!(session.start_point(), Some(Vec2::new(300.0, 300.0)));
        assert_eq!(session.end_point(), Some(Vec2::new(300.0, 300.0)));
    }

    #[test]
    fn test_update_drag_without_drawing_is_noop() {
        let mut session = session_1000();
        session.update_drag(Vec2::new(100.0, 100.0));
        assert!(!session.has_segment());
    }

    #[test]
    fn test_drag_points_are_clamped() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(-5.0, 20.0));
        session.update_drag(Vec2::new(2000.0, 900.0));
        assert_eq!(session.start_point(), Some(Vec2::new(0.0, 20.0)));
        assert_eq!(session.end_point(), Some(Vec2::new(1000.0, 800.0)));
    }

    #[test]
    fn test_effective_end_point_is_read_time_projection() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(100.0, 100.0));
        session.update_drag(Vec2::new(200.0, 110.0));
        session.end_drag();

        let stored = session.end_point().unwrap();
        let effective = session.effective_end_point(true).unwrap();
        // Projektion auf 0°-Linie, gespeicherter Punkt unverändert
        assert_relative_eq!(effective.y, 100.0, epsilon = 1e-3);
        assert_eq!(session.end_point().unwrap(), stored);
        // Ohne Modifier kommt der rohe Punkt zurück
        assert_eq!(session.effective_end_point(false).unwrap(), stored);
    }

    #[test]
    fn test_commit_snap_writes_projection_back() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(100.0, 100.0));
        session.update_drag(Vec2::new(200.0, 110.0));
        session.end_drag();

        let effective = session.effective_end_point(true).unwrap();
        session.commit_snap();
        assert_eq!(session.end_point().unwrap(), effective);
    }

    #[test]
    fn test_toggle_active_point_requires_segment() {
        let mut session = session_1000();
        session.toggle_active_point();
        assert_eq!(session.active_point(), ActivePoint::End);

        session.begin_drag(Vec2::new(10.0, 10.0));
        session.end_drag();
        session.toggle_active_point();
        assert_eq!(session.active_point(), ActivePoint::Start);
        session.toggle_active_point();
        assert_eq!(session.active_point(), ActivePoint::End);
    }

    #[test]
    fn test_set_snap_increment_validates_range() {
        let mut session = session_1000();
        assert!(session.set_snap_increment(15.0));
        assert_relative_eq!(session.snap_increment_deg(), 15.0);

        // Außerhalb (0, 180]: abgelehnt, Wert bleibt stehen
        assert!(!session.set_snap_increment(0.0));
        assert!(!session.set_snap_increment(-45.0));
        assert!(!session.set_snap_increment(180.1));
        assert_relative_eq!(session.snap_increment_deg(), 15.0);

        assert!(session.set_snap_increment(180.0));
    }

    #[test]
    fn test_nudge_without_segment_is_noop() {
        let mut session = session_1000();
        session.nudge(Vec2::new(5.0, 0.0), false);
        assert!(!session.has_segment());
    }

    #[test]
    fn test_nudge_unconstrained_moves_active_point() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(10.0, 10.0));
        session.update_drag(Vec2::new(100.0, 10.0));
        session.end_drag();

        session.nudge(Vec2::new(5.0, -3.0), false);
        assert_eq!(session.end_point(), Some(Vec2::new(105.0, 7.0)));
        assert_eq!(session.start_point(), Some(Vec2::new(10.0, 10.0)));

        session.toggle_active_point();
        session.nudge(Vec2::new(-10.0, 0.0), false);
        assert_eq!(session.start_point(), Some(Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn test_nudge_unconstrained_clamps_at_edge() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(10.0, 10.0));
        session.update_drag(Vec2::new(998.0, 10.0));
        session.end_drag();

        session.nudge(Vec2::new(10.0, 0.0), false);
        assert_eq!(session.end_point(), Some(Vec2::new(1000.0, 10.0)));
    }

    #[test]
    fn test_nudge_perpendicular_to_snapped_line_is_noop() {
        // Szenario: 90°-gesnappte vertikale Linie, Nudge quer dazu
        let mut session = session_1000();
        session.begin_drag(Vec2::new(50.0, 0.0));
        session.update_drag(Vec2::new(50.0, 80.0));
        session.end_drag();

        session.nudge(Vec2::new(5.0, 0.0), true);
        assert_eq!(session.start_point(), Some(Vec2::new(50.0, 0.0)));
        let end = session.end_point().unwrap();
        assert_relative_eq!(end.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(end.y, 80.0, epsilon = 1e-4);
    }

    #[test]
    fn test_nudge_constrained_changes_length_along_line() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(50.0, 0.0));
        session.update_drag(Vec2::new(50.0, 80.0));
        session.end_drag();

        // Richtung start→end ist (0, 1): dy=4 verlängert um 4
        session.nudge(Vec2::new(0.0, 4.0), true);
        let end = session.end_point().unwrap();
        assert_relative_eq!(end.x, 50.0, epsilon = 1e-3);
        assert_relative_eq!(end.y, 84.0, epsilon = 1e-3);
    }

    #[test]
    fn test_nudge_constrained_start_point_shortens_towards_end() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(50.0, 0.0));
        session.update_drag(Vec2::new(50.0, 80.0));
        session.end_drag();
        session.toggle_active_point();

        // Start in Richtung Ende bewegen (Projektion +4) → Länge 76
        session.nudge(Vec2::new(0.0, 4.0), true);
        let start = session.start_point().unwrap();
        assert_relative_eq!(start.x, 50.0, epsilon = 1e-3);
        assert_relative_eq!(start.y, 4.0, epsilon = 1e-3);
        let end = session.end_point().unwrap();
        assert_relative_eq!(end.y, 80.0, epsilon = 1e-3);
    }

    #[test]
    fn test_nudge_constrained_clamps_along_ray() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(50.0, 0.0));
        session.update_drag(Vec2::new(50.0, 795.0));
        session.end_drag();

        session.nudge(Vec2::new(0.0, 20.0), true);
        let end = session.end_point().unwrap();
        // Exakt auf dem unteren Rand, nicht darüber hinaus
        assert_eq!(end.y, 800.0);
        assert_relative_eq!(end.x, 50.0, epsilon = 1e-3);
    }

    #[test]
    fn test_ensure_visible_reclamps_points() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(900.0, 700.0));
        session.update_drag(Vec2::new(990.0, 790.0));
        session.end_drag();

        session.ensure_visible(Viewport::new(800.0, 600.0));
        assert_eq!(session.start_point(), Some(Vec2::new(800.0, 600.0)));
        assert_eq!(session.end_point(), Some(Vec2::new(800.0, 600.0)));
        assert_eq!(session.viewport(), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn test_reset_clears_segment() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(10.0, 10.0));
        session.update_drag(Vec2::new(20.0, 20.0));
        session.end_drag();
        session.toggle_active_point();

        session.reset();
        assert!(!session.has_segment());
        assert!(!session.is_drawing());
        assert_eq!(session.active_point(), ActivePoint::End);
    }

    #[test]
    fn test_readout_free_measurement_scenario() {
        // Segment (0,0)→(100,0), Pixel, 72 ppi
        let mut session = session_1000();
        session.begin_drag(Vec2::new(0.0, 0.0));
        session.update_drag(Vec2::new(100.0, 0.0));
        session.end_drag();

        let readout = session.readout(false).expect("Segment vorhanden");
        assert_eq!(readout.distance_text, "100.0 px");
        assert_eq!(readout.angle_text, "0.0°");
        assert_eq!(readout.delta_x_text, "100.0");
        assert_eq!(readout.delta_y_text, "0.0");

        // Umschalten auf Zoll: 100 px / 72 ppi ≈ 1.4 in
        session.set_unit(MeasurementUnit::Inches);
        let readout = session.readout(false).unwrap();
        assert_eq!(readout.distance_text, "1.4 in");
    }

    #[test]
    fn test_readout_zero_length_segment() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(10.0, 10.0));
        session.end_drag();

        let readout = session.readout(false).expect("Segment vorhanden");
        assert_eq!(readout.distance_text, "0.0 px");
        assert_eq!(readout.angle_text, "0.0°");
    }

    #[test]
    fn test_readout_none_without_segment() {
        let session = session_1000();
        assert!(session.readout(false).is_none());
    }

    #[test]
    fn test_readout_uses_effective_end_point() {
        let mut session = session_1000();
        session.begin_drag(Vec2::new(100.0, 100.0));
        session.update_drag(Vec2::new(200.0, 110.0));
        session.end_drag();

        let readout = session.readout(true).unwrap();
        assert_eq!(readout.angle_text, "0.0°");
        assert_relative_eq!(readout.end_point.y, 100.0, epsilon = 1e-3);
    }
}
