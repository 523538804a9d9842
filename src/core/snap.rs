//! Snap-Solver: Winkelraster und Ray-Box-Clamping gegen das Sichtfenster.
//!
//! Kernstück ist der Schnitt eines Strahls mit dem achsparallelen
//! Display-Rechteck: ein gesnapptes Segment behält seine Drag-Länge,
//! außer der Strahl würde den Bildschirm verlassen — dann wird der
//! Endpunkt exakt auf den Rand gesetzt statt verworfen.

use glam::Vec2;

/// Richtungs-Komponenten unterhalb dieses Betrags beschränken ihre Achse nicht.
const AXIS_EPSILON: f32 = 0.001;

/// Liegen X- und Y-Austritt näher beieinander, gilt der Treffer als Ecke
/// und beide Achsen werden exakt auf den Rand gesetzt.
const CORNER_EPSILON: f32 = 1e-5;

/// Achsparalleles Sichtfenster `[0, w] × [0, h]` im lokalen Pixelraum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Breite und Höhe in lokalen Pixeln
    pub size: Vec2,
}

impl Viewport {
    /// Erstellt ein Sichtfenster mit der angegebenen Größe.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Prüft ob der Punkt im Fenster liegt (Ränder inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.size.x && point.y >= 0.0 && point.y <= self.size.y
    }

    /// Klemmt den Punkt komponentenweise in das Fenster.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(Vec2::ZERO, self.size)
    }
}

/// Snappt `free_point` auf das nächste Vielfache von `increment_deg`,
/// verankert in `anchor`, und klemmt das Ergebnis entlang des gesnappten
/// Strahls in das Sichtfenster.
///
/// Die Drag-Distanz bleibt erhalten, solange der Strahl das Fenster nicht
/// verlässt; sonst endet der Punkt exakt auf dem Rand (bzw. in der Ecke,
/// wenn beide Achsen gleichzeitig begrenzen).
///
/// Vorbedingung: `anchor != free_point` — ohne Richtung kein Snap.
pub fn snap_to_angle(anchor: Vec2, free_point: Vec2, increment_deg: f32, viewport: Viewport) -> Vec2 {
    debug_assert!(
        anchor != free_point,
        "snap_to_angle: Null-Segment hat keine Richtung"
    );
    debug_assert!(increment_deg > 0.0, "snap_to_angle: Raster muss > 0 sein");

    let d = free_point - anchor;
    let increment = increment_deg.to_radians();
    let snapped_angle = (d.y.atan2(d.x) / increment).round() * increment;
    let direction = Vec2::new(snapped_angle.cos(), snapped_angle.sin());

    let raw_distance = d.length();
    let t_limit = ray_exit_limit(anchor, direction, viewport);
    let clamped_distance = raw_distance.min(t_limit);

    anchor + direction * clamped_distance
}

/// Maximale Distanz entlang `direction` ab `origin`, bevor das Fenster
/// verlassen wird. Achsen mit nahezu verschwindender Komponente (exakt
/// achsparallele Richtungen) begrenzen nicht.
fn ray_exit_limit(origin: Vec2, direction: Vec2, viewport: Viewport) -> f32 {
    let mut t_limit = f32::INFINITY;
    if let Some(t) = axis_exit(origin.x, direction.x, viewport.size.x) {
        t_limit = t_limit.min(t);
    }
    if let Some(t) = axis_exit(origin.y, direction.y, viewport.size.y) {
        t_limit = t_limit.min(t);
    }
    t_limit
}

/// Austritts-Parameter einer Achse: Schnitt mit `0` bzw. `size`, je nach
/// Vorzeichen der Komponente. `None` wenn die Achse nicht begrenzt.
fn axis_exit(origin: f32, component: f32, size: f32) -> Option<f32> {
    if component.abs() <= AXIS_EPSILON {
        return None;
    }
    let bound = if component > 0.0 { size } else { 0.0 };
    let t = (bound - origin) / component;
    (t >= 0.0).then_some(t)
}

/// Randwert der getroffenen Achse für das Richtungs-Vorzeichen.
fn axis_boundary(component: f32, size: f32) -> f32 {
    if component > 0.0 {
        size
    } else {
        0.0
    }
}

/// Klemmt `target` entlang des Strahls von `anchor` durch `target` in das
/// Sichtfenster.
///
/// Liegt `target` bereits im Fenster, wird es unverändert zurückgegeben.
/// Sonst wird der kleinste positive Austritts-Parameter über die vier
/// Halbebenen bestimmt und die getroffene Koordinate *exakt* auf den Rand
/// gesetzt — eine Float-Annäherung würde am Bildschirmrand eine
/// 1-Pixel-Lücke lassen. X/Y-Austritte innerhalb von `CORNER_EPSILON`
/// gelten als Ecktreffer und setzen beide Achsen.
pub fn clamp_along_ray(anchor: Vec2, target: Vec2, viewport: Viewport) -> Vec2 {
    if viewport.contains(target) {
        return target;
    }
    debug_assert!(
        viewport.contains(anchor),
        "clamp_along_ray: Anker muss im Sichtfenster liegen"
    );

    let d = target - anchor;
    let t_x = axis_exit(anchor.x, d.x, viewport.size.x);
    let t_y = axis_exit(anchor.y, d.y, viewport.size.y);

    let t = match (t_x, t_y) {
        (Some(tx), Some(ty)) => tx.min(ty),
        (Some(tx), None) => tx,
        (None, Some(ty)) => ty,
        // Numerischer Grenzfall: target außerhalb, aber keine Achse
        // schneidet — komponentenweise klemmen.
        (None, None) => return viewport.clamp(target),
    };

    let mut clamped = anchor + d * t;

    if t_x.is_some_and(|tx| (tx - t).abs() <= CORNER_EPSILON) {
        clamped.x = axis_boundary(d.x, viewport.size.x);
    }
    if t_y.is_some_and(|ty| (ty - t).abs() <= CORNER_EPSILON) {
        clamped.y = axis_boundary(d.y, viewport.size.y);
    }

    viewport.clamp(clamped)
}
