//! Zeichnet das Messwerkzeug: Segment, Teilstriche, Griffe, Readout-Panel.
//!
//! Reine Funktion der [`OverlayScene`] — hier wird kein Zustand mutiert.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Shape, Stroke, Vec2 as EVec2};

use crate::core::geometry;
use crate::core::{ActivePoint, SessionReadout};
use crate::shared::options::{
    DELTA_DASH_LENGTH, HANDLE_OUTLINE_WIDTH, HANDLE_RADIUS, MAJOR_TICK_EVERY_PX,
    READOUT_PANEL_ALPHA, READOUT_PANEL_OFFSET_Y, READOUT_PANEL_WIDTH, SEGMENT_STROKE_WIDTH,
    TICK_HALF_LENGTH_PX, TICK_SPACING_PX,
};
use crate::shared::OverlayScene;

/// Zeichnet die komplette Szene eines Displays in den Painter.
pub fn paint(painter: &egui::Painter, viewport_rect: Rect, scene: &OverlayScene) {
    if scene.show_instructions {
        paint_instructions(painter, viewport_rect, scene.options.snap_increment_deg);
    }

    let Some(readout) = scene.readout.as_ref() else {
        return;
    };

    let origin = viewport_rect.min;
    let start = to_pos(origin, readout.start_point);
    let end = to_pos(origin, readout.end_point);

    paint_delta_triangle(painter, start, end);

    let segment_color = color32(scene.options.segment_color);
    painter.line_segment([start, end], Stroke::new(SEGMENT_STROKE_WIDTH, segment_color));

    paint_tick_marks(painter, start, end, segment_color);

    paint_handle(
        painter,
        start,
        color32(scene.options.handle_color_start),
        readout.active_point == ActivePoint::Start,
    );
    paint_handle(
        painter,
        end,
        color32(scene.options.handle_color_end),
        readout.active_point == ActivePoint::End,
    );

    if scene.show_dial {
        let midpoint = to_pos(
            origin,
            geometry::midpoint(readout.start_point, readout.end_point),
        );
        paint_readout_panel(painter, midpoint, readout);
    }
}

// ── Delta-Hilfslinien ───────────────────────────────────────────────

/// Gestricheltes Dreieck aus ΔX- und ΔY-Kathete.
fn paint_delta_triangle(painter: &egui::Painter, start: Pos2, end: Pos2) {
    let corner = Pos2::new(end.x, start.y);
    let stroke = Stroke::new(1.0, Color32::WHITE);
    painter.extend(Shape::dashed_line(
        &[start, corner, end],
        stroke,
        DELTA_DASH_LENGTH,
        DELTA_DASH_LENGTH,
    ));
}

// ── Teilstriche ─────────────────────────────────────────────────────

/// Teilstriche quer zum Segment, alle `TICK_SPACING_PX` Pixel;
/// auf Vielfachen von `MAJOR_TICK_EVERY_PX` doppelt so lang.
fn paint_tick_marks(painter: &egui::Painter, start: Pos2, end: Pos2, color: Color32) {
    let d = end - start;
    let length = d.length();
    if length <= 0.0 {
        return;
    }

    let dir = d / length;
    let perp = EVec2::new(-dir.y, dir.x);
    let stroke = Stroke::new(1.5, color);

    let mut current = TICK_SPACING_PX;
    while current < length {
        let pos = start + dir * current;
        let half = if (current as i32) % (MAJOR_TICK_EVERY_PX as i32) == 0 {
            TICK_HALF_LENGTH_PX * 2.0
        } else {
            TICK_HALF_LENGTH_PX
        };
        painter.line_segment([pos - perp * half, pos + perp * half], stroke);
        current += TICK_SPACING_PX;
    }
}

// ── Griffe ──────────────────────────────────────────────────────────

/// Endpunkt-Griff: gefüllter Kreis mit weißer Umrandung; der aktive
/// Endpunkt bekommt einen zusätzlichen Markierungsring.
fn paint_handle(painter: &egui::Painter, pos: Pos2, fill: Color32, is_active: bool) {
    painter.circle_filled(pos, HANDLE_RADIUS, fill);
    painter.circle_stroke(
        pos,
        HANDLE_RADIUS,
        Stroke::new(HANDLE_OUTLINE_WIDTH, Color32::WHITE),
    );
    if is_active {
        painter.circle_stroke(pos, HANDLE_RADIUS + 4.0, Stroke::new(1.0, Color32::WHITE));
    }
}

// ── Readout-Panel ───────────────────────────────────────────────────

/// Panel mit Distanz, Winkel und Deltas, über dem Segment-Mittelpunkt.
fn paint_readout_panel(painter: &egui::Painter, midpoint: Pos2, readout: &SessionReadout) {
    const ROW_HEIGHT: f32 = 16.0;
    const PADDING: f32 = 8.0;

    let panel_height = 4.0 * ROW_HEIGHT + 2.0 * PADDING + 4.0;
    let center = Pos2::new(midpoint.x, midpoint.y - READOUT_PANEL_OFFSET_Y);
    let panel = Rect::from_center_size(center, EVec2::new(READOUT_PANEL_WIDTH, panel_height));

    painter.rect_filled(
        panel,
        CornerRadius::same(8),
        Color32::from_black_alpha((READOUT_PANEL_ALPHA * 255.0) as u8),
    );

    let font = FontId::proportional(12.0);
    let small = FontId::proportional(11.0);
    let left = panel.min.x + PADDING;
    let right = panel.max.x - PADDING;
    let mut y = panel.min.y + PADDING;

    let row = |label: &str, value: &str, font: &FontId, y: f32| {
        painter.text(
            Pos2::new(left, y),
            Align2::LEFT_TOP,
            label,
            font.clone(),
            Color32::WHITE,
        );
        painter.text(
            Pos2::new(right, y),
            Align2::RIGHT_TOP,
            value,
            font.clone(),
            Color32::WHITE,
        );
    };

    row("Dist:", &readout.distance_text, &font, y);
    y += ROW_HEIGHT;
    row("Winkel:", &readout.angle_text, &font, y);
    y += ROW_HEIGHT;

    // Trennlinie zwischen Haupt- und Delta-Werten
    painter.line_segment(
        [Pos2::new(left, y + 2.0), Pos2::new(right, y + 2.0)],
        Stroke::new(1.0, Color32::from_white_alpha(128)),
    );
    y += 4.0;

    row("ΔX:", &readout.delta_x_text, &small, y);
    y += ROW_HEIGHT;
    row("ΔY:", &readout.delta_y_text, &small, y);
}

// ── Instruktions-Hinweis ────────────────────────────────────────────

/// Hinweistext solange keine Messung existiert.
fn paint_instructions(painter: &egui::Painter, viewport_rect: Rect, snap_increment_deg: f32) {
    let center = viewport_rect.center();
    let panel = Rect::from_center_size(center, EVec2::new(320.0, 64.0));
    painter.rect_filled(panel, CornerRadius::same(10), Color32::from_black_alpha(160));

    painter.text(
        Pos2::new(center.x, center.y - 10.0),
        Align2::CENTER_CENTER,
        "Klicken und ziehen zum Messen",
        FontId::proportional(14.0),
        Color32::WHITE,
    );
    painter.text(
        Pos2::new(center.x, center.y + 12.0),
        Align2::CENTER_CENTER,
        format!("Shift rastet auf {snap_increment_deg:.0}°-Winkel ein"),
        FontId::proportional(11.0),
        Color32::from_white_alpha(200),
    );
}

// ── Hilfsfunktionen ─────────────────────────────────────────────────

fn to_pos(origin: Pos2, point: glam::Vec2) -> Pos2 {
    Pos2::new(origin.x + point.x, origin.y + point.y)
}

fn color32(rgba: [f32; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
