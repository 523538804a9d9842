//! Viewport-Input-Handling: Maus- und Tastatur-Events → AppIntent.

use glam::Vec2;

use crate::app::{AppIntent, NudgeDirection};
use crate::core::DisplayDescriptor;

/// Verwaltet den Input-Zustand über Frames hinweg (Modifier-Flanken).
#[derive(Default)]
pub struct InputState {
    /// Zuletzt gemeldeter Shift-Zustand — nur Flanken werden gemeldet
    shift_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { shift_down: false }
    }

    /// Sammelt Events aus egui-Input für das Viewport eines Displays
    /// und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg: Drag-Lebenszyklus
    /// in lokalen Display-Koordinaten, Hover in globalen Koordinaten für
    /// das Fokus-Routing, Modifier-Flanken und Tastatur-Shortcuts.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        descriptor: &DisplayDescriptor,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        // Snap-Modifier: nur Änderungen melden
        let shift = ui.input(|i| i.modifiers.shift);
        if shift != self.shift_down {
            self.shift_down = shift;
            events.push(AppIntent::SnapModifierChanged { engaged: shift });
        }

        events.extend(collect_keyboard_intents(ui));

        // Hover → globale Position für das Fokus-Routing
        if let Some(pointer_pos) = response.hover_pos() {
            let local = to_local(pointer_pos, response);
            events.push(AppIntent::PointerHovered {
                global_pos: descriptor.origin + local,
            });
        }

        self.collect_drag_events(response, descriptor, &mut events);

        events
    }

    // ── Drag-Lebenszyklus ───────────────────────────────────────

    fn collect_drag_events(
        &mut self,
        response: &egui::Response,
        descriptor: &DisplayDescriptor,
        events: &mut Vec<AppIntent>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary) {
            // press_origin() liefert die exakte Klickposition vor der
            // Drag-Schwelle, interact_pointer_pos() die Position danach
            if let Some(press_pos) = response
                .ctx
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos())
            {
                events.push(AppIntent::PointerPressed {
                    display: descriptor.id,
                    pos: to_local(press_pos, response),
                });
            }
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerDragged {
                    display: descriptor.id,
                    pos: to_local(pointer_pos, response),
                });
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            events.push(AppIntent::PointerReleased {
                display: descriptor.id,
            });
        }

        // Klick ohne Drag: Punktmessung — beide Punkte an der Klickposition
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let pos = to_local(pointer_pos, response);
                events.push(AppIntent::PointerPressed {
                    display: descriptor.id,
                    pos,
                });
                events.push(AppIntent::PointerReleased {
                    display: descriptor.id,
                });
            }
        }
    }
}

/// Tastatur-Shortcuts des Overlays.
fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.input(|i| {
        let large = i.modifiers.command;
        let arrows = [
            (egui::Key::ArrowLeft, NudgeDirection::Left),
            (egui::Key::ArrowRight, NudgeDirection::Right),
            (egui::Key::ArrowUp, NudgeDirection::Up),
            (egui::Key::ArrowDown, NudgeDirection::Down),
        ];
        for (key, direction) in arrows {
            if i.key_pressed(key) {
                events.push(AppIntent::NudgeKeyPressed { direction, large });
            }
        }

        if i.key_pressed(egui::Key::Tab) {
            events.push(AppIntent::ToggleActivePointRequested);
        }
        if i.key_pressed(egui::Key::Escape) {
            events.push(AppIntent::ToggleOverlayRequested);
        }
        if i.key_pressed(egui::Key::Backspace) || i.key_pressed(egui::Key::Delete) {
            events.push(AppIntent::ClearMeasurementRequested);
        }
        if i.modifiers.command && i.key_pressed(egui::Key::Comma) {
            events.push(AppIntent::OpenSettingsRequested);
        }
        if i.modifiers.command && i.key_pressed(egui::Key::Q) {
            events.push(AppIntent::ExitRequested);
        }
    });

    events
}

fn to_local(pointer_pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    Vec2::new(local.x, local.y)
}
