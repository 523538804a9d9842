//! Lineal — Bildschirm-Lineal.
//!
//! Transparentes, randloses Always-on-top-Overlay pro Monitor.
//! Drag definiert ein Zwei-Punkt-Segment mit Live-Abstand, Winkel
//! und Deltas; die Session unter dem Zeiger erhält die Eingaben.

use std::time::{Duration, Instant};

use eframe::egui;
use glam::Vec2;
use lineal::shared::options::DISPLAY_POLL_INTERVAL_MS;
use lineal::{ui, AppController, AppIntent, AppState, DisplayDescriptor, RulerOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Lineal v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("Lineal")
                .with_transparent(true)
                .with_decorations(false)
                .with_always_on_top(),
            ..Default::default()
        };

        eframe::run_native(
            "Lineal",
            options,
            Box::new(|_cc| Ok(Box::new(RulerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct RulerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// Zuletzt erkannte Display-Liste (für Änderungs-Erkennung)
    known_displays: Vec<DisplayDescriptor>,
    /// Zeitpunkt der letzten Display-Abfrage
    last_display_poll: Option<Instant>,
    /// Zuletzt an den Root-Viewport gemeldete Geometrie
    root_geometry: Option<DisplayDescriptor>,
}

impl RulerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = RulerOptions::config_path();
        let ruler_options = RulerOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = ruler_options;

        let mut app = Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            known_displays: Vec::new(),
            last_display_poll: None,
            root_geometry: None,
        };

        // Startup: Displays erkennen, Sessions sofort anlegen
        let displays = detect_displays();
        app.known_displays = displays.clone();
        app.process_events(vec![AppIntent::DisplaysDetected { displays }]);

        app
    }

    /// Fragt die Display-Konfiguration in Intervallen ab und meldet
    /// Änderungen als Intent; prüft außerdem das Debounce-Fenster.
    fn poll_displays(&mut self) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let now = Instant::now();

        let poll_due = self.last_display_poll.is_none_or(|last| {
            now.duration_since(last) >= Duration::from_millis(DISPLAY_POLL_INTERVAL_MS)
        });
        if poll_due {
            self.last_display_poll = Some(now);
            let displays = detect_displays();
            if displays != self.known_displays {
                log::info!("Display-Konfiguration geändert ({} Displays)", displays.len());
                self.known_displays = displays.clone();
                events.push(AppIntent::DisplayConfigurationChanged { displays, now });
            }
        }

        if self.state.reconcile.deadline.is_some() {
            events.push(AppIntent::ReconcileTimerFired { now });
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Zeichnet das Overlay eines Displays und sammelt dessen Eingaben.
    fn draw_display(
        &mut self,
        ctx: &egui::Context,
        descriptor: DisplayDescriptor,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(
                    self.input
                        .collect_viewport_events(ui, &response, &descriptor),
                );

                if self.state.overlay_visible {
                    if let Some(scene) = self
                        .controller
                        .build_overlay_scene(&self.state, descriptor.id)
                    {
                        ui::overlay::paint(ui.painter(), rect, &scene);
                    }
                }
            });

        events
    }

    /// Hält Position und Größe des Root-Viewports auf dem ersten Display.
    fn sync_root_viewport(&mut self, ctx: &egui::Context, descriptor: DisplayDescriptor) {
        if self.root_geometry == Some(descriptor) {
            return;
        }
        self.root_geometry = Some(descriptor);
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
            descriptor.origin.x,
            descriptor.origin.y,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            descriptor.size.x,
            descriptor.size.y,
        )));
    }

    /// ViewportBuilder für die Overlays der weiteren Displays.
    fn overlay_viewport_builder(descriptor: DisplayDescriptor) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title("Lineal")
            .with_position(egui::pos2(descriptor.origin.x, descriptor.origin.y))
            .with_inner_size(egui::vec2(descriptor.size.x, descriptor.size.y))
            .with_transparent(true)
            .with_decorations(false)
            .with_always_on_top()
    }
}

impl eframe::App for RulerApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Durchsichtiges Overlay — der Desktop bleibt sichtbar
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.poll_displays();

        // Erstes Display zeichnet in den Root-Viewport, jedes weitere in
        // einen eigenen Immediate-Viewport an seiner globalen Position.
        let descriptors: Vec<DisplayDescriptor> = self
            .state
            .registry
            .iter()
            .map(|entry| entry.descriptor)
            .collect();

        for (index, descriptor) in descriptors.into_iter().enumerate() {
            if index == 0 {
                self.sync_root_viewport(ctx, descriptor);
                events.extend(self.draw_display(ctx, descriptor));
            } else {
                let viewport_id = egui::ViewportId::from_hash_of(descriptor.id);
                let builder = Self::overlay_viewport_builder(descriptor);
                let collected =
                    ctx.show_viewport_immediate(viewport_id, builder, |viewport_ctx, _class| {
                        self.draw_display(viewport_ctx, descriptor)
                    });
                events.extend(collected);
            }
        }

        events.extend(ui::show_settings_window(ctx, &self.state));

        self.process_events(events);

        // Flüssiges Feedback während Drag und Modifier; sonst reicht der
        // Poll-Rhythmus der Display-Abfrage
        if ctx.input(|i| i.pointer.is_moving() || i.any_touches()) || self.state.ui.show_settings_dialog
        {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_millis(DISPLAY_POLL_INTERVAL_MS));
        }
    }
}

/// Fragt die angeschlossenen Displays über `display-info` ab.
/// Das Primär-Display steht vorn — es bekommt den Root-Viewport.
fn detect_displays() -> Vec<DisplayDescriptor> {
    match display_info::DisplayInfo::all() {
        Ok(mut infos) => {
            infos.sort_by_key(|info| !info.is_primary);
            infos
                .into_iter()
                .map(|info| {
                    DisplayDescriptor::new(
                        info.id,
                        Vec2::new(info.x as f32, info.y as f32),
                        Vec2::new(info.width as f32, info.height as f32),
                    )
                })
                .collect()
        }
        Err(e) => {
            log::error!("Display-Abfrage fehlgeschlagen: {e}");
            Vec::new()
        }
    }
}
