//! UI-Komponenten: Input-Handling, Overlay-Zeichnen, Einstellungs-Dialog.

pub mod input;
pub mod overlay;
pub mod settings;

pub use input::InputState;
pub use overlay::paint;
pub use settings::show_settings_window;
