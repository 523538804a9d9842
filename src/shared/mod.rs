//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! ohne eine Abhängigkeit zwischen den beiden Layern zu erzeugen.

pub mod options;
pub mod overlay_scene;

pub use options::RulerOptions;
pub use overlay_scene::OverlayScene;
