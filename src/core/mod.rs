//! Core-Domänentypen: Geometrie, Snap-Solver, Mess-Session, Session-Registry.

pub mod geometry;
pub mod registry;
/// Mess-Session und Registry
///
/// Dieses Modul definiert die Haupt-Zustandsmaschine:
/// - MeasurementSession: Zwei-Punkt-Segment eines Displays
/// - SessionRegistry: eine Session pro angeschlossenem Display
pub mod session;
pub mod snap;

pub use geometry::{MeasurementUnit, DEFAULT_POINTS_PER_INCH};
pub use registry::{DisplayDescriptor, DisplayId, SessionEntry, SessionRegistry};
pub use session::{
    ActivePoint, MeasurementSession, SessionDefaults, SessionReadout, DEFAULT_SNAP_INCREMENT_DEG,
};
pub use snap::Viewport;
