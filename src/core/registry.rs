//! Session-Registry: genau eine Mess-Session pro angeschlossenem Display.
//!
//! Die Registry besitzt die Sessions, gleicht sie bei Display-Änderungen
//! ab (`reconcile`) und verwaltet den Fokus: die Session unter dem Zeiger
//! erhält die Eingaben. Während ein debouncter Abgleich aussteht, werden
//! Fokus-Updates unterdrückt, um nicht auf veralteter Geometrie zu
//! arbeiten.

use glam::Vec2;
use indexmap::IndexMap;

use super::session::{MeasurementSession, SessionDefaults};
use super::snap::Viewport;

/// Stabile Display-Kennung des Betriebssystems.
pub type DisplayId = u32;

/// Geometrie eines Displays im globalen Desktop-Koordinatenraum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDescriptor {
    /// Stabile Display-Kennung
    pub id: DisplayId,
    /// Linke obere Ecke im globalen Desktop-Raum
    pub origin: Vec2,
    /// Größe in lokalen Pixeln
    pub size: Vec2,
}

impl DisplayDescriptor {
    /// Erstellt einen Descriptor.
    pub fn new(id: DisplayId, origin: Vec2, size: Vec2) -> Self {
        Self { id, origin, size }
    }

    /// Prüft ob die globale Zeigerposition auf diesem Display liegt
    /// (Ränder inklusive).
    pub fn contains(&self, global: Vec2) -> bool {
        global.x >= self.origin.x
            && global.x <= self.origin.x + self.size.x
            && global.y >= self.origin.y
            && global.y <= self.origin.y + self.size.y
    }

    /// Lokales Sichtfenster dieses Displays.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.size.x, self.size.y)
    }

    /// Rechnet eine globale Position in lokale Display-Koordinaten um.
    pub fn to_local(&self, global: Vec2) -> Vec2 {
        global - self.origin
    }
}

/// Session samt zugehöriger Display-Geometrie.
#[derive(Debug)]
pub struct SessionEntry {
    /// Geometrie des Displays
    pub descriptor: DisplayDescriptor,
    /// Mess-Session dieses Displays
    pub session: MeasurementSession,
}

/// Registry aller lebenden Sessions, geordnet nach Anlege-Reihenfolge.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    entries: IndexMap<DisplayId, SessionEntry>,
    focused: Option<DisplayId>,
    reconcile_pending: bool,
}

impl SessionRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gleicht die Registry mit der aktuellen Display-Liste ab.
    ///
    /// Neue Displays bekommen eine frische Session mit `defaults`;
    /// Sessions verschwundener Displays werden verworfen (ein laufender
    /// Drag dort geht mit dem Display verloren); bei geänderter Größe wird
    /// die bestehende Session re-geklemmt, aber *nicht* neu angelegt.
    /// Beliebig oft mit derselben Liste aufrufbar (idempotent).
    pub fn reconcile(&mut self, displays: &[DisplayDescriptor], defaults: SessionDefaults) {
        self.entries
            .retain(|id, _| displays.iter().any(|d| d.id == *id));

        for descriptor in displays {
            match self.entries.get_mut(&descriptor.id) {
                Some(entry) => {
                    if entry.descriptor != *descriptor {
                        if entry.descriptor.size != descriptor.size {
                            entry.session.ensure_visible(descriptor.viewport());
                        }
                        entry.descriptor = *descriptor;
                    }
                }
                None => {
                    log::info!(
                        "Display {} verbunden ({}×{}), neue Session",
                        descriptor.id,
                        descriptor.size.x,
                        descriptor.size.y
                    );
                    self.entries.insert(
                        descriptor.id,
                        SessionEntry {
                            descriptor: *descriptor,
                            session: MeasurementSession::new(descriptor.viewport(), defaults),
                        },
                    );
                }
            }
        }

        if let Some(focused) = self.focused {
            if !self.entries.contains_key(&focused) {
                self.focused = None;
            }
        }
        self.reconcile_pending = false;
    }

    /// Markiert, dass ein Display-Abgleich aussteht; bis zum nächsten
    /// [`Self::reconcile`] werden Fokus-Updates unterdrückt.
    pub fn mark_displays_changed(&mut self) {
        self.reconcile_pending = true;
    }

    /// Ob gerade ein Abgleich aussteht.
    pub fn is_reconcile_pending(&self) -> bool {
        self.reconcile_pending
    }

    /// Fokussiert die Session unter der globalen Zeigerposition.
    ///
    /// Genau die getroffene Session bekommt `is_focused = true`, alle
    /// anderen `false`; trifft der Zeiger kein Display (Lücke zwischen
    /// Monitoren), ist keine Session fokussiert. Während ein Abgleich
    /// aussteht, bleibt der Fokus unverändert.
    pub fn focus_for(&mut self, pointer_global: Vec2) -> Option<DisplayId> {
        if self.reconcile_pending {
            return self.focused;
        }

        let hit = self
            .entries
            .values()
            .find(|entry| entry.descriptor.contains(pointer_global))
            .map(|entry| entry.descriptor.id);

        for entry in self.entries.values_mut() {
            entry.session.set_focused(Some(entry.descriptor.id) == hit);
        }
        self.focused = hit;
        hit
    }

    /// Id der aktuell fokussierten Session.
    pub fn focused_id(&self) -> Option<DisplayId> {
        self.focused
    }

    /// Mutable Referenz auf die fokussierte Session.
    pub fn focused_session_mut(&mut self) -> Option<&mut MeasurementSession> {
        let id = self.focused?;
        self.entries.get_mut(&id).map(|entry| &mut entry.session)
    }

    /// Session eines Displays.
    pub fn session(&self, id: DisplayId) -> Option<&MeasurementSession> {
        self.entries.get(&id).map(|entry| &entry.session)
    }

    /// Mutable Session eines Displays.
    pub fn session_mut(&mut self, id: DisplayId) -> Option<&mut MeasurementSession> {
        self.entries.get_mut(&id).map(|entry| &mut entry.session)
    }

    /// Eintrag (Descriptor + Session) eines Displays.
    pub fn entry(&self, id: DisplayId) -> Option<&SessionEntry> {
        self.entries.get(&id)
    }

    /// Alle Einträge in Anlege-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &SessionEntry> {
        self.entries.values()
    }

    /// Wendet eine Mutation auf alle Sessions an (z.B. Einheit umschalten).
    pub fn for_each_session_mut(&mut self, mut f: impl FnMut(&mut MeasurementSession)) {
        for entry in self.entries.values_mut() {
            f(&mut entry.session);
        }
    }

    /// Anzahl lebender Sessions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ob keine Session existiert.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_displays() -> Vec<DisplayDescriptor> {
        vec![
            DisplayDescriptor::new(1, Vec2::new(0.0, 0.0), Vec2::new(1920.0, 1080.0)),
            DisplayDescriptor::new(2, Vec2::new(1920.0, 0.0), Vec2::new(1280.0, 1024.0)),
        ]
    }

    #[test]
    fn test_reconcile_creates_one_session_per_display() {
        let mut registry = SessionRegistry::new();
        registry.reconcile(&two_displays(), SessionDefaults::default());
        assert_eq!(registry.len(), 2);
        assert!(registry.session(1).is_some());
        assert!(registry.session(2).is_some());
    }

    #[test]
    fn test_reconcile_is_idempotent_and_preserves_identity() {
        let mut registry = SessionRegistry::new();
        let displays = two_displays();
        registry.reconcile(&displays, SessionDefaults::default());

        // Segment auf Display 1 definieren, dann erneut abgleichen
        registry
            .session_mut(1)
            .unwrap()
            .begin_drag(Vec2::new(10.0, 10.0));
        registry.session_mut(1).unwrap().end_drag();

        registry.reconcile(&displays, SessionDefaults::default());
        assert_eq!(registry.len(), 2);
        // Session wurde nicht neu angelegt: Punkte überleben
        assert!(registry.session(1).unwrap().has_segment());
    }

    #[test]
    fn test_reconcile_drops_disconnected_display() {
        let mut registry = SessionRegistry::new();
        registry.reconcile(&two_displays(), SessionDefaults::default());

        let only_first = &two_displays()[..1];
        registry.reconcile(only_first, SessionDefaults::default());
        assert_eq!(registry.len(), 1);
        assert!(registry.session(2).is_none());
    }

    #[test]
    fn test_reconcile_resize_reclamps_instead_of_recreating() {
        let mut registry = SessionRegistry::new();
        let mut displays = two_displays();
        registry.reconcile(&displays, SessionDefaults::default());

        let session = registry.session_mut(1).unwrap();
        session.begin_drag(Vec2::new(1900.0, 1000.0));
        session.end_drag();

        // Display 1 schrumpft: Session bleibt, Punkte werden geklemmt
        displays[0].size = Vec2::new(1280.0, 720.0);
        registry.reconcile(&displays, SessionDefaults::default());

        let session = registry.session(1).unwrap();
        assert_eq!(session.start_point(), Some(Vec2::new(1280.0, 720.0)));
    }

    #[test]
    fn test_reconcile_clears_focus_of_removed_display() {
        let mut registry = SessionRegistry::new();
        registry.reconcile(&two_displays(), SessionDefaults::default());
        registry.focus_for(Vec2::new(2000.0, 100.0));
        assert_eq!(registry.focused_id(), Some(2));

        let only_first = &two_displays()[..1];
        registry.reconcile(only_first, SessionDefaults::default());
        assert_eq!(registry.focused_id(), None);
    }

    #[test]
    fn test_focus_for_selects_display_under_pointer() {
        let mut registry = SessionRegistry::new();
        registry.reconcile(&two_displays(), SessionDefaults::default());

        assert_eq!(registry.focus_for(Vec2::new(100.0, 100.0)), Some(1));
        assert!(registry.session(1).unwrap().is_focused());
        assert!(!registry.session(2).unwrap().is_focused());

        assert_eq!(registry.focus_for(Vec2::new(2500.0, 500.0)), Some(2));
        assert!(!registry.session(1).unwrap().is_focused());
        assert!(registry.session(2).unwrap().is_focused());
    }

    #[test]
    fn test_focus_for_is_edge_inclusive() {
        let mut registry = SessionRegistry::new();
        registry.reconcile(&two_displays(), SessionDefaults::default());
        // Rechter Rand von Display 2
        assert_eq!(registry.focus_for(Vec2::new(3200.0, 1024.0)), Some(2));
    }

    #[test]
    fn test_focus_for_gap_unfocuses_all() {
        let mut registry = SessionRegistry::new();
        registry.reconcile(&two_displays(), SessionDefaults::default());
        registry.focus_for(Vec2::new(100.0, 100.0));

        // Unterhalb beider Displays
        assert_eq!(registry.focus_for(Vec2::new(100.0, 5000.0)), None);
        assert!(!registry.session(1).unwrap().is_focused());
        assert!(!registry.session(2).unwrap().is_focused());
    }

    #[test]
    fn test_focus_suppressed_while_reconcile_pending() {
        let mut registry = SessionRegistry::new();
        registry.reconcile(&two_displays(), SessionDefaults::default());
        registry.focus_for(Vec2::new(100.0, 100.0));

        registry.mark_displays_changed();
        // Zeiger wandert auf Display 2 — Fokus bleibt eingefroren
        assert_eq!(registry.focus_for(Vec2::new(2500.0, 500.0)), Some(1));
        assert!(registry.session(1).unwrap().is_focused());

        registry.reconcile(&two_displays(), SessionDefaults::default());
        assert_eq!(registry.focus_for(Vec2::new(2500.0, 500.0)), Some(2));
    }

    #[test]
    fn test_focus_does_not_touch_point_data() {
        let mut registry = SessionRegistry::new();
        registry.reconcile(&two_displays(), SessionDefaults::default());

        let session = registry.session_mut(1).unwrap();
        session.begin_drag(Vec2::new(5.0, 5.0));
        session.update_drag(Vec2::new(50.0, 5.0));
        session.end_drag();

        registry.focus_for(Vec2::new(2500.0, 500.0));
        registry.focus_for(Vec2::new(100.0, 100.0));

        let session = registry.session(1).unwrap();
        assert_eq!(session.start_point(), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(session.end_point(), Some(Vec2::new(50.0, 5.0)));
    }
}
