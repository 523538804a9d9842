//! Verlauf der zuletzt ausgeführten Commands (Diagnose und Tests).

use std::collections::VecDeque;

use super::AppCommand;

/// Ringpuffer der zuletzt ausgeführten Commands.
///
/// Bei Zeiger-Drags laufen hier viele Einträge pro Sekunde auf; die
/// Kapazität hält den Puffer klein, der älteste Eintrag fällt raus.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    /// Maximale Anzahl gespeicherter Einträge.
    const CAPACITY: usize = 256;

    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Ältester noch gespeicherter Command.
    pub fn first(&self) -> Option<&AppCommand> {
        self.entries.front()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Anzahl der gespeicherten Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ob der Verlauf leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge in Ausführungs-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}
