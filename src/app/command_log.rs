//! Command-Protokoll der Sitzung für Diagnose und Tests.

use super::AppCommand;
use std::collections::VecDeque;

/// Ein protokollierter Command mit fortlaufender Nummer.
#[derive(Debug, Clone)]
pub struct LoggedCommand {
    /// Laufende Nummer seit Sitzungsstart (lückenlos, auch nach Verwerfen)
    pub sequence: u64,
    pub command: AppCommand,
}

/// Ringpuffer der zuletzt ausgeführten Commands.
///
/// Protokolliert wird vor der Ausführung, also auch Commands, die danach
/// mit einem Fehler abbrechen.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    next_sequence: u64,
}

impl CommandLog {
    const CAPACITY: usize = 500;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Command an; der älteste fällt bei voller Kapazität heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedCommand {
            sequence: self.next_sequence,
            command: command.clone(),
        });
        self.next_sequence += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt protokollierter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back().map(|entry| &entry.command)
    }

    /// Alle gehaltenen Einträge, ältester zuerst.
    pub fn entries(&self) -> impl Iterator<Item = &LoggedCommand> + '_ {
        self.entries.iter()
    }
}
