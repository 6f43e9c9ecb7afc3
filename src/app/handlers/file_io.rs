//! Handler für Datei-Operationen (Import, Projekt, Kartenexport).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Importiert eine externe Tabelle.
pub fn import(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::import_table(state, &path)
}

/// Lädt ein Projekt aus dem übergebenen Pfad.
pub fn load_project(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_project(state, path)
}

/// Speichert das Projekt.
///
/// `None` speichert unter dem aktuell bekannten Projektpfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save_project(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    use_cases::file_io::save_project(state, path)
}

/// Exportiert das Kartendokument.
pub fn export_map(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    use_cases::export::export_map(state, path)
}
