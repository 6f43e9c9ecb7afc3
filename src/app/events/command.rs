use crate::core::{ColorMode, MarkerInput};
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Marker aus Eingaben anlegen
    CreateMarker { input: MarkerInput },
    /// Marker an Index vollständig ersetzen
    UpdateMarker { index: usize, input: MarkerInput },
    /// Marker an Index löschen (`None` = nichts selektiert)
    DeleteMarker { index: Option<usize> },
    /// Marker selektieren und ins Formular laden
    SelectMarker { index: usize },
    /// Suchtreffer-Zeile auf Registry-Index abbilden und selektieren
    SelectSearchHit { row: usize },
    /// Selektion aufheben
    ClearSelection,
    /// Formular leeren
    ClearForm,
    /// Suche ausführen
    RunSearch { query: String },
    /// Suche zurücksetzen
    ClearSearch,
    /// Zoom setzen (begrenzt)
    SetZoom { zoom: i64 },
    /// Kachel-Stil setzen
    SetTileStyle { name: String },
    /// Farbmodus setzen
    SetColorMode { mode: ColorMode },
    /// Tabelle importieren
    ImportTable { path: PathBuf },
    /// Projekt speichern
    SaveProject { path: Option<PathBuf> },
    /// Projekt laden
    LoadProject { path: PathBuf },
    /// Kartendokument bauen, rendern und schreiben
    ExportMap { path: Option<PathBuf> },
}
