use crate::core::ColorMode;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Formular abgeschickt: neuer Marker oder Update des selektierten
    FormSubmitted,
    /// Marker in der Liste gewählt (lädt ihn ins Formular)
    MarkerSelected { index: usize },
    /// Zeile der gefilterten Suchergebnis-Liste gewählt
    SearchHitSelected { row: usize },
    /// Selektion aufheben, Formular leeren
    SelectionCleared,
    /// Selektierten Marker löschen
    DeleteSelectedRequested,
    /// Suche ausführen
    SearchRequested { query: String },
    /// Suche zurücksetzen (volle Liste)
    SearchCleared,
    /// Zoom-Regler geändert (wird begrenzt)
    ZoomChanged { zoom: i64 },
    /// Kachel-Stil gewählt (Anzeigename)
    TileStyleChanged { name: String },
    /// Farbmodus gewechselt (nur bei leerer Registry)
    ColorModeChanged { mode: ColorMode },
    /// Externe Tabelle importieren (anhängen)
    ImportRequested { path: PathBuf },
    /// Projekt speichern (`None` = unter aktuellem Projektpfad)
    SaveProjectRequested { path: Option<PathBuf> },
    /// Projekt laden (ersetzt alle Marker)
    LoadProjectRequested { path: PathBuf },
    /// Kartendokument exportieren (`None` = Pfad aus den Optionen)
    ExportMapRequested { path: Option<PathBuf> },
}
