//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::MarkerError;
use crate::tabular::{self, SchemaProfile, SchemaVariant};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Importiert eine externe Tabelle (CSV oder Arbeitsmappe nach Endung)
/// und hängt die Marker an.
///
/// Bei leerer Registry übernimmt sie den Farbmodus der Tabelle; sonst muss
/// die Variante zum Modus passen. Bei jedem Fehler bleibt alles unverändert.
pub fn import_table(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let sheet = if tabular::is_spreadsheet(path) {
        tabular::read_spreadsheet(path)
            .with_context(|| format!("Arbeitsmappe {} ist unlesbar", path.display()))?
    } else {
        tabular::read_csv(&read_file(path)?)?
    };
    let table = tabular::import_table(&sheet, SchemaProfile::Import)
        .with_context(|| format!("Import von {} fehlgeschlagen", path.display()))?;

    let mode = table.variant.color_mode();
    if state.registry.is_empty() {
        state.registry.set_color_mode(mode)?;
    } else if state.registry.color_mode() != mode {
        return Err(MarkerError::Schema(format!(
            "Tabelle hat Variante {:?}, die Registry erwartet {:?}",
            table.variant,
            SchemaVariant::for_mode(state.registry.color_mode())
        ))
        .into());
    }

    let imported = table.markers.len();
    state.registry.append_all(table.markers);
    state.refresh_search();

    let msg = format!(
        "{} Marker aus {} importiert ({} gesamt)",
        imported,
        path.display(),
        state.registry.count()
    );
    log::info!("{}", msg);
    state.ui.status_message = Some(msg);
    Ok(())
}

/// Lädt ein Projekt und ersetzt den gesamten Registry-Inhalt.
pub fn load_project(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let text = read_file(&path)?;
    let sheet = tabular::read_csv(&text)?;
    let table = tabular::import_table(&sheet, SchemaProfile::Project)
        .with_context(|| format!("Projekt {} ist ungueltig", path.display()))?;

    state
        .registry
        .replace_all(table.variant.color_mode(), table.markers);
    state.selection.selected_index = None;
    state.form.clear();
    state.refresh_search();

    log::info!(
        "Projekt geladen: {} ({} Marker, {:?})",
        path.display(),
        state.registry.count(),
        table.variant
    );
    state.ui.current_project_path = Some(path);
    state.ui.status_message = None;
    Ok(())
}

/// Speichert das Projekt unter `path` oder dem zuletzt verwendeten Pfad.
pub fn save_project(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path
        .or_else(|| state.ui.current_project_path.clone())
        .ok_or_else(|| anyhow::anyhow!("Kein Projektpfad bekannt"))?;

    let sheet = tabular::export_registry(&state.registry);
    let text = tabular::write_csv(&sheet)?;
    std::fs::write(&path, text)
        .with_context(|| format!("Projekt konnte nicht nach {} geschrieben werden", path.display()))?;

    log::info!(
        "Projekt gespeichert: {} ({} Marker)",
        path.display(),
        state.registry.count()
    );
    state.ui.status_message = Some("Projekt gespeichert".to_string());
    state.ui.current_project_path = Some(path);
    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Datei {} konnte nicht gelesen werden", path.display()))
}
