//! Use-Cases für Marker-Operationen (Anlegen, Bearbeiten, Löschen, Selektion).

use crate::app::AppState;
use crate::core::MarkerInput;
use anyhow::anyhow;

/// Legt einen Marker aus den Eingaben an.
pub fn create_marker(state: &mut AppState, input: &MarkerInput) -> anyhow::Result<()> {
    let index = state.registry.create(input)?;
    warn_unoffered_icon(state, index);
    state.refresh_search();
    log::info!(
        "Marker {} erstellt: {}",
        index,
        state.registry.get(index)?.list_label()
    );
    Ok(())
}

/// Ersetzt den Marker an `index` vollständig (Bearbeiten an Ort und Stelle).
pub fn update_marker(state: &mut AppState, index: usize, input: &MarkerInput) -> anyhow::Result<()> {
    state.registry.update(index, input)?;
    warn_unoffered_icon(state, index);
    state.refresh_search();
    log::info!(
        "Marker {} aktualisiert: {}",
        index,
        state.registry.get(index)?.list_label()
    );
    Ok(())
}

/// Löscht den Marker an `index`; ohne Selektion ist das ein Fehler.
pub fn delete_marker(state: &mut AppState, index: Option<usize>) -> anyhow::Result<()> {
    let index = index.ok_or_else(|| anyhow!("Kein Marker zum Loeschen ausgewaehlt"))?;
    let removed = state.registry.delete(index)?;

    // Nachfolgende Indizes haben sich verschoben
    state.selection.selected_index = None;
    state.refresh_search();
    log::info!("Marker {} entfernt: {}", index, removed.list_label());
    Ok(())
}

/// Selektiert einen Marker und lädt ihn ins Formular.
pub fn select_marker(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let marker = state.registry.get(index)?;
    state.form.load(marker);
    state.selection.selected_index = Some(index);
    log::debug!("Marker {} selektiert", index);
    Ok(())
}

/// Bildet eine Zeile der Trefferliste auf den Registry-Index ab und selektiert.
pub fn select_search_hit(state: &mut AppState, row: usize) -> anyhow::Result<()> {
    let index = *state
        .search
        .hits
        .get(row)
        .ok_or_else(|| anyhow!("Suchtreffer-Zeile {} existiert nicht", row))?;
    select_marker(state, index)
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.selected_index = None;
}

/// Leert das Formular.
pub fn clear_form(state: &mut AppState) {
    state.form.clear();
}

/// Fremde Icons werden übernommen, aber gemeldet.
fn warn_unoffered_icon(state: &AppState, index: usize) {
    if let Ok(marker) = state.registry.get(index) {
        if !state.offers_icon(marker.icon()) {
            log::warn!(
                "Marker {}: Icon '{}' ist nicht in der Icon-Auswahl",
                index,
                marker.icon()
            );
        }
    }
}
