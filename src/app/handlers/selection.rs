//! Handler für Selektion und Suche.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert einen Marker per Registry-Index.
pub fn select(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::markers::select_marker(state, index)
}

/// Selektiert einen Marker per Zeile der Trefferliste.
pub fn select_search_hit(state: &mut AppState, row: usize) -> anyhow::Result<()> {
    use_cases::markers::select_search_hit(state, row)
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::markers::clear_selection(state);
}

/// Führt eine Suche aus.
pub fn search(state: &mut AppState, query: String) {
    use_cases::search::run_search(state, query);
}

/// Setzt die Suche zurück.
pub fn clear_search(state: &mut AppState) {
    use_cases::search::clear_search(state);
}
