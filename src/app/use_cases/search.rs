//! Use-Cases für die Marker-Suche.

use crate::app::AppState;

/// Führt eine Suche aus und merkt sich die Treffer-Indizes.
pub fn run_search(state: &mut AppState, query: String) {
    state.search.hits = state.registry.search(&query).map(|(i, _)| i).collect();
    log::info!("Suche '{}': {} Treffer", query, state.search.hits.len());
    state.search.query = Some(query);
}

/// Setzt die Suche zurück, die Liste zeigt wieder alle Marker.
pub fn clear_search(state: &mut AppState) {
    state.search.query = None;
    state.search.hits.clear();
}
