//! Handler für Marker-Editing (Anlegen, Ersetzen, Löschen, Formular).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MarkerInput;

/// Legt einen neuen Marker an.
pub fn create(state: &mut AppState, input: &MarkerInput) -> anyhow::Result<()> {
    use_cases::markers::create_marker(state, input)
}

/// Ersetzt den Marker an `index` vollständig.
pub fn update(state: &mut AppState, index: usize, input: &MarkerInput) -> anyhow::Result<()> {
    use_cases::markers::update_marker(state, index, input)
}

/// Löscht den Marker an `index`.
pub fn delete(state: &mut AppState, index: Option<usize>) -> anyhow::Result<()> {
    use_cases::markers::delete_marker(state, index)
}

/// Leert das Formular.
pub fn clear_form(state: &mut AppState) {
    use_cases::markers::clear_form(state);
}
