//! Handler für Ansichts-Einstellungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ColorMode;

/// Setzt die Zoomstufe (begrenzt).
pub fn set_zoom(state: &mut AppState, zoom: i64) {
    use_cases::viewport::set_zoom(state, zoom);
}

/// Setzt den Kachel-Stil.
pub fn set_tile_style(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    use_cases::viewport::set_tile_style(state, name)
}

/// Setzt den Farbmodus.
pub fn set_color_mode(state: &mut AppState, mode: ColorMode) -> anyhow::Result<()> {
    use_cases::viewport::set_color_mode(state, mode)
}
