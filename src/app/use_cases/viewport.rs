//! Use-Cases für Ansichts-Einstellungen und Farbmodus.

use crate::app::AppState;
use crate::core::{ColorMode, TileStyle};

/// Setzt den Zoom; Werte außerhalb von 1..=18 werden begrenzt.
pub fn set_zoom(state: &mut AppState, zoom: i64) {
    let applied = state.view.set_zoom(zoom);
    if i64::from(applied) != zoom {
        log::debug!("Zoom {} auf {} begrenzt", zoom, applied);
    }
}

/// Setzt den Kachel-Stil aus seinem Anzeigenamen.
pub fn set_tile_style(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    let style: TileStyle = name.parse()?;
    state.view.set_tile_style(style);
    log::info!("Kachel-Stil: {}", style);
    Ok(())
}

/// Wechselt den Farbmodus der Registry (nur ohne Marker möglich).
pub fn set_color_mode(state: &mut AppState, mode: ColorMode) -> anyhow::Result<()> {
    state.registry.set_color_mode(mode)?;
    state.form.clear();
    log::info!("Farbmodus: {:?}", mode);
    Ok(())
}
