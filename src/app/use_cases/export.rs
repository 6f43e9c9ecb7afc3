//! Use-Case für den Kartenexport über einen Renderer.

use crate::app::{map_document, AppState};
use crate::render::{JsonRenderer, MapRenderer};
use anyhow::Context;
use std::path::PathBuf;

/// Baut ein frisches Kartendokument, rendert es als JSON und schreibt es.
///
/// Ohne Pfad wird `options.map_output_path` verwendet.
pub fn export_map(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let document = map_document::build(&state.registry, &state.view)?;
    let rendered = JsonRenderer::pretty().render(&document)?;

    let path = path.unwrap_or_else(|| state.options.map_output_path.clone());
    std::fs::write(&path, rendered)
        .with_context(|| format!("Karte konnte nicht nach {} geschrieben werden", path.display()))?;

    log::info!(
        "Karte exportiert: {} ({} Marker, Zoom {}, {})",
        path.display(),
        document.entry_count(),
        document.zoom(),
        document.tile_style()
    );
    state.ui.last_export_path = Some(path);
    Ok(())
}
