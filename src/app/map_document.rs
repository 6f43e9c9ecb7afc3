//! Builder für Kartendokumente aus Registry und Ansicht.

use crate::core::{MarkerError, MarkerRegistry, MarkerResult, ViewConfig};
use crate::shared::{MapDocument, RenderEntry};

/// Baut ein neues Kartendokument.
///
/// Zentrum ist der Marker an Index 0; die Einträge folgen der Registry
/// eins-zu-eins ohne Umordnen, Filtern oder Deduplizieren.
pub fn build(registry: &MarkerRegistry, view: &ViewConfig) -> MarkerResult<MapDocument> {
    let first = registry.markers().first().ok_or(MarkerError::EmptyRegistry)?;
    let entries = registry
        .markers()
        .iter()
        .map(RenderEntry::from_marker)
        .collect();

    Ok(MapDocument::new(first.position(), view, entries))
}
