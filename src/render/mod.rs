//! Renderer-Schnittstelle: wandelt ein `MapDocument` in ein Artefakt.
//!
//! Der Core kennt nur diesen Vertrag, nicht die Interna eines Renderers.

mod json_renderer;

use crate::shared::MapDocument;

pub use json_renderer::JsonRenderer;

/// Externer Renderer: erzeugt deterministisch ein Artefakt aus einem Dokument.
pub trait MapRenderer {
    /// Erzeugtes Artefakt (Datei-Inhalt, In-Memory-Struktur, ...)
    type Output;

    /// Rendert das Dokument. Gleiches Dokument ergibt gleiches Artefakt.
    fn render(&self, document: &MapDocument) -> anyhow::Result<Self::Output>;
}
