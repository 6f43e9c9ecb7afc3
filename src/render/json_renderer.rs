//! JSON-Ausgabe des Kartendokuments für externe Karten-Frontends.

use super::MapRenderer;
use crate::shared::MapDocument;
use anyhow::Context;

/// Serialisiert das Dokument als JSON-Text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    /// Eingerückte Ausgabe
    pub pretty: bool,
}

impl JsonRenderer {
    /// Renderer mit eingerückter Ausgabe
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl MapRenderer for JsonRenderer {
    type Output = String;

    fn render(&self, document: &MapDocument) -> anyhow::Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        };
        text.context("Kartendokument konnte nicht als JSON serialisiert werden")
    }
}
