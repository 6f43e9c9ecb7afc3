//! Kartendokument als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` es baut und `render` es konsumiert.
//! Ein Dokument ist ein unveränderlicher Schnappschuss; für jeden Export
//! wird ein neues gebaut.

use crate::core::{GeoPoint, Marker, TileStyle, ViewConfig};
use serde::Serialize;

/// Minimale Daten eines Markers für den Renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEntry {
    latitude: f64,
    longitude: f64,
    popup_text: String,
    color: String,
    icon: String,
}

impl RenderEntry {
    /// Übernimmt Position, Beschriftung, Farbe und Icon unverändert.
    pub fn from_marker(marker: &Marker) -> Self {
        Self {
            latitude: marker.latitude(),
            longitude: marker.longitude(),
            popup_text: marker.label().to_string(),
            color: marker.color().to_string(),
            icon: marker.icon().to_string(),
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn popup_text(&self) -> &str {
        &self.popup_text
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }
}

/// Read-only Kartendokument: Zentrum, Ansicht und Einträge in Registry-Reihenfolge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDocument {
    center_latitude: f64,
    center_longitude: f64,
    zoom: u8,
    tile_style: TileStyle,
    entries: Vec<RenderEntry>,
}

impl MapDocument {
    pub(crate) fn new(center: GeoPoint, view: &ViewConfig, entries: Vec<RenderEntry>) -> Self {
        Self {
            center_latitude: center.latitude,
            center_longitude: center.longitude,
            zoom: view.zoom(),
            tile_style: view.tile_style(),
            entries,
        }
    }

    /// Startposition der Karte (Koordinaten des ersten Markers)
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_latitude, self.center_longitude)
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn tile_style(&self) -> TileStyle {
        self.tile_style
    }

    /// Render-Einträge, einer pro Marker
    pub fn entries(&self) -> &[RenderEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
