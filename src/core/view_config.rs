//! Ansichts-Konfiguration der Karte: Zoomstufe und Kachel-Stil.

use super::error::{Field, MarkerError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Kachel-Stile, die der Renderer kennt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileStyle {
    #[default]
    OpenStreetMap,
    StamenTerrain,
    StamenToner,
    StamenWatercolor,
    CartoDbPositron,
    CartoDbDarkMatter,
}

impl TileStyle {
    /// Alle Stile in Anzeige-Reihenfolge.
    pub const ALL: [TileStyle; 6] = [
        TileStyle::OpenStreetMap,
        TileStyle::StamenTerrain,
        TileStyle::StamenToner,
        TileStyle::StamenWatercolor,
        TileStyle::CartoDbPositron,
        TileStyle::CartoDbDarkMatter,
    ];

    /// Name, unter dem der Renderer den Stil kennt.
    pub fn name(self) -> &'static str {
        match self {
            TileStyle::OpenStreetMap => "OpenStreetMap",
            TileStyle::StamenTerrain => "Stamen Terrain",
            TileStyle::StamenToner => "Stamen Toner",
            TileStyle::StamenWatercolor => "Stamen Watercolor",
            TileStyle::CartoDbPositron => "CartoDB positron",
            TileStyle::CartoDbDarkMatter => "CartoDB dark_matter",
        }
    }
}

impl fmt::Display for TileStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileStyle {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TileStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                MarkerError::validation(
                    Field::TileStyle,
                    format!("unbekannter Kachel-Stil '{}'", wanted),
                )
            })
    }
}

impl Serialize for TileStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TileStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Zoomstufe und Kachel-Stil für das nächste Kartendokument.
///
/// Der Zoom wird beim Setzen auf `[ZOOM_MIN, ZOOM_MAX]` begrenzt, ungültige
/// Werte sind kein Fehler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    zoom: u8,
    tile_style: TileStyle,
}

impl ViewConfig {
    /// Kleinste Zoomstufe.
    pub const ZOOM_MIN: u8 = 1;
    /// Größte Zoomstufe.
    pub const ZOOM_MAX: u8 = 18;
    /// Zoomstufe einer neuen Sitzung.
    pub const ZOOM_DEFAULT: u8 = 10;

    /// Erstellt eine Konfiguration, der Zoom wird begrenzt.
    pub fn new(zoom: i64, tile_style: TileStyle) -> Self {
        Self {
            zoom: Self::clamp_zoom(zoom),
            tile_style,
        }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn tile_style(&self) -> TileStyle {
        self.tile_style
    }

    /// Setzt den Zoom (begrenzt) und gibt den tatsächlichen Wert zurück.
    pub fn set_zoom(&mut self, zoom: i64) -> u8 {
        self.zoom = Self::clamp_zoom(zoom);
        self.zoom
    }

    pub fn set_tile_style(&mut self, tile_style: TileStyle) {
        self.tile_style = tile_style;
    }

    fn clamp_zoom(zoom: i64) -> u8 {
        zoom.clamp(i64::from(Self::ZOOM_MIN), i64::from(Self::ZOOM_MAX)) as u8
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(i64::from(Self::ZOOM_DEFAULT), TileStyle::default())
    }
}
