//! Zentrale Konfiguration für den Map Marker Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{ColorMode, TileStyle, ViewConfig, DEFAULT_ICON};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Ansicht ─────────────────────────────────────────────────────────

/// Zoomstufe neuer Sitzungen.
pub const DEFAULT_ZOOM: u8 = ViewConfig::ZOOM_DEFAULT;

// ── Export ──────────────────────────────────────────────────────────

/// Standard-Zieldatei für das gerenderte Kartendokument.
pub const DEFAULT_MAP_OUTPUT_PATH: &str = "marked_map.json";
/// Name der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "map_marker_editor.toml";

// ── Formular ────────────────────────────────────────────────────────

/// Icons, die das Formular zur Auswahl anbietet.
pub const ICON_CHOICES: [&str; 5] = [DEFAULT_ICON, "cloud", "home", "flag", "star"];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `map_marker_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Zoomstufe beim Start (wird auf 1..=18 begrenzt)
    pub default_zoom: u8,
    /// Kachel-Stil beim Start
    pub default_tile_style: TileStyle,
    /// Farbmodus neuer Sitzungen
    pub color_mode: ColorMode,
    /// Zieldatei für den Kartenexport
    pub map_output_path: PathBuf,
    /// Icon-Auswahl im Formular
    pub icon_choices: Vec<String>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_zoom: DEFAULT_ZOOM,
            default_tile_style: TileStyle::default(),
            color_mode: ColorMode::default(),
            map_output_path: PathBuf::from(DEFAULT_MAP_OUTPUT_PATH),
            icon_choices: ICON_CHOICES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("map_marker_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Ansichts-Konfiguration aus den Startwerten.
    pub fn initial_view(&self) -> ViewConfig {
        ViewConfig::new(i64::from(self.default_zoom), self.default_tile_style)
    }
}
