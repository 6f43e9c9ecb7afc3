//! Fehlertypen der Core-Schicht (Registry, Schema-Adapter, Dokument-Builder).

use std::fmt;
use thiserror::Error;

/// Feld eines Markers, auf das sich ein Validierungsfehler bezieht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Breitengrad
    Latitude,
    /// Längengrad
    Longitude,
    /// Beschriftung (Label bzw. Description)
    Label,
    /// Anzeigefarbe
    Color,
    /// Icon-Name
    Icon,
    /// Messwert `von` (nur Schwellwert-Variante)
    Von,
    /// Messwert `voff` (nur Schwellwert-Variante)
    Voff,
    /// Kachel-Stil der Ansicht
    TileStyle,
}

impl Field {
    /// Kleingeschriebener Feldname für Fehlermeldungen.
    pub fn name(self) -> &'static str {
        match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Label => "label",
            Field::Color => "color",
            Field::Icon => "icon",
            Field::Von => "von",
            Field::Voff => "voff",
            Field::TileStyle => "tile_style",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fehler der Marker-Operationen. Jede fehlgeschlagene Operation lässt
/// Registry und Adapter unverändert.
#[derive(Debug, Error)]
pub enum MarkerError {
    /// Ungültiger oder fehlender Feldwert
    #[error("Ungueltiges Feld '{field}': {reason}")]
    Validation { field: Field, reason: String },

    /// Index außerhalb von `0..count`
    #[error("Index {index} ausserhalb des gueltigen Bereichs (Anzahl Marker: {count})")]
    Index { index: usize, count: usize },

    /// Tabelle passt nicht zum Schema (fehlende Pflichtspalten, falsche Variante)
    #[error("Schema-Fehler: {0}")]
    Schema(String),

    /// Kartendokument ohne Marker angefordert
    #[error("Keine Marker vorhanden, Kartendokument kann nicht erstellt werden")]
    EmptyRegistry,

    /// CSV-Text konnte nicht gelesen oder geschrieben werden
    #[error("CSV-Fehler: {0}")]
    Csv(#[from] csv::Error),

    /// Arbeitsmappe (xlsx, xls, ods) konnte nicht gelesen werden
    #[error("Arbeitsmappen-Fehler: {0}")]
    Spreadsheet(#[from] calamine::Error),
}

impl MarkerError {
    /// Kurzform für einen Validierungsfehler.
    pub fn validation(field: Field, reason: impl Into<String>) -> Self {
        MarkerError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Feld des Validierungsfehlers, sonst `None`.
    pub fn field(&self) -> Option<Field> {
        match self {
            MarkerError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Ergebnis-Typ der Core-Operationen.
pub type MarkerResult<T> = std::result::Result<T, MarkerError>;
