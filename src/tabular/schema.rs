//! Deklarative Spaltentabelle der Import-/Export-Varianten.
//!
//! Neue Varianten sind zusätzliche Tabellen, kein neuer Parser-Code.

use crate::core::{ColorMode, Field, MarkerError, MarkerResult};
use indexmap::IndexMap;

/// Beschreibt eine Spalte einer Variante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Internes Feld
    pub field: Field,
    /// Spaltenname beim Export (Import vergleicht case-insensitiv)
    pub header: &'static str,
    /// Pflichtspalte beim Import externer Tabellen
    pub required_on_import: bool,
}

impl ColumnSpec {
    const fn new(field: Field, header: &'static str, required_on_import: bool) -> Self {
        Self {
            field,
            header,
            required_on_import,
        }
    }

    /// Ob die Spalte im gegebenen Profil vorhanden sein muss.
    pub fn is_required(&self, profile: SchemaProfile) -> bool {
        match profile {
            SchemaProfile::Import => self.required_on_import,
            SchemaProfile::Project => true,
        }
    }
}

const SIMPLE_COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec::new(Field::Latitude, "Latitude", true),
    ColumnSpec::new(Field::Longitude, "Longitude", true),
    ColumnSpec::new(Field::Label, "Label", true),
    ColumnSpec::new(Field::Color, "Color", true),
    ColumnSpec::new(Field::Icon, "Icon", false),
];

const THRESHOLD_COLUMNS: [ColumnSpec; 7] = [
    ColumnSpec::new(Field::Latitude, "Latitude", true),
    ColumnSpec::new(Field::Longitude, "Longitude", true),
    ColumnSpec::new(Field::Von, "Von", true),
    ColumnSpec::new(Field::Voff, "Voff", true),
    ColumnSpec::new(Field::Label, "Description", true),
    ColumnSpec::new(Field::Color, "Color", false),
    ColumnSpec::new(Field::Icon, "Icon", false),
];

/// Tabellen-Variante, entspricht genau einem Farbmodus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// `Latitude, Longitude, Label, Color[, Icon]`
    Simple,
    /// `Latitude, Longitude, Von, Voff, Description[, Color, Icon]`
    Threshold,
}

impl SchemaVariant {
    /// Spalten in stabiler Export-Reihenfolge
    pub fn columns(self) -> &'static [ColumnSpec] {
        match self {
            SchemaVariant::Simple => &SIMPLE_COLUMNS,
            SchemaVariant::Threshold => &THRESHOLD_COLUMNS,
        }
    }

    pub fn color_mode(self) -> ColorMode {
        match self {
            SchemaVariant::Simple => ColorMode::Explicit,
            SchemaVariant::Threshold => ColorMode::Threshold,
        }
    }

    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Explicit => SchemaVariant::Simple,
            ColorMode::Threshold => SchemaVariant::Threshold,
        }
    }

    /// Erkennt die Variante an den Kopfzeilen: `von` und `voff` vorhanden
    /// ergibt `Threshold`, sonst `Simple`.
    pub fn detect<S: AsRef<str>>(headers: &[S]) -> Self {
        let has = |name: &str| headers.iter().any(|h| normalize_header(h.as_ref()) == name);
        if has("von") && has("voff") {
            SchemaVariant::Threshold
        } else {
            SchemaVariant::Simple
        }
    }
}

/// Strenge der Spaltenprüfung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaProfile {
    /// Externe Tabelle: optionale Spalten dürfen fehlen
    Import,
    /// Gespeichertes Projekt: alle Spalten der Variante sind Pflicht
    Project,
}

/// Aufgelöste Zuordnung Feld → Spaltenposition einer konkreten Tabelle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    positions: IndexMap<Field, usize>,
}

impl HeaderMap {
    /// Ordnet die Kopfzeilen den Spalten der Variante zu.
    ///
    /// Vergleich ohne Groß-/Kleinschreibung und Randleerzeichen; unbekannte
    /// Spalten werden ignoriert. Fehlende Pflichtspalten oder doppelte
    /// Spalten ergeben einen `Schema`-Fehler.
    pub fn resolve<S: AsRef<str>>(
        headers: &[S],
        variant: SchemaVariant,
        profile: SchemaProfile,
    ) -> MarkerResult<Self> {
        let mut positions = IndexMap::new();
        let mut missing = Vec::new();

        for column in variant.columns() {
            let wanted = column.header.to_lowercase();
            let mut matches = headers
                .iter()
                .enumerate()
                .filter(|(_, h)| normalize_header(h.as_ref()) == wanted)
                .map(|(i, _)| i);

            match (matches.next(), matches.next()) {
                (Some(position), None) => {
                    positions.insert(column.field, position);
                }
                (Some(_), Some(_)) => {
                    return Err(MarkerError::Schema(format!(
                        "Spalte '{}' ist mehrfach vorhanden",
                        column.header
                    )));
                }
                (None, _) if column.is_required(profile) => missing.push(column.header),
                (None, _) => {}
            }
        }

        if !missing.is_empty() {
            let expected: Vec<&str> = variant
                .columns()
                .iter()
                .filter(|c| c.is_required(profile))
                .map(|c| c.header)
                .collect();
            return Err(MarkerError::Schema(format!(
                "Pflichtspalten fehlen: {} (erwartet: {})",
                missing.join(", "),
                expected.join(", ")
            )));
        }

        Ok(Self { positions })
    }

    /// Spaltenposition eines Feldes, falls vorhanden
    pub fn position(&self, field: Field) -> Option<usize> {
        self.positions.get(&field).copied()
    }
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}
