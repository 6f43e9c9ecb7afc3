//! Tabellen-Import/Export für Marker (Schema-Adapter).
//!
//! Externe Tabellen (CSV oder Excel/ODS) werden über eine deklarative Spaltentabelle
//! normalisiert (`schema`), zeilenweise validiert (`reader`) und wieder
//! vollständig serialisiert (`writer`).

pub mod reader;
pub mod schema;
pub mod spreadsheet;
pub mod writer;

use indexmap::IndexMap;

pub use reader::{import_rows, import_table, read_csv, ImportedTable};
pub use schema::{ColumnSpec, HeaderMap, SchemaProfile, SchemaVariant};
pub use spreadsheet::{is_spreadsheet, read_spreadsheet};
pub use writer::{export_registry, export_rows, write_csv};

/// In-Memory-Tabelle: Kopfzeile plus Datenzeilen als Text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularSheet {
    /// Erstellt eine Tabelle aus Kopfzeile und Zeilen.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Anzahl der Datenzeilen
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Zeilen als geordnete Records `Spalte → Wert` (Spaltenreihenfolge
    /// der Kopfzeile). Fehlende Zellen erscheinen als leerer Text.
    pub fn records(&self) -> impl Iterator<Item = IndexMap<&str, &str>> + '_ {
        self.rows.iter().map(move |row| {
            self.headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.as_str(), row.get(i).map_or("", String::as_str)))
                .collect()
        })
    }
}
