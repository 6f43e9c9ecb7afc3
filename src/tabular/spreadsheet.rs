//! Import: Excel-/ODS-Arbeitsmappe → `TabularSheet`.
//!
//! Gelesen wird nur das erste Tabellenblatt; die erste Zeile ist die
//! Kopfzeile. Die weitere Verarbeitung läuft wie beim CSV-Import über
//! `import_table`.

use super::TabularSheet;
use crate::core::{MarkerError, MarkerResult};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Dateiendungen, die als Arbeitsmappe gelesen werden.
pub const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Ob der Pfad anhand der Endung eine Arbeitsmappe ist (case-insensitiv).
pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Liest das erste Tabellenblatt einer Arbeitsmappe.
///
/// Komplett leere Zeilen werden übersprungen, Zahlen als kürzester Text
/// übernommen.
pub fn read_spreadsheet(path: &Path) -> MarkerResult<TabularSheet> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MarkerError::Schema("Arbeitsmappe enthaelt kein Tabellenblatt".into()))??;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()));

    let headers = rows
        .next()
        .ok_or_else(|| MarkerError::Schema("Tabellenblatt hat keine Kopfzeile".into()))?;
    let rows: Vec<Vec<String>> = rows.collect();

    log::debug!(
        "Arbeitsmappe {} gelesen: {} Spalten, {} Zeilen",
        path.display(),
        headers.len(),
        rows.len()
    );
    Ok(TabularSheet::new(headers, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        other => other.to_string(),
    }
}
