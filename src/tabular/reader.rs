//! Import: CSV-Text → `TabularSheet` → validierte Marker.

use super::schema::{HeaderMap, SchemaProfile, SchemaVariant};
use super::TabularSheet;
use crate::core::{Field, Marker, MarkerError, MarkerInput, MarkerResult};

/// Ergebnis eines Imports mit erkannter Variante.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedTable {
    pub variant: SchemaVariant,
    pub markers: Vec<Marker>,
}

/// Liest CSV-Text in eine Tabelle. Die erste Zeile ist die Kopfzeile,
/// Zeilen dürfen unterschiedlich lang sein.
pub fn read_csv(text: &str) -> MarkerResult<TabularSheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(TabularSheet::new(headers, rows))
}

/// Normalisiert und validiert alle Zeilen einer Tabelle.
///
/// Fehlende optionale Spalten und leere Zellen fallen auf die Defaults
/// zurück (Icon `info-sign`, Farbe per Farbregel in der Schwellwert-Variante).
/// Der erste Fehler bricht den gesamten Import ab.
pub fn import_rows(
    sheet: &TabularSheet,
    header_map: &HeaderMap,
    variant: SchemaVariant,
) -> MarkerResult<Vec<Marker>> {
    let mode = variant.color_mode();
    sheet
        .rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let cell = |field: Field| -> Option<String> {
                header_map
                    .position(field)
                    .and_then(|position| row.get(position))
                    .map(|value| value.trim().to_string())
            };

            let input = MarkerInput {
                label: cell(Field::Label).unwrap_or_default(),
                latitude: cell(Field::Latitude).unwrap_or_default(),
                longitude: cell(Field::Longitude).unwrap_or_default(),
                color: cell(Field::Color),
                icon: cell(Field::Icon),
                von: cell(Field::Von),
                voff: cell(Field::Voff),
            };

            input
                .validate(mode)
                .map_err(|err| with_row_context(err, row_index + 1))
        })
        .collect()
}

/// Erkennt die Variante, löst die Kopfzeile auf und importiert alle Zeilen.
pub fn import_table(sheet: &TabularSheet, profile: SchemaProfile) -> MarkerResult<ImportedTable> {
    let variant = SchemaVariant::detect(&sheet.headers);
    let header_map = HeaderMap::resolve(&sheet.headers, variant, profile)?;
    let markers = import_rows(sheet, &header_map, variant)?;
    log::debug!(
        "Tabelle importiert: {} Zeilen, Variante {:?}",
        markers.len(),
        variant
    );
    Ok(ImportedTable { variant, markers })
}

fn with_row_context(err: MarkerError, row: usize) -> MarkerError {
    match err {
        MarkerError::Validation { field, reason } => MarkerError::Validation {
            field,
            reason: format!("Zeile {}: {}", row, reason),
        },
        other => other,
    }
}
