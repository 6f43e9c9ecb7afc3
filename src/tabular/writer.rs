//! Export: Marker → `TabularSheet` → CSV-Text.

use super::schema::SchemaVariant;
use super::TabularSheet;
use crate::core::{format_number, Field, Marker, MarkerError, MarkerRegistry, MarkerResult};

/// Serialisiert Marker vollständig in der Spaltenreihenfolge der Variante.
pub fn export_rows(markers: &[Marker], variant: SchemaVariant) -> TabularSheet {
    let columns = variant.columns();
    let headers = columns.iter().map(|c| c.header.to_string()).collect();
    let rows = markers
        .iter()
        .map(|marker| columns.iter().map(|c| cell_value(marker, c.field)).collect())
        .collect();

    TabularSheet::new(headers, rows)
}

/// Exportiert die Registry in der Variante ihres Farbmodus.
pub fn export_registry(registry: &MarkerRegistry) -> TabularSheet {
    export_rows(
        registry.markers(),
        SchemaVariant::for_mode(registry.color_mode()),
    )
}

/// Schreibt eine Tabelle als CSV-Text (Kopfzeile + Zeilen).
pub fn write_csv(sheet: &TabularSheet) -> MarkerResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    writer.write_record(&sheet.headers)?;
    for row in &sheet.rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| MarkerError::Csv(csv::Error::from(err.into_error())))?;
    String::from_utf8(bytes)
        .map_err(|err| MarkerError::Schema(format!("CSV-Ausgabe ist kein UTF-8: {}", err)))
}

fn cell_value(marker: &Marker, field: Field) -> String {
    match field {
        Field::Latitude => format_number(marker.latitude()),
        Field::Longitude => format_number(marker.longitude()),
        Field::Label => marker.label().to_string(),
        Field::Color => marker.color().to_string(),
        Field::Icon => marker.icon().to_string(),
        Field::Von => marker
            .measurements()
            .map(|m| format_number(m.von))
            .unwrap_or_default(),
        Field::Voff => marker
            .measurements()
            .map(|m| format_number(m.voff))
            .unwrap_or_default(),
        Field::TileStyle => String::new(),
    }
}
