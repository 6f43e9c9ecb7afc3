//! Marker-Datensatz und Validierung der Roh-Eingaben.
//!
//! `MarkerInput` sammelt Texteingaben (Formular oder Tabellenzeile),
//! `MarkerInput::validate` prüft sie einmalig an der Grenze und erzeugt
//! daraus einen `Marker`. Danach wird nie wieder implizit validiert.

use super::color_rule::{derive_color, ColorMode};
use super::error::{Field, MarkerError, MarkerResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon für Marker ohne explizite Angabe.
pub const DEFAULT_ICON: &str = "info-sign";

/// Gültiger Bereich für Breitengrade.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Gültiger Bereich für Längengrade.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Geografische Position in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt ohne Bereichsprüfung.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Messwerte der Schwellwert-Variante.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub von: f64,
    pub voff: f64,
}

/// Ein validierter Marker. Felder sind nur lesbar, Änderungen laufen
/// ausschließlich über die Registry (vollständiges Ersetzen).
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: GeoPoint,
    label: String,
    color: String,
    icon: String,
    measurements: Option<Measurements>,
}

impl Marker {
    /// Position des Markers
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn latitude(&self) -> f64 {
        self.position.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }

    /// Beschriftung (Popup-Text)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Anzeigefarbe (explizit oder abgeleitet)
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Messwerte, nur in der Schwellwert-Variante gesetzt
    pub fn measurements(&self) -> Option<Measurements> {
        self.measurements
    }

    /// Zeile für die Marker-Liste der Oberfläche.
    pub fn list_label(&self) -> String {
        let lat = format_number(self.position.latitude);
        let lon = format_number(self.position.longitude);
        match self.measurements {
            Some(m) => format!(
                "{} ({}, {}) - Von: {}, Voff: {}",
                self.label,
                lat,
                lon,
                format_number(m.von),
                format_number(m.voff)
            ),
            None => format!(
                "{} ({}, {}) - {} - {}",
                self.label, lat, lon, self.color, self.icon
            ),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list_label())
    }
}

/// Roh-Eingaben für einen Marker, wie sie aus Formular oder Tabelle kommen.
///
/// Optionale Felder sind `None` oder leer, wenn sie nicht angegeben wurden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerInput {
    pub label: String,
    pub latitude: String,
    pub longitude: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub von: Option<String>,
    pub voff: Option<String>,
}

impl MarkerInput {
    /// Erstellt eine Eingabe mit den Pflichtfeldern beider Varianten.
    pub fn new(
        label: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Setzt die Messwerte der Schwellwert-Variante.
    pub fn with_measurements(mut self, von: impl Into<String>, voff: impl Into<String>) -> Self {
        self.von = Some(von.into());
        self.voff = Some(voff.into());
        self
    }

    /// Prüft alle Felder gegen den Farbmodus und erzeugt einen Marker.
    ///
    /// Der erste ungültige Wert bricht mit einem `Validation`-Fehler ab,
    /// der das betroffene Feld benennt.
    pub fn validate(&self, mode: ColorMode) -> MarkerResult<Marker> {
        let label = required_text(Field::Label, &self.label)?;
        let latitude = parse_number(Field::Latitude, &self.latitude)?;
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(MarkerError::validation(
                Field::Latitude,
                format!("{} liegt nicht in [-90, 90]", latitude),
            ));
        }
        let longitude = parse_number(Field::Longitude, &self.longitude)?;
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(MarkerError::validation(
                Field::Longitude,
                format!("{} liegt nicht in [-180, 180]", longitude),
            ));
        }

        let explicit_color = optional_text(self.color.as_deref());
        let (color, measurements) = match mode {
            ColorMode::Explicit => {
                let color = explicit_color
                    .ok_or_else(|| MarkerError::validation(Field::Color, "Farbe fehlt"))?;
                (color.to_string(), None)
            }
            ColorMode::Threshold => {
                let von = parse_number(Field::Von, self.von.as_deref().unwrap_or_default())?;
                let voff = parse_number(Field::Voff, self.voff.as_deref().unwrap_or_default())?;
                let derived = derive_color(voff);
                if let Some(given) = explicit_color {
                    if !given.eq_ignore_ascii_case(derived) {
                        return Err(MarkerError::validation(
                            Field::Color,
                            format!(
                                "'{}' widerspricht der aus voff={} abgeleiteten Farbe '{}'",
                                given,
                                format_number(voff),
                                derived
                            ),
                        ));
                    }
                }
                (derived.to_string(), Some(Measurements { von, voff }))
            }
        };

        let icon = optional_text(self.icon.as_deref()).unwrap_or(DEFAULT_ICON);

        Ok(Marker {
            position: GeoPoint::new(latitude, longitude),
            label: label.to_string(),
            color,
            icon: icon.to_string(),
            measurements,
        })
    }
}

impl From<&Marker> for MarkerInput {
    fn from(marker: &Marker) -> Self {
        Self {
            label: marker.label.clone(),
            latitude: format_number(marker.position.latitude),
            longitude: format_number(marker.position.longitude),
            color: Some(marker.color.clone()),
            icon: Some(marker.icon.clone()),
            von: marker.measurements.map(|m| format_number(m.von)),
            voff: marker.measurements.map(|m| format_number(m.voff)),
        }
    }
}

/// Formatiert eine Zahl in kürzester verlustfreier Darstellung, immer mit
/// Dezimalpunkt (`-1.0`, `45.5`). Wird für Suche, Liste und Export genutzt.
pub fn format_number(value: f64) -> String {
    let text = value.to_string();
    if text.contains(['.', 'e', 'E']) || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

fn required_text(field: Field, value: &str) -> MarkerResult<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MarkerError::validation(field, "Pflichtfeld ist leer"));
    }
    Ok(trimmed)
}

fn optional_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number(field: Field, value: &str) -> MarkerResult<f64> {
    let text = required_text(field, value)?;
    let number = text
        .parse::<f64>()
        .map_err(|_| MarkerError::validation(field, format!("'{}' ist keine Zahl", text)))?;
    if !number.is_finite() {
        return Err(MarkerError::validation(field, "Wert muss endlich sein"));
    }
    Ok(number)
}
