//! Farbableitung aus Messwerten (Schwellwert-Variante).

use serde::{Deserialize, Serialize};

/// Untere Grenze des grünen Bandes für `voff` (inklusive).
pub const VOFF_GREEN_MIN: f64 = -1.5;
/// Obere Grenze des grünen Bandes für `voff` (inklusive).
pub const VOFF_GREEN_MAX: f64 = -0.8;
/// Farbe für Werte innerhalb des Bandes.
pub const COLOR_IN_BAND: &str = "green";
/// Farbe für Werte außerhalb des Bandes.
pub const COLOR_OUT_OF_BAND: &str = "red";

/// Legt fest, woher die Farbe der Marker einer Registry stammt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Farbe wird vom Benutzer angegeben
    #[default]
    Explicit,
    /// Farbe wird aus `voff` abgeleitet, `von`/`voff` sind Pflicht
    Threshold,
}

/// Leitet die Anzeigefarbe aus `voff` ab.
///
/// `"green"` für `-1.5 <= voff <= -0.8`, sonst `"red"` (auch für NaN).
pub fn derive_color(voff: f64) -> &'static str {
    if (VOFF_GREEN_MIN..=VOFF_GREEN_MAX).contains(&voff) {
        COLOR_IN_BAND
    } else {
        COLOR_OUT_OF_BAND
    }
}
