//! Core-Domänentypen: Marker, Registry, Farbregel, Ansichts-Konfiguration.

pub mod color_rule;
pub mod error;
/// Marker-Datensatz und Eingabe-Validierung
pub mod marker;
pub mod registry;
pub mod view_config;

pub use color_rule::{derive_color, ColorMode};
pub use error::{Field, MarkerError, MarkerResult};
pub use marker::{format_number, GeoPoint, Marker, MarkerInput, Measurements, DEFAULT_ICON};
pub use registry::{MarkerRegistry, Search};
pub use view_config::{TileStyle, ViewConfig};
