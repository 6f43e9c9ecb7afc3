//! Map Marker Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod tabular;

pub use app::{AppCommand, AppController, AppIntent, AppState, MarkerForm, UiState};
pub use core::{
    derive_color, ColorMode, Field, GeoPoint, Marker, MarkerError, MarkerInput, MarkerRegistry,
    MarkerResult, Measurements, TileStyle, ViewConfig,
};
pub use render::{JsonRenderer, MapRenderer};
pub use shared::{EditorOptions, MapDocument, RenderEntry};
pub use tabular::{read_csv, write_csv, SchemaProfile, SchemaVariant, TabularSheet};
