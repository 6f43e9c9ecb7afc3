//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod map_document;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Registry, Ansicht, Formular).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use map_document::build as build_map_document;
pub use state::{AppState, MarkerForm, SearchState, SelectionState, UiState};
