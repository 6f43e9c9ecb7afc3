//! Application Controller für zentrale Event-Verarbeitung.

use super::map_document;
use super::{AppCommand, AppIntent, AppState};
use crate::core::MarkerResult;
use crate::shared::MapDocument;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Bricht beim ersten fehlgeschlagenen Command ab; die restlichen
    /// Commands des Intents werden nicht ausgeführt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            if let Err(err) = self.handle_command(state, command) {
                log::warn!("Aktion abgelehnt: {:#}", err);
                return Err(err);
            }
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Marker ===
            AppCommand::CreateMarker { input } => handlers::editing::create(state, &input)?,
            AppCommand::UpdateMarker { index, input } => {
                handlers::editing::update(state, index, &input)?
            }
            AppCommand::DeleteMarker { index } => handlers::editing::delete(state, index)?,
            AppCommand::ClearForm => handlers::editing::clear_form(state),

            // === Selektion & Suche ===
            AppCommand::SelectMarker { index } => handlers::selection::select(state, index)?,
            AppCommand::SelectSearchHit { row } => {
                handlers::selection::select_search_hit(state, row)?
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::RunSearch { query } => handlers::selection::search(state, query),
            AppCommand::ClearSearch => handlers::selection::clear_search(state),

            // === Ansicht ===
            AppCommand::SetZoom { zoom } => handlers::view::set_zoom(state, zoom),
            AppCommand::SetTileStyle { name } => handlers::view::set_tile_style(state, &name)?,
            AppCommand::SetColorMode { mode } => handlers::view::set_color_mode(state, mode)?,

            // === Datei-I/O ===
            AppCommand::ImportTable { path } => handlers::file_io::import(state, path)?,
            AppCommand::SaveProject { path } => handlers::file_io::save_project(state, path)?,
            AppCommand::LoadProject { path } => handlers::file_io::load_project(state, path)?,
            AppCommand::ExportMap { path } => handlers::file_io::export_map(state, path)?,
        }

        Ok(())
    }

    /// Baut ein frisches Kartendokument aus dem aktuellen State.
    pub fn build_map_document(&self, state: &AppState) -> MarkerResult<MapDocument> {
        map_document::build(&state.registry, &state.view)
    }
}
