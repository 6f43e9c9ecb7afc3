//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Folge-Commands (Formular leeren, Selektion aufheben) laufen nur, wenn der
/// vorherige Command erfolgreich war.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FormSubmitted => {
            let input = state.form.to_input();
            match state.selection.selected_index {
                Some(index) => vec![
                    AppCommand::UpdateMarker { index, input },
                    AppCommand::ClearForm,
                    AppCommand::ClearSelection,
                ],
                None => vec![AppCommand::CreateMarker { input }, AppCommand::ClearForm],
            }
        }
        AppIntent::MarkerSelected { index } => vec![AppCommand::SelectMarker { index }],
        AppIntent::SearchHitSelected { row } => vec![AppCommand::SelectSearchHit { row }],
        AppIntent::SelectionCleared => vec![AppCommand::ClearSelection, AppCommand::ClearForm],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteMarker {
            index: state.selection.selected_index,
        }],
        AppIntent::SearchRequested { query } => {
            if query.trim().is_empty() {
                vec![AppCommand::ClearSearch]
            } else {
                vec![AppCommand::RunSearch { query }]
            }
        }
        AppIntent::SearchCleared => vec![AppCommand::ClearSearch],
        AppIntent::ZoomChanged { zoom } => vec![AppCommand::SetZoom { zoom }],
        AppIntent::TileStyleChanged { name } => vec![AppCommand::SetTileStyle { name }],
        AppIntent::ColorModeChanged { mode } => vec![AppCommand::SetColorMode { mode }],
        AppIntent::ImportRequested { path } => vec![AppCommand::ImportTable { path }],
        AppIntent::SaveProjectRequested { path } => vec![AppCommand::SaveProject { path }],
        AppIntent::LoadProjectRequested { path } => vec![AppCommand::LoadProject { path }],
        AppIntent::ExportMapRequested { path } => vec![AppCommand::ExportMap { path }],
    }
}
