use crate::{state_with_three_markers, submit};
use map_marker_editor::{AppController, AppIntent, AppState, ColorMode, TileStyle};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_search_hit_selection_maps_to_registry_index() {
    let (mut controller, mut state) = state_with_three_markers();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchRequested {
                query: "ali".to_string(),
            },
        )
        .unwrap();
    assert_eq!(state.visible_indices(), vec![0, 2]);

    controller
        .handle_intent(&mut state, AppIntent::SearchHitSelected { row: 1 })
        .unwrap();
    assert_eq!(state.selection.selected_index, Some(2));
    assert_eq!(state.form.label, "Alina");

    assert!(controller
        .handle_intent(&mut state, AppIntent::SearchHitSelected { row: 5 })
        .is_err());
}

#[test]
fn test_search_results_follow_mutations() {
    let (mut controller, mut state) = state_with_three_markers();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SearchRequested {
                query: "ali".to_string(),
            },
        )
        .unwrap();

    submit(&mut controller, &mut state, "Malik", "4.0", "4.0", "gray").unwrap();
    assert_eq!(state.visible_indices(), vec![0, 2, 3]);

    controller
        .handle_intent(&mut state, AppIntent::SearchCleared)
        .unwrap();
    assert_eq!(state.visible_indices(), vec![0, 1, 2, 3]);
}

#[test]
fn test_zoom_and_tile_style_changes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ZoomChanged { zoom: 0 })
        .unwrap();
    assert_eq!(state.view.zoom(), 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::TileStyleChanged {
                name: "stamen toner".to_string(),
            },
        )
        .unwrap();
    assert_eq!(state.view.tile_style(), TileStyle::StamenToner);

    let result = controller.handle_intent(
        &mut state,
        AppIntent::TileStyleChanged {
            name: "Mapbox".to_string(),
        },
    );
    assert!(result.is_err());
    assert_eq!(state.view.tile_style(), TileStyle::StamenToner);
}

#[test]
fn test_import_appends_and_adopts_mode_of_empty_registry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportRequested {
                path: fixture("threshold_markers.csv"),
            },
        )
        .unwrap();
    assert_eq!(state.registry.color_mode(), ColorMode::Threshold);
    assert_eq!(state.marker_count(), 4);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportRequested {
                path: fixture("threshold_markers.csv"),
            },
        )
        .unwrap();
    assert_eq!(state.marker_count(), 8);

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ImportRequested {
            path: fixture("simple_markers.csv"),
        },
    );
    assert!(result.is_err());
    assert_eq!(state.marker_count(), 8);
}

#[test]
fn test_failed_import_leaves_registry_untouched() {
    let (mut controller, mut state) = state_with_three_markers();
    let before = state.registry.clone();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ImportRequested {
            path: fixture("missing_column.csv"),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.registry, before);
}

#[test]
fn test_save_and_load_project_restores_markers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projekt.csv");
    let (mut controller, mut state) = state_with_three_markers();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveProjectRequested {
                path: Some(path.clone()),
            },
        )
        .unwrap();
    assert_eq!(state.ui.current_project_path.as_deref(), Some(path.as_path()));

    let mut loaded = AppState::new();
    submit(&mut controller, &mut loaded, "Wird ersetzt", "0", "0", "red").unwrap();
    controller
        .handle_intent(&mut loaded, AppIntent::LoadProjectRequested { path })
        .unwrap();

    assert_eq!(loaded.registry, state.registry);
}

#[test]
fn test_save_without_known_path_fails() {
    let (mut controller, mut state) = state_with_three_markers();
    let result = controller.handle_intent(&mut state, AppIntent::SaveProjectRequested { path: None });
    assert!(result.is_err());
}

#[test]
fn test_load_rejects_external_table_missing_icon_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extern.csv");
    std::fs::write(&path, "Latitude,Longitude,Label,Color\n1.0,2.0,X,red\n").unwrap();

    let (mut controller, mut state) = state_with_three_markers();
    let result = controller.handle_intent(&mut state, AppIntent::LoadProjectRequested { path });

    assert!(result.is_err());
    assert_eq!(state.marker_count(), 3);
}

#[test]
fn test_export_writes_json_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("karte.json");
    let (mut controller, mut state) = state_with_three_markers();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportMapRequested {
                path: Some(path.clone()),
            },
        )
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["entries"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["zoom"], 10);
    assert_eq!(state.ui.last_export_path, Some(path));
}

#[test]
fn test_export_of_empty_registry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leer.json");
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(&mut state, AppIntent::ExportMapRequested { path: Some(path.clone()) });

    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_import_routes_workbook_by_extension() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportRequested {
                path: fixture("simple_markers.xlsx"),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImportRequested {
                path: fixture("simple_markers.csv"),
            },
        )
        .unwrap();

    assert_eq!(state.registry.color_mode(), ColorMode::Explicit);
    assert_eq!(state.marker_count(), 6);
    // Arbeitsmappe und CSV beschreiben dieselben Marker
    let markers = state.registry.markers();
    assert_eq!(markers[..3], markers[3..]);
}
