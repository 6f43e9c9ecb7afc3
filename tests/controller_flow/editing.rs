use crate::{state_with_three_markers, submit};
use map_marker_editor::{AppCommand, AppController, AppIntent, AppState, ColorMode, MarkerError};

#[test]
fn test_form_submit_creates_marker_and_clears_form() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    submit(&mut controller, &mut state, "Hof", "52.0", "13.0", "blue")
        .expect("Anlegen sollte gelingen");

    assert_eq!(state.marker_count(), 1);
    let marker = state.registry.get(0).unwrap();
    assert_eq!(marker.label(), "Hof");
    assert_eq!(marker.icon(), "info-sign");
    assert!(state.form.label.is_empty());
    assert_eq!(state.form.icon, "info-sign");
    assert!(matches!(state.command_log.last(), Some(AppCommand::ClearForm)));
}

#[test]
fn test_invalid_form_keeps_registry_and_form() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let err = submit(&mut controller, &mut state, "Hof", "91", "13.0", "blue")
        .expect_err("Breitengrad 91 ist ungültig");

    let marker_err = err
        .downcast_ref::<MarkerError>()
        .expect("MarkerError erwartet");
    assert_eq!(marker_err.field(), Some(map_marker_editor::Field::Latitude));
    assert_eq!(state.marker_count(), 0);
    // Eingaben bleiben zum Korrigieren erhalten
    assert_eq!(state.form.latitude, "91");
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::CreateMarker { .. })
    ));
}

#[test]
fn test_select_edit_submit_updates_in_place() {
    let (mut controller, mut state) = state_with_three_markers();

    controller
        .handle_intent(&mut state, AppIntent::MarkerSelected { index: 1 })
        .unwrap();
    assert_eq!(state.form.label, "Bob");
    assert_eq!(state.form.latitude, "2.0");
    assert_eq!(state.form.color, "blue");

    state.form.label = "Robert".to_string();
    controller
        .handle_intent(&mut state, AppIntent::FormSubmitted)
        .unwrap();

    assert_eq!(state.marker_count(), 3);
    assert_eq!(state.registry.get(1).unwrap().label(), "Robert");
    assert_eq!(state.selection.selected_index, None);
    assert!(state.form.label.is_empty());
}

#[test]
fn test_delete_selected_shifts_following_markers() {
    let (mut controller, mut state) = state_with_three_markers();

    controller
        .handle_intent(&mut state, AppIntent::MarkerSelected { index: 0 })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .unwrap();

    assert_eq!(state.marker_count(), 2);
    assert_eq!(state.registry.get(0).unwrap().label(), "Bob");
    assert_eq!(state.selection.selected_index, None);
}

#[test]
fn test_delete_without_selection_fails_without_mutation() {
    let (mut controller, mut state) = state_with_three_markers();

    let result = controller.handle_intent(&mut state, AppIntent::DeleteSelectedRequested);

    assert!(result.is_err());
    assert_eq!(state.marker_count(), 3);
}

#[test]
fn test_color_mode_switch_only_on_empty_registry() {
    let (mut controller, mut state) = state_with_three_markers();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ColorModeChanged {
            mode: ColorMode::Threshold,
        },
    );
    assert!(result.is_err());
    assert_eq!(state.registry.color_mode(), ColorMode::Explicit);

    let mut fresh = AppState::new();
    controller
        .handle_intent(
            &mut fresh,
            AppIntent::ColorModeChanged {
                mode: ColorMode::Threshold,
            },
        )
        .unwrap();
    assert_eq!(fresh.registry.color_mode(), ColorMode::Threshold);
}

#[test]
fn test_threshold_form_derives_color() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ColorModeChanged {
                mode: ColorMode::Threshold,
            },
        )
        .unwrap();

    state.form.label = "Probe".to_string();
    state.form.latitude = "50.0".to_string();
    state.form.longitude = "8.0".to_string();
    state.form.von = "0.3".to_string();
    state.form.voff = "-0.9".to_string();
    controller
        .handle_intent(&mut state, AppIntent::FormSubmitted)
        .unwrap();

    assert_eq!(state.registry.get(0).unwrap().color(), "green");
}

#[test]
fn test_threshold_edit_rederives_color_across_band_edge() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ColorModeChanged {
                mode: ColorMode::Threshold,
            },
        )
        .unwrap();
    state.form.label = "Probe".to_string();
    state.form.latitude = "50.0".to_string();
    state.form.longitude = "8.0".to_string();
    state.form.von = "0.3".to_string();
    state.form.voff = "-1.0".to_string();
    controller
        .handle_intent(&mut state, AppIntent::FormSubmitted)
        .unwrap();
    assert_eq!(state.registry.get(0).unwrap().color(), "green");

    controller
        .handle_intent(&mut state, AppIntent::MarkerSelected { index: 0 })
        .unwrap();
    assert!(state.form.color.is_empty());
    state.form.voff = "0.0".to_string();
    controller
        .handle_intent(&mut state, AppIntent::FormSubmitted)
        .expect("Farbe sollte neu abgeleitet werden");

    assert_eq!(state.marker_count(), 1);
    let marker = state.registry.get(0).unwrap();
    assert_eq!(marker.color(), "red");
    assert_eq!(marker.measurements().map(|m| m.voff), Some(0.0));
}

#[test]
fn test_selection_cleared_resets_selection_and_form() {
    let (mut controller, mut state) = state_with_three_markers();

    controller
        .handle_intent(&mut state, AppIntent::MarkerSelected { index: 2 })
        .unwrap();
    state.form.icon = "flag".to_string();
    assert_eq!(state.selection.selected_index, Some(2));

    controller
        .handle_intent(&mut state, AppIntent::SelectionCleared)
        .unwrap();

    assert_eq!(state.selection.selected_index, None);
    assert!(state.form.label.is_empty());
    assert!(state.form.latitude.is_empty());
    assert_eq!(state.form.icon, "info-sign");
    assert_eq!(state.marker_count(), 3);
    assert_eq!(state.registry.get(2).unwrap().icon(), "info-sign");
}
