//! Ablauf-Tests über AppController, Intents und Commands.

mod editing;
mod io_and_selection;

use map_marker_editor::{AppController, AppIntent, AppState, ColorMode};

/// Füllt das Formular und schickt es ab.
pub fn submit(
    controller: &mut AppController,
    state: &mut AppState,
    label: &str,
    lat: &str,
    lon: &str,
    color: &str,
) -> anyhow::Result<()> {
    state.form.label = label.to_string();
    state.form.latitude = lat.to_string();
    state.form.longitude = lon.to_string();
    state.form.color = color.to_string();
    controller.handle_intent(state, AppIntent::FormSubmitted)
}

/// Sitzung mit drei Markern im expliziten Farbmodus.
pub fn state_with_three_markers() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.registry.color_mode(), ColorMode::Explicit);

    for (label, lat, lon, color) in [
        ("Alice", "1.0", "1.0", "red"),
        ("Bob", "2.0", "2.0", "blue"),
        ("Alina", "3.0", "3.0", "green"),
    ] {
        submit(&mut controller, &mut state, label, lat, lon, color)
            .expect("Marker sollte angelegt werden");
    }
    (controller, state)
}
