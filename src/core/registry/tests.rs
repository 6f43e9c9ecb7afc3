use super::*;
use crate::core::error::Field;

fn input(label: &str, lat: &str, lon: &str, color: &str) -> MarkerInput {
    MarkerInput::new(label, lat, lon).with_color(color)
}

fn registry_with(labels: &[&str]) -> MarkerRegistry {
    let mut registry = MarkerRegistry::new(ColorMode::Explicit);
    for (i, label) in labels.iter().enumerate() {
        registry
            .create(&input(label, &format!("{}.5", i), "10.0", "blue"))
            .expect("Marker sollte angelegt werden");
    }
    registry
}

#[test]
fn test_create_appends_and_returns_last_index() {
    let mut registry = MarkerRegistry::new(ColorMode::Explicit);
    assert_eq!(registry.count(), 0);

    let first = registry.create(&input("A", "1", "2", "red")).unwrap();
    let second = registry.create(&input("B", "3", "4", "green")).unwrap();

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.get(1).unwrap().label(), "B");
}

#[test]
fn test_create_with_invalid_fields_does_not_mutate() {
    let mut registry = registry_with(&["A"]);
    let before = registry.clone();

    let err = registry.create(&input("X", "95.0", "0", "red")).unwrap_err();
    assert_eq!(err.field(), Some(Field::Latitude));

    let err = registry.create(&input("", "1", "0", "red")).unwrap_err();
    assert_eq!(err.field(), Some(Field::Label));

    assert_eq!(registry, before);
}

#[test]
fn test_update_replaces_all_fields_and_keeps_count() {
    let mut registry = registry_with(&["A", "B", "C"]);

    registry
        .update(1, &input("Neu", "-45.0", "170.0", "orange").with_icon("flag"))
        .unwrap();

    assert_eq!(registry.count(), 3);
    let marker = registry.get(1).unwrap();
    assert_eq!(marker.label(), "Neu");
    assert_eq!(marker.latitude(), -45.0);
    assert_eq!(marker.longitude(), 170.0);
    assert_eq!(marker.color(), "orange");
    assert_eq!(marker.icon(), "flag");
}

#[test]
fn test_update_out_of_range_is_index_error() {
    let mut registry = registry_with(&["A"]);
    let err = registry.update(1, &input("B", "1", "1", "red")).unwrap_err();
    assert!(matches!(err, MarkerError::Index { index: 1, count: 1 }));
}

#[test]
fn test_update_with_invalid_fields_keeps_old_marker() {
    let mut registry = registry_with(&["A"]);
    let before = registry.get(0).unwrap().clone();

    let err = registry.update(0, &input("A", "1", "abc", "red")).unwrap_err();
    assert_eq!(err.field(), Some(Field::Longitude));
    assert_eq!(registry.get(0).unwrap(), &before);
}

#[test]
fn test_delete_shifts_following_markers_down() {
    let mut registry = registry_with(&["A", "B", "C", "D"]);
    let c_before = registry.get(2).unwrap().clone();
    let d_before = registry.get(3).unwrap().clone();

    let removed = registry.delete(1).unwrap();

    assert_eq!(removed.label(), "B");
    assert_eq!(registry.count(), 3);
    assert_eq!(registry.get(0).unwrap().label(), "A");
    assert_eq!(registry.get(1).unwrap(), &c_before);
    assert_eq!(registry.get(2).unwrap(), &d_before);
}

#[test]
fn test_delete_on_empty_or_out_of_range_is_index_error() {
    let mut registry = MarkerRegistry::new(ColorMode::Explicit);
    assert!(matches!(
        registry.delete(0),
        Err(MarkerError::Index { index: 0, count: 0 })
    ));

    let mut registry = registry_with(&["A", "B"]);
    assert!(matches!(
        registry.delete(2),
        Err(MarkerError::Index { index: 2, count: 2 })
    ));
    assert_eq!(registry.count(), 2);
}

#[test]
fn test_get_out_of_range_is_index_error() {
    let registry = registry_with(&["A"]);
    assert!(registry.get(0).is_ok());
    assert!(matches!(registry.get(5), Err(MarkerError::Index { .. })));
}

#[test]
fn test_search_is_case_insensitive_and_order_preserving() {
    let registry = registry_with(&["Alice", "bob", "Alina"]);

    let hits: Vec<(usize, &str)> = registry
        .search("ali")
        .map(|(i, m)| (i, m.label()))
        .collect();

    assert_eq!(hits, vec![(0, "Alice"), (2, "Alina")]);
}

#[test]
fn test_search_is_restartable_and_does_not_mutate() {
    let registry = registry_with(&["Alice", "bob", "Alina"]);
    let before = registry.clone();

    let search = registry.search("ALI");
    let first: Vec<usize> = search.clone().map(|(i, _)| i).collect();
    let second: Vec<usize> = search.map(|(i, _)| i).collect();

    assert_eq!(first, second);
    assert_eq!(registry, before);
}

#[test]
fn test_search_matches_color_and_coordinates() {
    let mut registry = MarkerRegistry::new(ColorMode::Explicit);
    registry.create(&input("Hof", "48.137", "11.575", "DarkBlue")).unwrap();
    registry.create(&input("Feld", "52.52", "13.405", "red")).unwrap();

    assert_eq!(registry.search("blue").count(), 1);
    assert_eq!(registry.search("13.40").next().map(|(i, _)| i), Some(1));
    assert_eq!(registry.search("").count(), 2);
    assert_eq!(registry.search("zzz").count(), 0);
}

#[test]
fn test_search_matches_measurements_in_threshold_mode() {
    let mut registry = MarkerRegistry::new(ColorMode::Threshold);
    registry
        .create(&MarkerInput::new("P1", "1", "1").with_measurements("3.25", "-1.0"))
        .unwrap();
    registry
        .create(&MarkerInput::new("P2", "1", "1").with_measurements("7.0", "0.5"))
        .unwrap();

    let hits: Vec<usize> = registry.search("3.25").map(|(i, _)| i).collect();
    assert_eq!(hits, vec![0]);
}

#[test]
fn test_color_mode_switch_only_when_empty() {
    let mut registry = MarkerRegistry::new(ColorMode::Explicit);
    registry.set_color_mode(ColorMode::Threshold).unwrap();
    assert_eq!(registry.color_mode(), ColorMode::Threshold);

    registry
        .create(&MarkerInput::new("P", "1", "1").with_measurements("1", "-1"))
        .unwrap();
    assert!(matches!(
        registry.set_color_mode(ColorMode::Explicit),
        Err(MarkerError::Schema(_))
    ));
    assert_eq!(registry.color_mode(), ColorMode::Threshold);
}

#[test]
fn test_replace_all_swaps_contents_and_mode() {
    let mut registry = registry_with(&["A", "B"]);
    let replacement = MarkerInput::new("T", "5", "5")
        .with_measurements("1", "-1.2")
        .validate(ColorMode::Threshold)
        .unwrap();

    registry.replace_all(ColorMode::Threshold, vec![replacement]);

    assert_eq!(registry.count(), 1);
    assert_eq!(registry.color_mode(), ColorMode::Threshold);
    assert_eq!(registry.get(0).unwrap().color(), "green");
}
