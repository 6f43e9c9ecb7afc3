//! Application State: zentrale Datenhaltung der Sitzung.
//!
//! Der `AppState` besitzt die einzige `MarkerRegistry` der Sitzung.
//! Selektion und Suchtreffer speichern immer Registry-Indizes; die
//! Oberfläche bildet sichtbare Listenzeilen über `SearchState::hits` ab.

use super::CommandLog;
use crate::core::{Marker, MarkerInput, MarkerRegistry, ViewConfig, DEFAULT_ICON};
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Texteingaben des Marker-Formulars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerForm {
    pub label: String,
    pub color: String,
    pub latitude: String,
    pub longitude: String,
    pub icon: String,
    /// Nur im Schwellwert-Modus sichtbar
    pub von: String,
    /// Nur im Schwellwert-Modus sichtbar
    pub voff: String,
}

impl Default for MarkerForm {
    fn default() -> Self {
        Self {
            label: String::new(),
            color: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            icon: DEFAULT_ICON.to_string(),
            von: String::new(),
            voff: String::new(),
        }
    }
}

impl MarkerForm {
    /// Baut die Roh-Eingabe für die Registry. Leere optionale Felder
    /// gelten als nicht angegeben.
    pub fn to_input(&self) -> MarkerInput {
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        MarkerInput {
            label: self.label.clone(),
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            color: optional(&self.color),
            icon: optional(&self.icon),
            von: optional(&self.von),
            voff: optional(&self.voff),
        }
    }

    /// Lädt einen bestehenden Marker zum Bearbeiten.
    pub fn load(&mut self, marker: &Marker) {
        let input = MarkerInput::from(marker);
        self.label = input.label;
        self.latitude = input.latitude;
        self.longitude = input.longitude;
        // Abgeleitete Farbe nicht ins Formular: sie wird beim Speichern aus voff neu berechnet
        self.color = match marker.measurements() {
            Some(_) => String::new(),
            None => input.color.unwrap_or_default(),
        };
        self.icon = input.icon.unwrap_or_else(|| DEFAULT_ICON.to_string());
        self.von = input.von.unwrap_or_default();
        self.voff = input.voff.unwrap_or_default();
    }

    /// Leert alle Felder, das Icon fällt auf den Default zurück.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Registry-Index des selektierten Markers
    pub selected_index: Option<usize>,
}

/// Zustand der Marker-Suche
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Aktive Suchanfrage (`None` = ungefilterte Liste)
    pub query: Option<String>,
    /// Registry-Indizes der Treffer in Registry-Reihenfolge
    pub hits: Vec<usize>,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Pfad des zuletzt geladenen/gespeicherten Projekts (für Save ohne Dialog)
    pub current_project_path: Option<PathBuf>,
    /// Pfad des zuletzt exportierten Kartendokuments
    pub last_export_path: Option<PathBuf>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Marker der Sitzung
    pub registry: MarkerRegistry,
    /// Zoom und Kachel-Stil für den nächsten Export
    pub view: ViewConfig,
    /// Marker-Formular
    pub form: MarkerForm,
    /// Selection-State
    pub selection: SelectionState,
    /// Such-State
    pub search: SearchState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State aus geladenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            registry: MarkerRegistry::new(options.color_mode),
            view: options.initial_view(),
            form: MarkerForm::default(),
            selection: SelectionState::default(),
            search: SearchState::default(),
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.registry.count()
    }

    /// Registry-Indizes der aktuell sichtbaren Listenzeilen.
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.search.query.is_some() {
            self.search.hits.clone()
        } else {
            (0..self.registry.count()).collect()
        }
    }

    /// Ob das Icon in der konfigurierten Icon-Auswahl enthalten ist.
    pub fn offers_icon(&self, icon: &str) -> bool {
        self.options
            .icon_choices
            .iter()
            .any(|choice| choice.eq_ignore_ascii_case(icon.trim()))
    }

    /// Berechnet die Suchtreffer nach einer Registry-Mutation neu.
    pub fn refresh_search(&mut self) {
        if let Some(query) = self.search.query.as_deref() {
            self.search.hits = self.registry.search(query).map(|(i, _)| i).collect();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
