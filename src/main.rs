//! Map Marker Editor.
//!
//! Kommandozeilen-Frontend: Tabellen importieren, Marker durchsuchen und
//! ein Kartendokument für einen externen Renderer erzeugen.

use clap::{Parser, Subcommand};
use map_marker_editor::core::DEFAULT_ICON;
use map_marker_editor::{AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;

/// Marker-Tabellen verwalten und als Kartendokument exportieren.
#[derive(Debug, Parser)]
#[command(name = "map-marker-editor", version, about)]
struct Cli {
    /// Optionen-Datei (Standard: neben der Binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tabelle (CSV oder Arbeitsmappe) laden und das Kartendokument schreiben
    Render {
        input: PathBuf,
        /// Eingabe als Projektdatei laden (alle Spalten Pflicht)
        #[arg(long)]
        project: bool,
        #[arg(long)]
        zoom: Option<i64>,
        /// Kachel-Stil, z.B. "OpenStreetMap" oder "CartoDB positron"
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Marker suchen und Treffer ausgeben
    Search { input: PathBuf, query: String },
    /// Externe Tabelle importieren und als Projekt speichern
    Convert { input: PathBuf, output: PathBuf },
    /// Icon-Auswahl aus den Optionen auflisten
    Icons,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Map Marker Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    match cli.command {
        Command::Render {
            input,
            project,
            zoom,
            style,
            out,
        } => {
            let load = if project {
                AppIntent::LoadProjectRequested { path: input }
            } else {
                AppIntent::ImportRequested { path: input }
            };
            controller.handle_intent(&mut state, load)?;

            if let Some(zoom) = zoom {
                controller.handle_intent(&mut state, AppIntent::ZoomChanged { zoom })?;
            }
            if let Some(name) = style {
                controller.handle_intent(&mut state, AppIntent::TileStyleChanged { name })?;
            }
            controller.handle_intent(&mut state, AppIntent::ExportMapRequested { path: out })?;

            if let Some(path) = &state.ui.last_export_path {
                println!("{}", path.display());
            }
        }
        Command::Search { input, query } => {
            controller.handle_intent(&mut state, AppIntent::ImportRequested { path: input })?;
            controller.handle_intent(&mut state, AppIntent::SearchRequested { query })?;

            for index in state.visible_indices() {
                if let Ok(marker) = state.registry.get(index) {
                    println!("{}: {}", index, marker.list_label());
                }
            }
        }
        Command::Convert { input, output } => {
            controller.handle_intent(&mut state, AppIntent::ImportRequested { path: input })?;
            controller.handle_intent(
                &mut state,
                AppIntent::SaveProjectRequested { path: Some(output) },
            )?;
        }
        Command::Icons => {
            for icon in &state.options.icon_choices {
                let suffix = if icon.as_str() == DEFAULT_ICON { " (Standard)" } else { "" };
                println!("{}{}", icon, suffix);
            }
        }
    }

    Ok(())
}
