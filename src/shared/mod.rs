//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod map_document;
pub mod options;

pub use map_document::{MapDocument, RenderEntry};
pub use options::EditorOptions;
