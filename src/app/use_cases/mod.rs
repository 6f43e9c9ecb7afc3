//! Use-Cases der Application-Layer-Orchestrierung.

pub mod export;
pub mod file_io;
pub mod markers;
pub mod search;
pub mod viewport;
