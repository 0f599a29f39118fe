//! notemark CLI - Command-line interface library
//!
//! This library provides the CLI functionality for notemark exports:
//! - Export: convert a note file to markdown and/or PDF
//! - Inspect: print the normalized block tree of a note
//!
//! # Binary Usage
//!
//! ```bash
//! # Export a note to both formats
//! notemark export note.json --output out/
//!
//! # Markdown only
//! notemark export note.json --format markdown
//!
//! # PDF with diagrams rendered through a local Kroki server
//! notemark export note.json --format pdf --kroki-url http://localhost:8000
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{export_command, inspect_command, run_cli, ExportFormat};
