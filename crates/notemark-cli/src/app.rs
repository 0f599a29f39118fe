//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use notemark_ast::{Document, EditorNode};
use notemark_core::slug::{markdown_filename, pdf_filename};
use notemark_core::{generate_markdown, normalize};
use notemark_diagrams::MermaidRasterizer;
use notemark_pdf::PdfRenderer;

/// Export output formats
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ExportFormat {
    /// Markdown file only
    #[value(alias = "md")]
    Markdown,
    /// PDF file only
    Pdf,
    /// Both markdown and PDF
    #[default]
    All,
}

#[derive(Parser)]
#[command(name = "notemark")]
#[command(author, version, about = "Export notes to markdown and PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a note file to markdown and/or PDF
    Export {
        /// Input note JSON file with "title" and "content" fields
        input: PathBuf,

        /// Formats to export
        #[arg(short, long, value_enum, default_value = "all")]
        format: ExportFormat,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Kroki server used to rasterize diagrams
        #[arg(long)]
        kroki_url: Option<String>,

        /// Render diagram source as code listings instead of images
        #[arg(long)]
        no_diagrams: bool,
    },

    /// Print the normalized block tree of a note as JSON
    Inspect {
        /// Input note JSON file
        input: PathBuf,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            format,
            output,
            kroki_url,
            no_diagrams,
        } => {
            export_command(&input, format, &output, kroki_url.as_deref(), no_diagrams)?;
        }
        Commands::Inspect { input } => {
            inspect_command(&input)?;
        }
    }

    Ok(())
}

/// On-disk note file shape
#[derive(Debug, Deserialize)]
struct NoteFile {
    /// Note title
    #[serde(default)]
    title: String,
    /// Raw editor content tree
    content: EditorNode,
}

/// Read a note file and normalize its content into a document snapshot
fn load_note(input: &Path) -> Result<Document> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let note: NoteFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse note file: {}", input.display()))?;

    let title = if note.title.trim().is_empty() {
        "Untitled".to_string()
    } else {
        note.title
    };
    let blocks = normalize(&note.content);
    log::debug!("normalized {} blocks from {}", blocks.len(), input.display());

    Ok(Document { title, blocks })
}

/// Execute the export command
pub fn export_command(
    input: &Path,
    format: ExportFormat,
    output_dir: &Path,
    kroki_url: Option<&str>,
    no_diagrams: bool,
) -> Result<()> {
    let document = load_note(input)?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    if matches!(format, ExportFormat::Markdown | ExportFormat::All) {
        let markdown = generate_markdown(&document);
        let path = output_dir.join(markdown_filename(&document.title));
        fs::write(&path, markdown)
            .with_context(|| format!("Failed to write markdown file: {}", path.display()))?;
        println!("Exported: {}", path.display());
    }

    if matches!(format, ExportFormat::Pdf | ExportFormat::All) {
        let renderer = if no_diagrams {
            PdfRenderer::new()
        } else {
            let rasterizer = match kroki_url {
                Some(url) => MermaidRasterizer::with_url(url),
                None => MermaidRasterizer::new(),
            };
            PdfRenderer::with_rasterizer(Box::new(rasterizer))
        };
        let bytes = renderer
            .render(&document)
            .with_context(|| format!("Failed to render PDF for: {}", input.display()))?;

        let path = output_dir.join(pdf_filename(&document.title));
        fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write PDF file: {}", path.display()))?;
        println!("Exported: {} ({} bytes)", path.display(), bytes.len());
    }

    Ok(())
}

/// Execute the inspect command
pub fn inspect_command(input: &Path) -> Result<()> {
    let document = load_note(input)?;
    let json = serde_json::to_string_pretty(&document)
        .context("Failed to serialize normalized document")?;
    println!("{}", json);
    Ok(())
}
