use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use doctext_ingest::{DocumentKind, Extractor};

/// Document text extraction - pull the plain text out of PDF, DOCX, and TXT files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the text of a document and print it to stdout
    Extract {
        /// Path to the PDF, DOCX, or TXT file
        file_path: PathBuf,

        /// Write the text to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Extract { file_path, output } => extract(&file_path, output.as_deref()),
    }
}

fn extract(file_path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let filename = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
        anyhow::anyhow!(
            "unsupported file type: {} (expected .pdf, .docx, or .txt)",
            file_path.display()
        )
    })?;

    let extractor = Extractor::new();
    let text = extractor.extract(file_path, kind)?;

    match output {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{text}"),
    }

    Ok(())
}
