mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "granska",
    version,
    about = "PDF accessibility analysis and remediation tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract words, images and metadata from a PDF (without analyzing)
    Extract {
        /// Path to PDF file
        pdf_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the extraction snapshot to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Run OCR over embedded images (requires tesseract)
        #[arg(long)]
        ocr: bool,
    },
    /// Analyze a PDF (or a pre-extracted snapshot) for accessibility issues
    Analyze {
        /// Path to PDF or snapshot JSON file
        input_file: PathBuf,

        /// Custom heuristics JSON file
        #[arg(short = 'H', long = "heuristics", value_name = "FILE")]
        heuristics: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write a detailed text report to a file
        #[arg(short, long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Show the numbered issue list after the summary
        #[arg(long)]
        verbose: bool,

        /// Run OCR over embedded images (requires tesseract)
        #[arg(long)]
        ocr: bool,
    },
    /// Analyze a PDF, run the external remediation step, then verify
    Remediate {
        /// Path to PDF file
        pdf_file: PathBuf,

        /// Where to write the remediated PDF
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: PathBuf,

        /// Custom heuristics JSON file
        #[arg(short = 'H', long = "heuristics", value_name = "FILE")]
        heuristics: Option<PathBuf>,

        /// Remediation command to invoke
        #[arg(long, value_name = "CMD")]
        remediator: Option<String>,

        /// Skip the post-remediation verification pass
        #[arg(long)]
        skip_verify: bool,

        /// Run OCR over embedded images (requires tesseract)
        #[arg(long)]
        ocr: bool,
    },
    /// Manage and inspect heuristics presets
    Heuristics {
        #[command(subcommand)]
        action: HeuristicsAction,
    },
}

#[derive(Subcommand)]
enum HeuristicsAction {
    /// List builtin presets
    List,
    /// Print a preset's thresholds
    Show {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom heuristics file
    Validate {
        /// Path to JSON heuristics file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            pdf_file,
            output,
            out,
            ocr,
        } => commands::extract::run(pdf_file, &output, out, ocr),
        Commands::Analyze {
            input_file,
            heuristics,
            output,
            report,
            verbose,
            ocr,
        } => commands::analyze::run(input_file, heuristics, &output, report, verbose, ocr),
        Commands::Remediate {
            pdf_file,
            out,
            heuristics,
            remediator,
            skip_verify,
            ocr,
        } => commands::remediate::run(pdf_file, out, heuristics, remediator, skip_verify, ocr),
        Commands::Heuristics { action } => match action {
            HeuristicsAction::List => commands::heuristics::list(),
            HeuristicsAction::Show { preset } => commands::heuristics::show(&preset),
            HeuristicsAction::Schema => commands::heuristics::schema(),
            HeuristicsAction::Validate { file } => commands::heuristics::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
