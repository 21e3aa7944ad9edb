//! xlsxmail CLI - Convert Excel files to CSV with email detection

use std::path::PathBuf;
use std::process;

use clap::Parser;

use xlsxmail::{is_supported_path, ConverterBuilder, SUPPORTED_EXTENSIONS};

#[derive(Parser)]
#[command(name = "xlsxmail")]
#[command(version, about = "Convert Excel files to CSV with email detection", long_about = None)]
struct Cli {
    /// Input file or directory path
    #[arg(short, long)]
    input: PathBuf,

    /// Output file or directory path
    #[arg(short, long)]
    output: PathBuf,

    /// Export all columns instead of just email columns
    #[arg(long)]
    all_columns: bool,

    /// Show detailed conversion progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let converter = match ConverterBuilder::new()
        .email_only(!cli.all_columns)
        .verbose(cli.verbose)
        .build()
    {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.input.is_file() {
        // Single file conversion
        if !is_supported_path(&cli.input) {
            let supported: Vec<String> = SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect();
            eprintln!(
                "Error: Unsupported file format. Supported formats: {}",
                supported.join(", ")
            );
            process::exit(1);
        }

        if converter.convert_file(&cli.input, &cli.output) {
            println!("Successfully converted to {}", cli.output.display());
        } else {
            process::exit(1);
        }
    } else {
        // Directory processing
        let success_count = converter.convert_directory(&cli.input, &cli.output);

        if cli.verbose || success_count == 0 {
            println!("\nConverted {} file(s)", success_count);
        }

        if success_count == 0 {
            process::exit(1);
        }
    }
}
