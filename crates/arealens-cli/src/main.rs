mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "arealens",
    version,
    about = "Rough area estimation from shape measurements and recognized text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract decimal numbers from text (inline, a file, or stdin)
    Extract {
        /// Text to scan; omit to read from --file or stdin
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Estimate a shape's area from its pixel area and recognized numbers
    Estimate {
        /// Pixel area of the detected shape outline
        #[arg(short, long, value_name = "PIXELS")]
        pixel_area: f64,

        /// Recognized text to extract numbers from
        #[arg(short, long)]
        text: Option<String>,

        /// Explicit number(s) to consider, in addition to any from --text
        #[arg(short, long = "number", value_name = "N")]
        numbers: Vec<f64>,

        /// Unit label for the estimate (echoed back, never converted)
        #[arg(short, long, default_value = "units")]
        unit: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the estimate to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { text, file, output } => commands::extract::run(text, file, &output),
        Commands::Estimate {
            pixel_area,
            text,
            numbers,
            unit,
            output,
            out,
        } => commands::estimate::run(pixel_area, text, numbers, &unit, &output, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
