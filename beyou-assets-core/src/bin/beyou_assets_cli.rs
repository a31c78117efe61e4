//! BeYou Assets CLI
//!
//! Zero arguments regenerates everything under the current directory.
//! Progress goes to stdout; errors go to stderr with a non-zero exit.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use beyou_assets_core::{
    logging::{init_logging, LogConfig},
    AssetPipeline, GenerationReport, NEXT_STEPS,
};

#[derive(Parser)]
#[command(name = "beyou-assets-cli")]
#[command(about = "BeYou App Assets Generator - icons, launch screens and store documents")]
#[command(version)]
struct Cli {
    /// Directory the asset tree is written under
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// More detail (-v paths and digests, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the JSON generation report after the run
    #[arg(long)]
    report: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LogConfig::from_verbosity(cli.verbose, cli.quiet)) {
        eprintln!("error: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    if !cli.quiet {
        println!("🌈 BeYou App Assets Generator Starting...\n");
    }

    let pipeline = AssetPipeline::beyou(&cli.root);
    let today = chrono::Local::now().date_naive();

    let report = match pipeline.run(today) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.report {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    print_summary(&report);
    ExitCode::SUCCESS
}

fn print_summary(report: &GenerationReport) {
    println!("\n🎉 Asset generation complete!");
    println!(
        "   {} files written ({} vector), digest {}",
        report.artifacts.len(),
        report.vector_artifacts().count(),
        report.vector_digest.get(..12).unwrap_or(&report.vector_digest),
    );
    println!("\n📋 Next Steps:");
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }
    println!("\n🌈 BeYou is ready for the app stores! 🚀");
}
