use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use talkdeck::deck::content::build_deck;

/// Generate the PyCon Namibia talk deck as a .pptx presentation.
#[derive(Parser)]
#[command(name = "talkdeck", version, about)]
struct Args {
    /// Output path for the generated presentation
    #[arg(short, long, default_value = "talk.pptx")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let package = build_deck();
    match package.save(&args.output) {
        Ok(()) => {
            println!(
                "Saved {} with {} slides",
                args.output.display(),
                package.presentation().slide_count()
            );
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}
