mod constants;
mod display;
mod encode;
mod error;
mod print_help;
mod utils;
mod vision;

use crate::constants::{DetectionMode, API_URL, DEFAULT_CONFIDENCE_THRESHOLD};
use crate::display::render_results;
use crate::encode::load_image;
use crate::print_help::print_help;
use crate::utils::{create_spinner, parse_threshold, run_analysis};
use colored::Colorize;
use std::{env, error::Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.iter().any(|arg| arg == "-help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let mode = match DetectionMode::from_command(&args[1]) {
        Some(mode) => mode,
        None => {
            eprintln!("{} unknown mode: {}", "error:".red().bold(), args[1]);
            print_help();
            return Ok(());
        }
    };
    let threshold = match args.get(3) {
        Some(raw) => parse_threshold(raw)?,
        None => DEFAULT_CONFIDENCE_THRESHOLD,
    };

    // Resolved once at startup and handed down explicitly from here on.
    let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();

    let image = load_image(&args[2])?;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let spinner = create_spinner(
        "magenta",
        format!("Analyzing image ({})...", mode.label()),
    );
    let result = run_analysis(&client, API_URL, &api_key, &image, mode).await;
    spinner.finish_and_clear();

    match result {
        Ok(raw) => {
            render_results(&raw, threshold);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            Err(e.into())
        }
    }
}
