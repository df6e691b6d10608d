use crate::constants::{CMD_OBJECTS, CMD_SCENE, CMD_TEXT, DEFAULT_CONFIDENCE_THRESHOLD};
use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " LENS ".yellow());
    println!("Usage:");
    println!(
        "  {} <mode> <image_path> [threshold]",
        "lens".bold().green()
    );
    println!("\nModes:");
    println!(
        "  {}   Object detection: name, confidence, and description per object.",
        CMD_OBJECTS.bold().magenta()
    );
    println!(
        "  {}   Scene analysis: setting, key elements, mood, activities.",
        CMD_SCENE.bold().cyan()
    );
    println!(
        "  {}   Text recognition: visible text with location and confidence.",
        CMD_TEXT.bold().red()
    );
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nArguments:");
    println!(
        "  {}  A .jpg, .jpeg, or .png file to analyze.",
        "<image_path>".bold().green()
    );
    println!(
        "  {}   Confidence cutoff for displayed objects, 0.0 to 1.0 (default {}).",
        "[threshold]".bold().green(),
        DEFAULT_CONFIDENCE_THRESHOLD
    );
    println!("\nExamples:");
    println!("  {} o garden.jpg", "lens".bold().green());
    println!("  {} o garden.jpg 0.75", "lens".bold().green());
    println!("  {} s vacation.png", "lens".bold().green());
    println!("  {} t receipt.jpeg", "lens".bold().green());
    println!("\nRequires {} in the environment or a .env file.", "OPENAI_API_KEY".bold());
    println!("{:━^60}", "".yellow());
}
