use colored::*;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use textwrap::wrap;

use claimlens::models::claim::ConfidenceBucket;
use claimlens::render::{ConfidencePill, RenderedResults};
use claimlens::session::{StatusKind, StatusLine};

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print the session status line with its style
pub fn print_status(status: &StatusLine) {
    match status.kind {
        StatusKind::Success => print_success(&status.message),
        StatusKind::Error => print_error(&status.message),
        StatusKind::None => {
            if !status.message.is_empty() {
                println!("{}", status.message);
            }
        }
    }
}

/// Paint a confidence pill with its bucket color
pub fn paint_pill(pill: &ConfidencePill) -> ColoredString {
    let label = format!("[{}]", pill.label);
    match pill.bucket {
        ConfidenceBucket::High => label.green().bold(),
        ConfidenceBucket::Medium => label.yellow().bold(),
        ConfidenceBucket::Low => label.red().bold(),
    }
}

/// Print the summary line and the claim cards
pub fn print_results(results: &RenderedResults) {
    let width = Term::stdout().size().1 as usize;

    println!("\n{}", results.summary.bold());

    for card in &results.cards {
        println!();
        println!("{} {}", card.headline, paint_pill(&card.pill));
        println!("  {}", card.similarity);
        for line in wrap(&card.evidence, width.saturating_sub(10)) {
            println!("  {}", line);
        }
        if let Some(url) = &card.source_url {
            println!("  {} {}", "Source:".bold(), url.cyan().underline());
        }
    }
}

/// Read multi-line text from the user, finished by an empty line
pub fn read_text_lines() -> std::io::Result<String> {
    println!("Enter text to validate (one line at a time, empty line to finish):");
    let mut lines: Vec<String> = Vec::new();

    loop {
        let line: String = Input::with_theme(&get_theme())
            .with_prompt(format!("Line {}", lines.len() + 1))
            .allow_empty(true)
            .interact()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        if line.is_empty() {
            break;
        }

        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
