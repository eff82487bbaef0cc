//! Colour-coded console output for submission verdicts

use crate::cache::CachedVerdict;
use aoc_client::Verdict;
use colored::{ColoredString, Colorize};
use std::time::Duration;

fn paint(message: &str, colour: &str) -> ColoredString {
    match colour {
        "green" => message.green().bold(),
        "red" => message.red().bold(),
        _ => message.yellow().bold(),
    }
}

/// Print a fresh verdict in its display colour
pub fn print_verdict(verdict: &Verdict) {
    println!("{}", paint(verdict.message(), verdict.colour()));
}

/// Print a replayed verdict, marked as coming from the cache
pub fn print_cached(entry: &CachedVerdict) {
    println!(
        "{}{}",
        "Cached response: ".italic(),
        paint(&entry.message, &entry.colour)
    );
}

/// Announce the rate-limit back-off before sleeping through it
pub fn print_waiting(wait: Duration) {
    let minutes = wait.as_secs() / 60;
    let seconds = wait.as_secs() % 60;
    println!("Waiting {minutes}m {seconds}s to retry...");
}

/// Announce that the sanity check aborted the submission
pub fn print_cancelled() {
    println!("{}", "Submission cancelled.".red());
}
