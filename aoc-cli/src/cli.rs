//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code puzzle I/O
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Fetch Advent of Code inputs and submit answers", version)]
pub struct Args {
    /// Event year (defaults to the most recent event)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Cache file for puzzle inputs and submission verdicts
    #[arg(long, default_value = "~/.cache/aoc-kit/cache.json")]
    pub cache_file: PathBuf,

    /// Skip sanity-check confirmation prompts
    #[arg(short = 'y', long)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the puzzle input for a day, fetching and caching it if needed
    Input {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,
    },
    /// Submit an answer for a day and part
    Submit {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        part: u8,
        answer: String,
    },
}
