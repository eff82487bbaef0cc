//! aoc - fetch Advent of Code puzzle inputs and submit answers

mod cache;
mod cli;
mod config;
mod error;
mod output;
mod puzzle;
mod submit;

use aoc_client::AocClient;
use cache::PuzzleCache;
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use submit::{Answer, Submitter};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(&args)?;
    let client = AocClient::builder().year(config.year).build()?;
    let mut cache = PuzzleCache::load(config.cache_file.clone())?;

    match args.command {
        Command::Input { day } => {
            let input = puzzle::get_input(&client, &mut cache, &config.session, day)?;
            println!("{input}");
        }
        Command::Submit { day, part, answer } => {
            let answer = Answer::parse(&answer);
            Submitter::new(&client, &mut cache, &config.session)
                .limits(config.limits)
                .assume_yes(config.assume_yes)
                .submit(day, part, &answer)?;
        }
    }
    Ok(())
}
