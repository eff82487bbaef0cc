//! Answer submission with verdict replay, sanity checks, and rate-limit back-off

use crate::cache::{CachedVerdict, PuzzleCache};
use crate::error::CliError;
use crate::output;
use aoc_client::{AocClient, Verdict};
use colored::Colorize;
use std::fmt;
use std::io::Write;

/// Guard-rail thresholds for the pre-submission sanity check.
///
/// These are arbitrary workflow guards, not invariants; tune to taste.
#[derive(Debug, Clone, Copy)]
pub struct SanityLimits {
    /// Strings shorter than this prompt for confirmation
    pub short_answer_len: usize,
    /// Integers strictly between plus/minus this prompt for confirmation
    pub small_int_bound: i64,
}

impl Default for SanityLimits {
    fn default() -> Self {
        Self {
            short_answer_len: 5,
            small_int_bound: 50,
        }
    }
}

/// A candidate answer, keyed in the cache by its string form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Int(i64),
    Text(String),
}

impl Answer {
    /// Integer if it parses as one, text otherwise
    pub fn parse(raw: &str) -> Self {
        raw.parse()
            .map(Answer::Int)
            .unwrap_or_else(|_| Answer::Text(raw.to_string()))
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(n) => write!(f, "{n}"),
            Answer::Text(s) => write!(f, "{s}"),
        }
    }
}

/// How a submission ended
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The answer went over the wire and this verdict came back
    Fresh(Verdict),
    /// This exact answer was submitted before; its verdict was replayed
    /// without a network call
    Replayed(CachedVerdict),
    /// The sanity check was declined; nothing was submitted
    Cancelled,
}

/// Why an answer needs interactive confirmation before being sent, if it does
pub fn confirmation_reason(
    answer: &Answer,
    already_solved: bool,
    limits: &SanityLimits,
) -> Option<&'static str> {
    match answer {
        Answer::Text(s) if s.chars().count() < limits.short_answer_len => Some("short string"),
        Answer::Int(n) if -limits.small_int_bound < *n && *n < limits.small_int_bound => {
            Some("small integer")
        }
        _ if already_solved => Some("already solved"),
        _ => None,
    }
}

/// Submits answers for one day/part at a time against a shared cache
pub struct Submitter<'a> {
    client: &'a AocClient,
    cache: &'a mut PuzzleCache,
    session: &'a str,
    limits: SanityLimits,
    assume_yes: bool,
}

impl<'a> Submitter<'a> {
    pub fn new(client: &'a AocClient, cache: &'a mut PuzzleCache, session: &'a str) -> Self {
        Self {
            client,
            cache,
            session,
            limits: SanityLimits::default(),
            assume_yes: false,
        }
    }

    pub fn limits(mut self, limits: SanityLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Submit an answer for a day and part.
    ///
    /// An exact repeat of a previous submission replays the cached verdict
    /// with no network call. Rate-limited responses are displayed, slept
    /// through, and retried; only real verdicts are persisted. A fresh
    /// correct part-1 answer prints the part-2 URL.
    pub fn submit(
        &mut self,
        day: u8,
        part: u8,
        answer: &Answer,
    ) -> Result<SubmitOutcome, CliError> {
        let answer_key = answer.to_string();

        if let Some(entry) = self.cache.verdict(day, part, &answer_key) {
            let entry = entry.clone();
            output::print_cached(&entry);
            return Ok(SubmitOutcome::Replayed(entry));
        }

        let already_solved = self.cache.has_correct(day, part);
        if let Some(reason) = confirmation_reason(answer, already_solved, &self.limits)
            && !self.confirm(&answer_key, reason)?
        {
            output::print_cancelled();
            return Ok(SubmitOutcome::Cancelled);
        }

        let verdict = loop {
            println!("Submitting {answer_key} as solution to day {day} part {part}:");
            let verdict = self.client.post_answer(day, part, &answer_key, self.session)?;
            match verdict.wait() {
                Some(wait) => {
                    output::print_verdict(&verdict);
                    output::print_waiting(wait);
                    std::thread::sleep(wait);
                }
                None => break verdict,
            }
        };

        self.cache
            .store_verdict(day, part, &answer_key, CachedVerdict::from(&verdict));
        self.cache.commit()?;
        output::print_verdict(&verdict);

        if part == 1 && verdict.is_correct() {
            println!("Part 2 is up: {}", self.client.part2_url(day));
        }
        Ok(SubmitOutcome::Fresh(verdict))
    }

    /// Ask before sending a suspicious-looking answer
    fn confirm(&self, answer: &str, reason: &str) -> Result<bool, CliError> {
        if self.assume_yes {
            return Ok(true);
        }
        print!(
            "{} [Y/n] ",
            format!("Are you sure you want to submit '{answer}' ({reason})?").yellow()
        );
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        Ok(!input.trim().to_lowercase().starts_with('n'))
    }
}
