//! Submission-response parsing and verdict classification

use crate::error::ClientError;
use regex::Regex;
use scraper::{Html, Selector};
use std::cell::OnceCell;
use std::time::Duration;

/// The outcome of a submitted answer, as classified from the server's
/// response page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The answer was correct
    Correct { message: String },
    /// The answer was wrong
    WrongAnswer { message: String },
    /// This part was already answered (or the wrong part was submitted)
    AlreadyAnswered { message: String },
    /// Server-imposed cooldown; retry after `wait`
    RateLimited { message: String, wait: Duration },
}

impl Verdict {
    /// The server's human-readable message
    pub fn message(&self) -> &str {
        match self {
            Verdict::Correct { message }
            | Verdict::WrongAnswer { message }
            | Verdict::AlreadyAnswered { message }
            | Verdict::RateLimited { message, .. } => message,
        }
    }

    /// Display colour for this verdict
    pub fn colour(&self) -> &'static str {
        match self {
            Verdict::Correct { .. } => "green",
            Verdict::WrongAnswer { .. } => "red",
            Verdict::AlreadyAnswered { .. } | Verdict::RateLimited { .. } => "yellow",
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }

    /// The cooldown to wait before retrying, for rate-limited verdicts
    pub fn wait(&self) -> Option<Duration> {
        match self {
            Verdict::RateLimited { wait, .. } => Some(*wait),
            _ => None,
        }
    }
}

/// Parser for AOC submission responses with lazily compiled patterns
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    wait_regex: OnceCell<Regex>,
    article_selector: OnceCell<Selector>,
}

impl ResponseParser {
    pub fn new() -> Self {
        Self {
            wait_regex: OnceCell::new(),
            article_selector: OnceCell::new(),
        }
    }

    fn wait_regex(&self) -> &Regex {
        self.wait_regex.get_or_init(|| {
            Regex::new(r"You have (?:(\d+)m )?(\d+)s left to wait\.").expect("valid pattern")
        })
    }

    fn article_selector(&self) -> &Selector {
        self.article_selector
            .get_or_init(|| Selector::parse("article").expect("valid selector"))
    }

    /// Extract the article text from the response page, collapsed to one line
    fn extract_message(&self, html: &str) -> Result<String, ClientError> {
        let document = Html::parse_document(html);
        let article = document
            .select(self.article_selector())
            .next()
            .ok_or_else(|| ClientError::UnrecognizedResponse(html.to_string()))?;
        let text: String = article.text().collect();
        Ok(text.replace('\n', "").trim().to_string())
    }

    /// Classify a submission response by the literal prefix of its message
    pub fn parse_submission_response(&self, html: &str) -> Result<Verdict, ClientError> {
        let message = self.extract_message(html)?;

        if message.starts_with("You gave") {
            let wait = self.extract_wait(&message)?;
            return Ok(Verdict::RateLimited { message, wait });
        }
        if message.starts_with("That's the") {
            return Ok(Verdict::Correct { message });
        }
        if message.starts_with("You don't") {
            return Ok(Verdict::AlreadyAnswered { message });
        }
        if message.starts_with("That's not") {
            return Ok(Verdict::WrongAnswer { message });
        }
        Err(ClientError::UnrecognizedMessage(message))
    }

    /// Pull the advertised cooldown out of a rate-limit message
    fn extract_wait(&self, message: &str) -> Result<Duration, ClientError> {
        let caps = self
            .wait_regex()
            .captures(message)
            .ok_or_else(|| ClientError::UnrecognizedMessage(message.to_string()))?;
        let minutes = match caps.get(1) {
            Some(m) => m
                .as_str()
                .parse::<u64>()
                .map_err(|_| ClientError::UnrecognizedMessage(message.to_string()))?,
            None => 0,
        };
        let seconds = caps[2]
            .parse::<u64>()
            .map_err(|_| ClientError::UnrecognizedMessage(message.to_string()))?;
        Ok(Duration::from_secs(minutes * 60 + seconds))
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
