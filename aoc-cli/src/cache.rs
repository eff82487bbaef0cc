//! JSON-backed cache for puzzle inputs and submission verdicts
//!
//! One file holds two namespaces: `inputs` (day number to raw text) and
//! `submissions` (`"day-part"` to a map from stringified answer to the cached
//! verdict). The cache is strictly additive: once stored, an entry is never
//! invalidated or overwritten. It is read once at startup and rewritten
//! wholesale on commit; concurrent processes are unsupported and the last
//! writer wins.

use crate::error::CacheError;
use aoc_client::Verdict;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// A persisted submission verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedVerdict {
    pub message: String,
    pub colour: String,
    pub is_correct: bool,
}

impl From<&Verdict> for CachedVerdict {
    fn from(verdict: &Verdict) -> Self {
        Self {
            message: verdict.message().to_string(),
            colour: verdict.colour().to_string(),
            is_correct: verdict.is_correct(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheData {
    inputs: BTreeMap<String, String>,
    submissions: BTreeMap<String, BTreeMap<String, CachedVerdict>>,
}

/// File-backed cache with explicit load/commit lifecycle
pub struct PuzzleCache {
    path: PathBuf,
    data: CacheData,
}

impl PuzzleCache {
    /// Load the cache from disk; a missing file is an empty cache
    pub fn load(path: PathBuf) -> Result<Self, CacheError> {
        let data = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CacheData::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, data })
    }

    /// Rewrite the whole cache file
    pub fn commit(&self) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CacheError::DirCreation(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Cached input text for a day, if any
    pub fn input(&self, day: u8) -> Option<&str> {
        self.data.inputs.get(&day.to_string()).map(String::as_str)
    }

    /// Store a day's input; an existing entry is kept as-is
    pub fn store_input(&mut self, day: u8, text: String) {
        self.data.inputs.entry(day.to_string()).or_insert(text);
    }

    fn part_key(day: u8, part: u8) -> String {
        format!("{day}-{part}")
    }

    /// Cached verdict for an exact (day, part, answer) submission, if any
    pub fn verdict(&self, day: u8, part: u8, answer: &str) -> Option<&CachedVerdict> {
        self.data
            .submissions
            .get(&Self::part_key(day, part))?
            .get(answer)
    }

    /// Record a verdict; an existing entry is kept as-is
    pub fn store_verdict(&mut self, day: u8, part: u8, answer: &str, verdict: CachedVerdict) {
        self.data
            .submissions
            .entry(Self::part_key(day, part))
            .or_default()
            .entry(answer.to_string())
            .or_insert(verdict);
    }

    /// Whether a correct answer is already recorded for this day/part
    pub fn has_correct(&self, day: u8, part: u8) -> bool {
        self.data
            .submissions
            .get(&Self::part_key(day, part))
            .is_some_and(|answers| answers.values().any(|v| v.is_correct))
    }
}
