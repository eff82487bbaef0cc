//! Regex-dispatched parsing: try patterns in order, parse the first match

use crate::error::{ParseError, ParseResult};
use regex::Regex;

/// One alternative for [`switch`]: a pattern, a label, and a sub-parser
/// applied to the pattern's first capture group (or the whole match when the
/// pattern captures nothing).
pub struct Case<T> {
    pattern: Regex,
    label: &'static str,
    parser: Box<dyn Fn(&str) -> ParseResult<T>>,
}

impl<T> Case<T> {
    /// Compile a case; the pattern is anchored to match at the start of the
    /// input, like Python's `re.match`.
    pub fn new(
        pattern: &str,
        label: &'static str,
        parser: impl Fn(&str) -> ParseResult<T> + 'static,
    ) -> ParseResult<Self> {
        let regex =
            Regex::new(&format!("^(?:{pattern})")).map_err(|e| ParseError::BadPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            pattern: regex,
            label,
            parser: Box::new(parser),
        })
    }
}

/// Select a parser based on which pattern matches first.
///
/// For example, with cases `F(.+)` labelled `"f"` parsing an int and `T(.)`
/// labelled `"t"` parsing a turn, `"F12"` becomes `("f", 12)` and `"TR"`
/// becomes `("t", 1)`. Fails when no pattern matches.
pub fn switch<T>(cases: Vec<Case<T>>) -> impl Fn(&str) -> ParseResult<(&'static str, T)> {
    move |raw| {
        for case in &cases {
            if let Some(caps) = case.pattern.captures(raw) {
                let capture = match caps.get(1) {
                    Some(group) => group.as_str(),
                    None => &caps[0],
                };
                return Ok((case.label, (case.parser)(capture)?));
            }
        }
        Err(ParseError::UnknownToken(raw.to_string()))
    }
}
