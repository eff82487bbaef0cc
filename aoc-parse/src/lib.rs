//! Parsing combinators for Advent of Code puzzle input.
//!
//! A parser is any `Fn(&str) -> Result<T, ParseError>`. Each combinator takes
//! a parser for a unit and returns a parser for a collection of units, so
//! per-day parsers are built by nesting a handful of these instead of writing
//! bespoke string-splitting logic each time.
//!
//! # Example
//!
//! ```
//! use aoc_parse::{int, lines, pair};
//!
//! let parser = lines(pair(int));
//! let points = parser("3,4\n-1,2").unwrap();
//! assert_eq!(points, vec![(3, 4), (-1, 2)]);
//! ```

mod combinators;
mod error;
mod sentence;
mod switch;

pub use combinators::{
    chars, constant, field, indents, int, ints, lines, pair, pair_on, paras, split, tags, text,
    triple, triple_on, turn, words,
};
pub use error::{ParseError, ParseResult};
pub use sentence::{Field, Sentence, sentence};
pub use switch::{Case, switch};
