//! Higher-order combinators over plain `Fn(&str) -> ParseResult<T>` parsers

use crate::error::{ParseError, ParseResult};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").expect("valid pattern"));

/// Identity parser: returns the input as an owned string
pub fn text(raw: &str) -> ParseResult<String> {
    Ok(raw.to_string())
}

/// Parse a single (optionally negative) integer
pub fn int(raw: &str) -> ParseResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| ParseError::Int(raw.to_string()))
}

/// Apply `inner` to each blank-line-separated paragraph
pub fn paras<T>(inner: impl Fn(&str) -> ParseResult<T>) -> impl Fn(&str) -> ParseResult<Vec<T>> {
    move |raw| raw.split("\n\n").map(&inner).collect()
}

/// Apply `inner` to each line
pub fn lines<T>(inner: impl Fn(&str) -> ParseResult<T>) -> impl Fn(&str) -> ParseResult<Vec<T>> {
    move |raw| raw.lines().map(&inner).collect()
}

/// Apply `inner` to each whitespace-separated word
pub fn words<T>(inner: impl Fn(&str) -> ParseResult<T>) -> impl Fn(&str) -> ParseResult<Vec<T>> {
    move |raw| raw.split_whitespace().map(&inner).collect()
}

/// Apply `inner` to each character, passed as a one-character substring
pub fn chars<T>(inner: impl Fn(&str) -> ParseResult<T>) -> impl Fn(&str) -> ParseResult<Vec<T>> {
    move |raw| {
        raw.char_indices()
            .map(|(i, c)| inner(&raw[i..i + c.len_utf8()]))
            .collect()
    }
}

/// Apply `inner` to each piece of the input split on a literal separator
pub fn split<T>(
    sep: &str,
    inner: impl Fn(&str) -> ParseResult<T>,
) -> impl Fn(&str) -> ParseResult<Vec<T>> {
    let sep = sep.to_string();
    move |raw| raw.split(sep.as_str()).map(&inner).collect()
}

/// Parse indented blocks, like this:
///
/// ```txt
/// this is all
///   part of the
///   first block
/// but this is
///   all part of
///   the second
/// ```
///
/// A block ends when a line returns to column-0 indentation. The indent width
/// is inferred from the second line of the first block and reused for all
/// blocks; trailing whitespace of each block is stripped before `inner` is
/// applied. A single-line input yields one block.
pub fn indents<T>(inner: impl Fn(&str) -> ParseResult<T>) -> impl Fn(&str) -> ParseResult<Vec<T>> {
    move |raw| {
        let mut blocks = Vec::new();
        let mut buffer = String::new();
        let mut indent: Option<usize> = None;
        for line in raw.split_inclusive('\n') {
            if buffer.is_empty() {
                buffer.push_str(line);
                continue;
            }
            let width = *indent
                .get_or_insert_with(|| line.chars().take_while(|c| *c == ' ').count());
            if is_indented(line, width) {
                buffer.push_str(line);
            } else {
                blocks.push(inner(buffer.trim_end())?);
                buffer.clear();
                buffer.push_str(line);
            }
        }
        blocks.push(inner(buffer.trim_end())?);
        Ok(blocks)
    }
}

/// A line continues the current block when its first `width` columns are whitespace
fn is_indented(line: &str, width: usize) -> bool {
    if width == 0 {
        return false;
    }
    let prefix: String = line.chars().take(width).collect();
    !prefix.is_empty() && prefix.chars().all(char::is_whitespace)
}

/// Look up a single token in a fixed table.
///
/// For example, `tags([("#", 1), (".", 0)])` parses `"#"` into `1` and `"."`
/// into `0`; any other token fails with [`ParseError::UnknownToken`].
pub fn tags<T: Clone>(
    table: impl IntoIterator<Item = (&'static str, T)>,
) -> impl Fn(&str) -> ParseResult<T> {
    let table: HashMap<&'static str, T> = table.into_iter().collect();
    move |raw| {
        table
            .get(raw)
            .cloned()
            .ok_or_else(|| ParseError::UnknownToken(raw.to_string()))
    }
}

/// Parse a rectangular character grid into a 2D array of tiles.
///
/// For example, `field(tags([(".", 0), ("#", 1)]))` parses
///
/// ```txt
/// #..
/// ..#
/// ```
///
/// into `[[1, 0, 0], [0, 0, 1]]`.
pub fn field<T>(
    tile: impl Fn(&str) -> ParseResult<T>,
) -> impl Fn(&str) -> ParseResult<Vec<Vec<T>>> {
    lines(chars(tile))
}

/// Ignore the input and always return a fixed value
pub fn constant<T: Clone>(value: T) -> impl Fn(&str) -> ParseResult<T> {
    move |_| Ok(value.clone())
}

/// Split on `","` into exactly two parts and apply `inner` to each
pub fn pair<T>(inner: impl Fn(&str) -> ParseResult<T>) -> impl Fn(&str) -> ParseResult<(T, T)> {
    pair_on(",", inner)
}

/// Split on `sep` into exactly two parts and apply `inner` to each
pub fn pair_on<T>(
    sep: &str,
    inner: impl Fn(&str) -> ParseResult<T>,
) -> impl Fn(&str) -> ParseResult<(T, T)> {
    let sep = sep.to_string();
    move |raw| {
        let mut parts = raw.split(sep.as_str());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => Ok((inner(a)?, inner(b)?)),
            _ => Err(arity(2, sep.as_str(), raw)),
        }
    }
}

/// Split on `","` into exactly three parts and apply `inner` to each
pub fn triple<T>(
    inner: impl Fn(&str) -> ParseResult<T>,
) -> impl Fn(&str) -> ParseResult<(T, T, T)> {
    triple_on(",", inner)
}

/// Split on `sep` into exactly three parts and apply `inner` to each
pub fn triple_on<T>(
    sep: &str,
    inner: impl Fn(&str) -> ParseResult<T>,
) -> impl Fn(&str) -> ParseResult<(T, T, T)> {
    let sep = sep.to_string();
    move |raw| {
        let mut parts = raw.split(sep.as_str());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), Some(c), None) => Ok((inner(a)?, inner(b)?, inner(c)?)),
            _ => Err(arity(3, sep.as_str(), raw)),
        }
    }
}

fn arity(expected: usize, sep: &str, raw: &str) -> ParseError {
    ParseError::Arity {
        expected,
        found: raw.split(sep).count(),
        input: raw.to_string(),
    }
}

/// Extract every (optionally negative) integer substring, in order
pub fn ints(raw: &str) -> ParseResult<Vec<i64>> {
    INT_RE
        .find_iter(raw)
        .map(|m| {
            m.as_str()
                .parse()
                .map_err(|_| ParseError::Int(m.as_str().to_string()))
        })
        .collect()
}

/// Parse a turn direction: `"L"` is -1, `"R"` is 1
pub fn turn(raw: &str) -> ParseResult<i64> {
    match raw {
        "L" => Ok(-1),
        "R" => Ok(1),
        _ => Err(ParseError::UnknownToken(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lines_inverse_of_join() {
        let parser = lines(text);
        assert_eq!(parser("a\nb\nc").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_words_inverse_of_join() {
        let parser = words(text);
        assert_eq!(parser("a b  c").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_chars_splits_individually() {
        let parser = chars(text);
        assert_eq!(parser("abc").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_paras_splits_on_blank_lines() {
        let parser = paras(text);
        assert_eq!(parser("a\nb\n\nc").unwrap(), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_split_on_literal_separator() {
        let parser = split(" -> ", int);
        assert_eq!(parser("1 -> 2 -> 3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_indents_two_blocks() {
        let parser = indents(text);
        assert_eq!(
            parser("x\n  y\n  z\nw\n  v").unwrap(),
            vec!["x\n  y\n  z", "w\n  v"]
        );
    }

    #[test]
    fn test_indents_single_line() {
        let parser = indents(text);
        assert_eq!(parser("just one line").unwrap(), vec!["just one line"]);
    }

    #[test]
    fn test_indents_strips_trailing_whitespace() {
        let parser = indents(text);
        assert_eq!(parser("x\n  y\nw\n").unwrap(), vec!["x\n  y", "w"]);
    }

    #[test]
    fn test_pair_parses_two_fields() {
        assert_eq!(pair(int)("3,4").unwrap(), (3, 4));
    }

    #[test]
    fn test_pair_rejects_wrong_arity() {
        assert!(matches!(
            pair(int)("1,2,3"),
            Err(ParseError::Arity { expected: 2, found: 3, .. })
        ));
        assert!(matches!(
            pair(int)("1"),
            Err(ParseError::Arity { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_triple_parses_three_fields() {
        assert_eq!(triple(int)("1,2,3").unwrap(), (1, 2, 3));
        assert_eq!(triple_on("x", int)("2x3x4").unwrap(), (2, 3, 4));
    }

    #[test]
    fn test_triple_rejects_wrong_arity() {
        assert!(matches!(
            triple(int)("1,2"),
            Err(ParseError::Arity { expected: 3, .. })
        ));
    }

    #[test]
    fn test_ints_extracts_negative_numbers() {
        assert_eq!(ints("a-12 and 34").unwrap(), vec![-12, 34]);
        assert_eq!(ints("no numbers").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_turn_tokens() {
        assert_eq!(turn("L").unwrap(), -1);
        assert_eq!(turn("R").unwrap(), 1);
        assert!(matches!(turn("U"), Err(ParseError::UnknownToken(_))));
    }

    #[test]
    fn test_tags_lookup_and_failure() {
        let tile = tags([("#", 1), (".", 0)]);
        assert_eq!(tile(".").unwrap(), 0);
        assert_eq!(tile("#").unwrap(), 1);
        let err = tile("x").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse 'x'");
    }

    #[test]
    fn test_field_grid() {
        let parser = field(tags([(".", 0), ("#", 1), ("?", 2)]));
        assert_eq!(
            parser("#..\n.?.\n..#").unwrap(),
            vec![vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_constant_ignores_input() {
        let parser = constant(7);
        assert_eq!(parser("anything").unwrap(), 7);
        assert_eq!(parser("").unwrap(), 7);
    }

    #[test]
    fn test_combinators_nest() {
        // One paragraph of coordinate lines, one of bare numbers.
        let parser = paras(lines(words(int)));
        let parsed = parser("1 2\n3 4\n\n5").unwrap();
        assert_eq!(parsed, vec![vec![vec![1, 2], vec![3, 4]], vec![vec![5]]]);
    }

    proptest! {
        #[test]
        fn prop_lines_inverts_join(parts in prop::collection::vec("[a-z0-9 ]{1,8}", 1..6)) {
            let joined = parts.join("\n");
            prop_assert_eq!(lines(text)(&joined).unwrap(), parts);
        }

        #[test]
        fn prop_split_inverts_join(parts in prop::collection::vec("[a-z]{1,5}", 1..6)) {
            let joined = parts.join(";");
            prop_assert_eq!(split(";", text)(&joined).unwrap(), parts);
        }

        #[test]
        fn prop_int_round_trips(n in any::<i64>()) {
            prop_assert_eq!(int(&n.to_string()).unwrap(), n);
        }

        #[test]
        fn prop_ints_finds_every_number(nums in prop::collection::vec(-1000i64..1000, 1..6)) {
            let line = nums
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" and ");
            prop_assert_eq!(ints(&line).unwrap(), nums);
        }
    }
}
