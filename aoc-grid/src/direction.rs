//! Compass directions and motion tokens

use crate::vec2d::Vec2d;
use aoc_parse::{ParseError, ParseResult};

pub const NORTH: Vec2d = Vec2d::new(0, -1);
pub const EAST: Vec2d = Vec2d::new(1, 0);
pub const SOUTH: Vec2d = Vec2d::new(0, 1);
pub const WEST: Vec2d = Vec2d::new(-1, 0);

/// A left turn for [`Vec2d::rotate`]
pub const LEFT: i64 = -1;
/// A right turn for [`Vec2d::rotate`]
pub const RIGHT: i64 = 1;

/// Parse a motion token into a unit vector.
///
/// Accepts `U/D/L/R`, compass `N/E/S/W`, and arrows `^/v/</>`.
pub fn motion(raw: &str) -> ParseResult<Vec2d> {
    match raw {
        "U" | "N" | "^" => Ok(NORTH),
        "D" | "S" | "v" => Ok(SOUTH),
        "L" | "W" | "<" => Ok(WEST),
        "R" | "E" | ">" => Ok(EAST),
        _ => Err(ParseError::UnknownToken(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_parse::{chars, words};

    #[test]
    fn test_motion_tokens() {
        assert_eq!(motion("U").unwrap(), NORTH);
        assert_eq!(motion("v").unwrap(), SOUTH);
        assert_eq!(motion("W").unwrap(), WEST);
        assert_eq!(motion(">").unwrap(), EAST);
        assert!(matches!(motion("x"), Err(ParseError::UnknownToken(_))));
    }

    #[test]
    fn test_motion_composes_with_combinators() {
        let path = chars(motion)("^^>v").unwrap();
        assert_eq!(path, vec![NORTH, NORTH, EAST, SOUTH]);

        let walked: Vec2d = words(motion)("N N E")
            .unwrap()
            .into_iter()
            .fold(Vec2d::new(0, 0), |pos, step| pos + step);
        assert_eq!(walked, Vec2d::new(1, -2));
    }

    #[test]
    fn test_turning_between_directions() {
        assert_eq!(NORTH.rotate(RIGHT), EAST);
        assert_eq!(NORTH.rotate(LEFT), WEST);
        assert_eq!(EAST.rotate(RIGHT), SOUTH);
    }
}
