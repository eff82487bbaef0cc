//! An immutable pair of integers with vector algebra

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D integer vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2d {
    pub x: i64,
    pub y: i64,
}

impl Vec2d {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Convert a row-major 1D index into a vector
    pub fn from_1d(i: i64, width: i64) -> Self {
        Self::new(i.rem_euclid(width), i.div_euclid(width))
    }

    /// Convert to a row-major 1D index
    pub fn as_1d(self, width: i64) -> i64 {
        self.y * width + self.x
    }

    pub fn as_tuple(self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Euclidean length
    pub fn length(self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    /// Manhattan distance from the origin
    pub fn manhattan(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    /// Rotate by `90 * square_angle` degrees
    pub fn rotate(self, square_angle: i64) -> Self {
        match square_angle.rem_euclid(4) {
            0 => self,
            1 => Self::new(-self.y, self.x),
            2 => Self::new(-self.x, -self.y),
            _ => Self::new(self.y, -self.x),
        }
    }

    /// Look up this position in a row-major grid
    pub fn index_of<'a, T>(self, field: &'a [Vec<T>]) -> &'a T {
        &field[self.y as usize][self.x as usize]
    }

    /// Overwrite this position in a row-major grid
    pub fn set_index<T>(self, field: &mut [Vec<T>], value: T) {
        field[self.y as usize][self.x as usize] = value;
    }

    /// The up-to-8 surrounding cells inside `[0, width) x [0, height)`,
    /// enumerated in a fixed order
    pub fn eight_neighbours(self, width: i64, height: i64) -> Vec<Self> {
        let mut neighbours = Vec::with_capacity(8);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (x, y) = (self.x + dx, self.y + dy);
                if (0..width).contains(&x) && (0..height).contains(&y) {
                    neighbours.push(Self::new(x, y));
                }
            }
        }
        neighbours
    }

    /// The up-to-4 orthogonally adjacent cells inside `[0, width) x [0, height)`,
    /// enumerated in a fixed order
    pub fn four_neighbours(self, width: i64, height: i64) -> Vec<Self> {
        [(-1, 0), (0, -1), (1, 0), (0, 1)]
            .iter()
            .map(|(dx, dy)| Self::new(self.x + dx, self.y + dy))
            .filter(|v| (0..width).contains(&v.x) && (0..height).contains(&v.y))
            .collect()
    }
}

impl From<(i64, i64)> for Vec2d {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vec2d {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2d {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vec2d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i64> for Vec2d {
    type Output = Self;

    fn mul(self, scalar: i64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2d> for i64 {
    type Output = Vec2d;

    fn mul(self, vec: Vec2d) -> Vec2d {
        vec * self
    }
}

impl Div<i64> for Vec2d {
    type Output = Self;

    /// Flooring division, matching Python's `//`
    fn div(self, scalar: i64) -> Self {
        Self::new(self.x.div_euclid(scalar), self.y.div_euclid(scalar))
    }
}

impl fmt::Display for Vec2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
