use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CATEGORIES: [char; 3] = ['a', 'o', 'b'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::new(3, 10)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeErr(String);

impl Display for ShapeErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid shape '{}' - expected ROWSxCOLS, e.g. 3x10", self.0)
    }
}

impl std::error::Error for ShapeErr {}

impl FromStr for Shape {
    type Err = ShapeErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ShapeErr(s.to_owned());
        let mut parts = s.trim().splitn(2, |c| c == 'x' || c == 'X');
        let rows = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let cols = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        Ok(Shape::new(rows, cols))
    }
}

/// Optional bounds on a single search. The default is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_expansions: Option<usize>,
    pub max_time: Option<Duration>,
}

impl Limits {
    pub fn unlimited() -> Self {
        Limits::default()
    }

    pub fn expansions(max_expansions: usize) -> Self {
        Limits {
            max_expansions: Some(max_expansions),
            max_time: None,
        }
    }
}
