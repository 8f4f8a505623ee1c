use std::fmt::{self, Display, Formatter};

// max rows and cols, positions are stored as u8
pub const MAX_SIZE: usize = 255;

/// Label of an item, e.g. `a` for apples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(pub char);

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub category: Category,
    pub size: u8,
}

impl Item {
    pub fn new(category: char, size: u8) -> Self {
        Item {
            category: Category(category),
            size,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:02}", self.category, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// Neighbor in `dir` if it's inside a `rows` x `cols` grid.
    pub(crate) fn neighbor(self, dir: Dir, rows: u8, cols: u8) -> Option<Pos> {
        match dir {
            Dir::Up if self.r > 0 => Some(Pos::new(self.r - 1, self.c)),
            Dir::Down if self.r + 1 < rows => Some(Pos::new(self.r + 1, self.c)),
            Dir::Left if self.c > 0 => Some(Pos::new(self.r, self.c - 1)),
            Dir::Right if self.c + 1 < cols => Some(Pos::new(self.r, self.c + 1)),
            _ => None,
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which a compound swap visits the neighbors.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];
