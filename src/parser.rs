use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::{Board, BoardErr};
use crate::data::Item;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParserErr {
    Cell(usize, usize),
    Board(BoardErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Cell(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::Board(ref err) => write!(f, "Invalid board: {}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<BoardErr> for ParserErr {
    fn from(err: BoardErr) -> Self {
        ParserErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Accepts what `Board`'s `Display` produces: cells like `a: 07` separated by `|`,
/// one row per line. Blank lines and separator lines made of dashes are skipped.
pub(crate) fn parse(board: &str) -> Result<Board, ParserErr> {
    let mut rows = Vec::new();
    for line in board.lines().map(str::trim) {
        if line.is_empty() || line.chars().all(|c| c == '-') {
            continue;
        }

        let r = rows.len();
        let row = line
            .split('|')
            .enumerate()
            .map(|(c, cell)| parse_cell(cell).ok_or(ParserErr::Cell(r, c)))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(Board::from_rows(rows)?)
}

fn parse_cell(cell: &str) -> Option<Item> {
    let mut parts = cell.splitn(2, ':');
    let mut category = parts.next()?.trim().chars();
    let size = parts.next()?.trim().parse().ok()?;

    let label = category.next()?;
    if category.next().is_some() || size == 0 {
        return None;
    }
    Some(Item::new(label, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;

    #[test]
    fn parsing_board() {
        let text = r"
a: 02 | b: 01
--------------
a: 01 | o: 10
--------------
";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
        assert_eq!(board[Pos::new(0, 0)], Item::new('a', 2));
        assert_eq!(board[Pos::new(1, 1)], Item::new('o', 10));
        assert!(!board.is_sorted());
    }

    #[test]
    fn formatted_board_parses_back() {
        let text = "a: 03 | o: 01 | b: 02\nb: 01 | a: 02 | a: 03\n";
        let board: Board = text.parse().unwrap();
        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn invalid_cells() {
        assert_eq!(
            "a: 01 | b 02".parse::<Board>().unwrap_err(),
            ParserErr::Cell(0, 1)
        );
        assert_eq!(
            "a: 01\nab: 02".parse::<Board>().unwrap_err(),
            ParserErr::Cell(1, 0)
        );
        assert_eq!(
            "a: 00".parse::<Board>().unwrap_err(),
            ParserErr::Cell(0, 0)
        );
        assert_eq!(
            "a: 300".parse::<Board>().unwrap_err(),
            ParserErr::Cell(0, 0)
        );
    }

    #[test]
    fn invalid_shape() {
        assert_eq!(
            "\n------\n".parse::<Board>().unwrap_err(),
            ParserErr::Board(BoardErr::EmptyRows)
        );
        assert_eq!(
            "a: 01 | a: 02\na: 03".parse::<Board>().unwrap_err(),
            ParserErr::Board(BoardErr::RaggedRows(1))
        );
    }
}
