pub(crate) mod a_star;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Formatter};
use std::time::Instant;

use fnv::FnvHashSet;
use log::{debug, trace};
use typed_arena::Arena;

use crate::board::Board;
use crate::config::Limits;
use crate::data::Pos;
use crate::moves::{Move, Moves};
use crate::Solve;

use self::a_star::SearchNode;
pub use self::a_star::Stats;

#[derive(Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Moves,
    /// Board after each move, the last one is sorted.
    pub path: Vec<Board>,
}

#[derive(Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    /// Every reachable board was expanded without finding a sorted one.
    NoSolution,
    LimitReached,
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
}

impl SolverOk {
    fn new(outcome: Outcome, stats: Stats) -> Self {
        Self { outcome, stats }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self.outcome {
            Outcome::Solved(ref solution) => Some(solution),
            _ => None,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved(ref solution) => writeln!(f, "Moves: {}", solution.moves.move_cnt())?,
            Outcome::NoSolution => writeln!(f, "No solution")?,
            Outcome::LimitReached => writeln!(f, "Search limit reached")?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, limits: Limits, print_status: bool) -> SolverOk {
        search(self, limits, print_status)
    }
}

/// Best-first search ordered by `dist + heuristic`.
/// Each board is expanded at most once, the first time it's reached wins.
pub fn search(initial: &Board, limits: Limits, print_status: bool) -> SolverOk {
    search_with(initial, limits, print_status, expand, heuristic)
}

fn search_with<Expand, Heuristic>(
    initial: &Board,
    limits: Limits,
    print_status: bool,
    mut expand: Expand,
    heuristic: Heuristic,
) -> SolverOk
where
    Expand: FnMut(&Board) -> Vec<(Move, Board)>,
    Heuristic: Fn(&Board) -> u32,
{
    debug!("Search called");

    let started = Instant::now();
    let mut stats = Stats::new();

    let arena = Arena::new();
    let mut to_visit = BinaryHeap::new();
    let mut closed = FnvHashSet::default();

    // h is not needed for the start, it's popped first anyway
    let start: &SearchNode<'_> = arena.alloc(SearchNode::new(initial.clone(), None, None, 0, 0));
    stats.add_created(start);
    to_visit.push(Reverse(start));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if closed.contains(&cur_node.board) {
            stats.add_reached_duplicate(cur_node);
            continue;
        }
        trace!("Current state: {}", closed.len());
        if stats.add_unique_visited(cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        if cur_node.board.is_sorted() {
            debug!("Goal state found, backtracking path");
            return SolverOk::new(Outcome::Solved(backtrack_path(cur_node)), stats);
        }

        if limit_reached(&limits, closed.len(), started) {
            debug!("Search limit reached after {} expansions", closed.len());
            return SolverOk::new(Outcome::LimitReached, stats);
        }

        closed.insert(cur_node.board.clone());

        for (mov, new_board) in expand(&cur_node.board) {
            if closed.contains(&new_board) {
                trace!("Successor {} of state {} already visited", mov, closed.len() - 1);
                stats.add_skipped(cur_node.dist + 1);
                continue;
            }

            let h = heuristic(&new_board);
            let next_node: &SearchNode<'_> = arena.alloc(SearchNode::new(
                new_board,
                Some(mov),
                Some(cur_node),
                cur_node.dist + 1,
                h,
            ));
            stats.add_created(next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    debug!("Frontier empty, no solution");
    SolverOk::new(Outcome::NoSolution, stats)
}

fn limit_reached(limits: &Limits, expanded: usize, started: Instant) -> bool {
    if let Some(max) = limits.max_expansions {
        if expanded >= max {
            return true;
        }
    }
    if let Some(max) = limits.max_time {
        if started.elapsed() >= max {
            return true;
        }
    }
    false
}

fn backtrack_path(final_node: &SearchNode<'_>) -> Solution {
    let mut moves = Vec::new();
    let mut path = Vec::new();
    let mut node = final_node;
    // the start node has no move and isn't part of the path
    while let (Some(mov), Some(prev)) = (node.mov, node.prev) {
        moves.push(mov);
        path.push(node.board.clone());
        node = prev;
    }
    moves.reverse();
    path.reverse();
    Solution {
        moves: Moves::new(moves),
        path,
    }
}

/// Number of vertically adjacent pairs where the lower item is smaller than the upper one.
/// Zero exactly when the board is sorted.
pub fn heuristic(board: &Board) -> u32 {
    let mut h = 0;
    for c in 0..board.cols() {
        for r in 1..board.rows() {
            if board[Pos::new(r, c)].size < board[Pos::new(r - 1, c)].size {
                h += 1;
            }
        }
    }
    h
}

/// One compound swap per cell in row-major order so always `rows * cols` boards.
pub fn successors(board: &Board) -> Vec<Board> {
    expand(board).into_iter().map(|(_, b)| b).collect()
}

fn expand(board: &Board) -> Vec<(Move, Board)> {
    board
        .positions()
        .map(|pos| {
            let mov = Move::new(pos);
            (mov, mov.apply(board))
        })
        .collect()
}
