use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::board::Board;
use crate::moves::Move;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
    skipped_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    /// Successors dropped during expansion because their board was already expanded.
    pub fn total_skipped(&self) -> i32 {
        self.skipped_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node.dist)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node.dist)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node.dist)
    }

    pub(crate) fn add_skipped(&mut self, dist: u32) -> bool {
        Self::add(&mut self.skipped_states, dist)
    }

    fn add(counts: &mut Vec<i32>, dist: u32) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[dist as usize] += 1;
        ret
    }

    fn get(counts: &[i32], depth: usize) -> i32 {
        counts.get(depth).cloned().unwrap_or(0)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / unique visited / reached duplicates / skipped:")?;
        writeln!(
            f,
            "{:<16}{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string(),
            self.total_skipped().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(
            f,
            "Created but not reached total: {}",
            (created - visited - duplicates).separated_string()
        )?;
        writeln!(
            f,
            "Skipped as already visited total: {}",
            self.total_skipped().separated_string()
        )?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
            Cell::new("Unknown (not reached)"),
            Cell::new("Skipped"),
        ]));
        // created_states is the longest vec except for skipped states one level deeper
        let depths = self.created_states.len().max(self.skipped_states.len());
        for depth in 0..depths {
            let created = Self::get(&self.created_states, depth);
            let visited = Self::get(&self.visited_states, depth);
            let duplicates = Self::get(&self.duplicate_states, depth);
            let skipped = Self::get(&self.skipped_states, depth);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&(created - visited - duplicates).separated_string()),
                Cell::new(&skipped.separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}

/// Node of the search tree, allocated in an arena owned by one search.
/// `prev` points to the node this one was expanded from, the start node has none.
pub(crate) struct SearchNode<'a> {
    pub(crate) board: Board,
    pub(crate) mov: Option<Move>,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    pub(crate) dist: u32,
    pub(crate) h: u32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        board: Board,
        mov: Option<Move>,
        prev: Option<&'a SearchNode<'a>>,
        dist: u32,
        h: u32,
    ) -> Self {
        Self {
            board,
            mov,
            prev,
            dist,
            h,
        }
    }

    pub(crate) fn cost(&self) -> u32 {
        self.dist + self.h
    }
}

// the heap only cares about cost, ties are broken arbitrarily
impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost().cmp(&other.cost())
    }
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost() == other.cost()
    }
}

impl Eq for SearchNode<'_> {}
