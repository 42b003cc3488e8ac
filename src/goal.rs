//! Player goals: scoring strategies over a flattened board.
//!
//! A goal pairs a scoring strategy with a target colour. Both strategies are
//! pure functions of the board: they flatten it and inspect the grid, never
//! mutating the tree.
//!
//! - Perimeter: count target-coloured cells on the grid boundary. The scan
//!   covers the full top and bottom rows and the full left and right
//!   columns, so corner cells are counted twice. That double-count is part
//!   of the scoring rules, not an accident.
//! - Blob: size of the largest 4-connected region of the target colour.

use crate::block::Block;
use crate::grid::{Grid, flatten};
use crate::settings::{COLOUR_LIST, Colour};

/// A player goal: a scoring strategy plus its target colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Goal {
    Perimeter(Colour),
    Blob(Colour),
}

impl Goal {
    /// The target colour this goal applies to.
    pub fn colour(&self) -> Colour {
        match self {
            Goal::Perimeter(colour) | Goal::Blob(colour) => *colour,
        }
    }

    /// Current score for this goal on `board`. Always >= 0.
    pub fn score(&self, board: &Block) -> usize {
        let grid = flatten(board);
        match self {
            Goal::Perimeter(colour) => perimeter_score(&grid, *colour),
            Goal::Blob(colour) => largest_blob(&grid, *colour),
        }
    }

    /// Human-readable statement of the goal.
    pub fn description(&self) -> String {
        match self {
            Goal::Perimeter(colour) => {
                format!("Put the most {} unit cells on the outer perimeter", colour.name())
            }
            Goal::Blob(colour) => {
                format!("Create the largest connected blob of {}", colour.name())
            }
        }
    }
}

/// Return `num_goals` goals of one randomly chosen kind, each with a
/// distinct random palette colour.
///
/// Precondition (checked in debug builds): `num_goals <= COLOUR_LIST.len()`.
pub fn generate_goals(num_goals: usize, rng: &mut fastrand::Rng) -> Vec<Goal> {
    debug_assert!(
        num_goals <= COLOUR_LIST.len(),
        "not enough palette colours for {num_goals} goals"
    );
    let mut unused = COLOUR_LIST.to_vec();
    let blob = rng.bool();
    (0..num_goals)
        .map(|_| {
            let colour = unused.swap_remove(rng.usize(..unused.len()));
            if blob { Goal::Blob(colour) } else { Goal::Perimeter(colour) }
        })
        .collect()
}

fn perimeter_score(grid: &Grid, target: Colour) -> usize {
    let side = grid.side();
    let mut score = 0;
    for col in 0..side {
        if grid.get(col, 0) == Some(target) {
            score += 1;
        }
        if grid.get(col, side - 1) == Some(target) {
            score += 1;
        }
    }
    for row in 0..side {
        if grid.get(0, row) == Some(target) {
            score += 1;
        }
        if grid.get(side - 1, row) == Some(target) {
            score += 1;
        }
    }
    score
}

/// Visit state for the blob flood fill.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Visit {
    Unvisited,
    /// Visited, not the target colour.
    NoMatch,
    /// Visited, part of a target-coloured blob.
    Matched,
}

/// Size of the largest 4-connected region of `target` cells, 0 if none.
fn largest_blob(grid: &Grid, target: Colour) -> usize {
    let side = grid.side();
    let mut visited = vec![Visit::Unvisited; side * side];
    let mut best = 0;
    for row in 0..side {
        for col in 0..side {
            if visited[row * side + col] == Visit::Unvisited {
                best = best.max(blob_size(grid, (col, row), target, &mut visited));
            }
        }
    }
    best
}

/// Flood-fill from `(col, row)`, counting connected target-coloured cells
/// that have never been visited. Non-matching cells are marked visited and
/// contribute 0 without expanding further.
fn blob_size(
    grid: &Grid,
    start: (usize, usize),
    target: Colour,
    visited: &mut [Visit],
) -> usize {
    let side = grid.side();
    let mut stack = vec![start];
    let mut count = 0;
    while let Some((col, row)) = stack.pop() {
        let i = row * side + col;
        if visited[i] != Visit::Unvisited {
            continue;
        }
        if grid.get(col, row) != Some(target) {
            visited[i] = Visit::NoMatch;
            continue;
        }
        visited[i] = Visit::Matched;
        count += 1;
        for (ncol, nrow) in grid.neighbours(col, row) {
            if visited[nrow * side + ncol] == Visit::Unvisited {
                stack.push((ncol, nrow));
            }
        }
    }
    count
}
