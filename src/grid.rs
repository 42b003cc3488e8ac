//! Flattening a block tree into a uniform grid of unit-cell colours.
//!
//! Scoring never walks the tree directly; it projects the tree into a
//! [`Grid`] of side `2^(max_depth - level)` and works on that. Cells are
//! addressed `(col, row)` with `(0, 0)` the top-left unit cell.

use std::fmt;

use crate::block::Block;
use crate::settings::Colour;

/// A square grid of unit-cell colours.
pub struct Grid {
    side: usize,
    cells: Vec<Colour>,
}

impl Grid {
    /// Side length of the grid.
    pub fn side(&self) -> usize {
        self.side
    }

    fn idx(&self, col: usize, row: usize) -> usize {
        row * self.side + col
    }

    /// Colour at `(col, row)`, or `None` out of bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<Colour> {
        if col >= self.side || row >= self.side {
            return None;
        }
        Some(self.cells[self.idx(col, row)])
    }

    /// The in-bounds orthogonal neighbours of `(col, row)`.
    pub fn neighbours(&self, col: usize, row: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let s = self.side;
        let mut v = Vec::new();
        if col > 0 {
            v.push((col - 1, row));
        }
        if col + 1 < s {
            v.push((col + 1, row));
        }
        if row > 0 {
            v.push((col, row - 1));
        }
        if row + 1 < s {
            v.push((col, row + 1));
        }
        v.into_iter()
    }
}

/// Project `block` into a grid of side `2^(max_depth - level)`.
///
/// A unit cell flattens to a 1x1 grid. An undivided leaf above max depth
/// fills its whole grid with one colour, exactly as if it had been
/// subdivided into same-coloured children all the way down. An internal
/// node assembles its children's grids into quadrants, in the canonical
/// child order (top-right, top-left, bottom-left, bottom-right).
pub fn flatten(block: &Block) -> Grid {
    let side = 1usize << (block.max_depth - block.level);

    if let Some(colour) = block.colour {
        return Grid {
            side,
            cells: vec![colour; side * side],
        };
    }

    let quadrants: Vec<Grid> = block.children.iter().map(flatten).collect();
    let half = side / 2;
    let mut cells = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let quadrant = match (col >= half, row >= half) {
                (true, false) => &quadrants[0],  // top-right
                (false, false) => &quadrants[1], // top-left
                (false, true) => &quadrants[2],  // bottom-left
                (true, true) => &quadrants[3],   // bottom-right
            };
            cells.push(quadrant.cells[(row % half) * half + (col % half)]);
        }
    }
    Grid { side, cells }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            for col in 0..self.side {
                let glyph = match self.get(col, row) {
                    Some(colour) => colour.glyph(),
                    None => '?',
                };
                write!(f, "{glyph} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        flatten(self).fmt(f)
    }
}
