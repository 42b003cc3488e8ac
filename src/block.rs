//! The quad-tree board representation and its structural operations.
//!
//! A board is a square recursively subdivided into quadrants. Every node is
//! either a leaf with a colour or an internal node with exactly 4 children
//! and no colour. Nodes at `max_depth` are always leaves ("unit cells").
//!
//! The canonical child ordering is `[top-right, top-left, bottom-left,
//! bottom-right]`; swap, rotate, combine, and flattening all rely on it.
//!
//! All mutators return `bool`: an illegal operation is a no-op that returns
//! `false`, never an error. Callers probe legality this way without side
//! effects (usually on a deep copy, see [`Block::create_copy`]).

use crate::settings::{Colour, SMASH_RATE};

/// A point in board space, as `(x, y)` with the origin at the top-left.
pub type Point = (usize, usize);

/// Direction for [`Block::swap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    /// Mirror left and right columns.
    Horizontal,
    /// Mirror top and bottom rows.
    Vertical,
}

/// Direction for [`Block::rotate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

/// A node of the board quad-tree.
///
/// Invariants (hold after every public operation):
/// - `level <= max_depth`, and every child's level is `level + 1`
/// - `children.len()` is 0 or 4; nodes at `max_depth` have no children
/// - `colour` is `Some` exactly when `children` is empty
/// - the 4 children halve `size` and exactly tile this node's square
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Top-left corner, absolute in board space.
    pub position: Point,
    /// Side length in board units.
    pub size: usize,
    /// Depth from the root (0 = root).
    pub level: usize,
    /// Maximum subdivision depth, shared by every node of one tree.
    pub max_depth: usize,
    /// Leaf colour; `None` for internal nodes.
    pub colour: Option<Colour>,
    /// 0 or 4 children, each owned exclusively by this node.
    pub children: Vec<Block>,
}

impl Block {
    /// Create a leaf node.
    pub fn leaf(
        position: Point,
        size: usize,
        level: usize,
        max_depth: usize,
        colour: Colour,
    ) -> Block {
        debug_assert!(level <= max_depth, "leaf level exceeds max_depth");
        Block {
            position,
            size,
            level,
            max_depth,
            colour: Some(colour),
            children: Vec::new(),
        }
    }

    /// Offsets of the 4 quadrants from this node's position, in canonical
    /// child order: top-right, top-left, bottom-left, bottom-right.
    fn quadrant_offsets(&self) -> [Point; 4] {
        let half = self.size / 2;
        [(half, 0), (0, 0), (0, half), (half, half)]
    }

    /// True iff this block is a leaf that can still be subdivided.
    pub fn smashable(&self) -> bool {
        self.level < self.max_depth && self.children.is_empty()
    }

    /// Subdivide this leaf into 4 leaf children one level deeper, each with
    /// an independently random palette colour. The leaf's own colour is
    /// destroyed. Returns `false` (no-op) if the block is not smashable.
    pub fn smash(&mut self, rng: &mut fastrand::Rng) -> bool {
        if !self.smashable() {
            return false;
        }
        let (x, y) = self.position;
        self.children = self
            .quadrant_offsets()
            .into_iter()
            .map(|(dx, dy)| {
                Block::leaf(
                    (x + dx, y + dy),
                    self.size / 2,
                    self.level + 1,
                    self.max_depth,
                    Colour::random(rng),
                )
            })
            .collect();
        self.colour = None;
        true
    }

    /// Mirror the direct children left/right or top/bottom. Does not
    /// recurse. Returns `false` (no-op) on a leaf.
    pub fn swap(&mut self, direction: SwapDirection) -> bool {
        if self.children.is_empty() {
            return false;
        }
        match direction {
            // top-right <-> top-left, bottom-left <-> bottom-right
            SwapDirection::Horizontal => {
                self.children.swap(0, 1);
                self.children.swap(2, 3);
            }
            // top-left <-> bottom-left, top-right <-> bottom-right
            SwapDirection::Vertical => {
                self.children.swap(1, 2);
                self.children.swap(0, 3);
            }
        }
        self.update_child_positions();
        true
    }

    /// Cyclically permute the direct children by one quarter turn. Returns
    /// `false` (no-op) on a leaf. Four rotations in the same direction are
    /// the identity.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        if self.children.is_empty() {
            return false;
        }
        match direction {
            RotateDirection::Clockwise => self.children.rotate_left(1),
            RotateDirection::CounterClockwise => self.children.rotate_right(1),
        }
        self.update_child_positions();
        true
    }

    /// Set the colour of a unit cell. Returns `false` (no-op) unless this
    /// block is a leaf at `max_depth` and the new colour differs from the
    /// current one.
    pub fn paint(&mut self, colour: Colour) -> bool {
        if self.level < self.max_depth || !self.children.is_empty() || self.colour == Some(colour) {
            return false;
        }
        self.colour = Some(colour);
        true
    }

    /// Merge 4 leaf children into a single leaf coloured by plurality vote
    /// (ties go to the colour seen first in child order). Only legal one
    /// level above `max_depth`, where every child is a leaf. The children
    /// are discarded, so combine is not invertible in general. Returns
    /// `false` (no-op) when illegal.
    pub fn combine(&mut self) -> bool {
        if self.level + 1 != self.max_depth || self.children.is_empty() {
            return false;
        }
        let mut best: Option<Colour> = None;
        let mut best_count = 0;
        for child in &self.children {
            let Some(colour) = child.colour else {
                return false;
            };
            let count = self
                .children
                .iter()
                .filter(|c| c.colour == Some(colour))
                .count();
            if count > best_count {
                best_count = count;
                best = Some(colour);
            }
        }
        self.colour = best;
        self.children.clear();
        true
    }

    /// Return a fully independent deep copy of this block's subtree, for
    /// speculative evaluation that must not touch the authoritative tree.
    pub fn create_copy(&self) -> Block {
        self.clone()
    }

    /// True iff `point` lies inside this block's square. The square is
    /// half-open: top and left edges are included, bottom and right edges
    /// are not.
    pub fn contains(&self, (x, y): Point) -> bool {
        let (px, py) = self.position;
        x >= px && x < px + self.size && y >= py && y < py + self.size
    }

    /// Return the descendant at `level` whose square contains `point`, or
    /// the deepest available block there if the tree is shallower. Returns
    /// `None` if `point` lies outside this block.
    pub fn locate(&self, point: Point, level: usize) -> Option<&Block> {
        if !self.contains(point) {
            return None;
        }
        if self.level == level || self.children.is_empty() {
            return Some(self);
        }
        self.children
            .iter()
            .find(|c| c.contains(point))
            .and_then(|c| c.locate(point, level))
    }

    /// Mutable twin of [`Block::locate`], used to apply a chosen move to a
    /// tree.
    pub fn locate_mut(&mut self, point: Point, level: usize) -> Option<&mut Block> {
        if !self.contains(point) {
            return None;
        }
        if self.level == level || self.children.is_empty() {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find(|c| c.contains(point))
            .and_then(|c| c.locate_mut(point, level))
    }

    /// Reassign each child to its quadrant position after a reorder, and
    /// repair every descendant position below it.
    fn update_child_positions(&mut self) {
        let (x, y) = self.position;
        let offsets = self.quadrant_offsets();
        for (child, (dx, dy)) in self.children.iter_mut().zip(offsets) {
            child.position = (x + dx, y + dy);
            child.update_child_positions();
        }
    }
}

/// Generate a random playable board: a root block of the given size, then
/// random recursive subdivision. A leaf at `level` is smashed with
/// probability `exp(-SMASH_RATE * level)`, so the root always subdivides and
/// deeper regions thin out.
///
/// Precondition (checked in debug builds): `size` is positive and divisible
/// by `2^max_depth`.
pub fn generate_board(max_depth: usize, size: usize, rng: &mut fastrand::Rng) -> Block {
    debug_assert!(size > 0, "board size must be positive");
    debug_assert!(
        size % (1 << max_depth) == 0,
        "board size must be divisible by 2^max_depth for integer unit cells"
    );
    let mut root = Block::leaf((0, 0), size, 0, max_depth, Colour::random(rng));
    subdivide_randomly(&mut root, rng);
    root
}

fn subdivide_randomly(block: &mut Block, rng: &mut fastrand::Rng) {
    if block.smashable() && rng.f64() < (-SMASH_RATE * block.level as f64).exp() {
        block.smash(rng);
        for child in &mut block.children {
            subdivide_randomly(child, rng);
        }
    }
}
