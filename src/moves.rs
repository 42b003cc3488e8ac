//! The move vocabulary: legal-move enumeration and move application.
//!
//! A [`Move`] names an action and the target block by its position and
//! level, rather than borrowing into the tree. The game loop (or a trial
//! evaluation) re-locates the block with [`Block::locate_mut`] at apply
//! time, so a move generated against the authoritative board can be applied
//! to any structurally identical copy of it.

use crate::block::{Block, Point, RotateDirection, SwapDirection};
use crate::settings::Colour;

/// One of the structural actions a player can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Smash,
    Swap(SwapDirection),
    Rotate(RotateDirection),
    /// Paint the target unit cell with the player's goal colour.
    Paint(Colour),
    Combine,
    Pass,
}

/// An action aimed at the block at `position` / `level`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub action: Action,
    pub position: Point,
    pub level: usize,
}

impl Move {
    /// A move targeting `block`.
    pub fn new(action: Action, block: &Block) -> Move {
        Move {
            action,
            position: block.position,
            level: block.level,
        }
    }
}

/// Enumerate the legal moves on `block` for a player whose goal colour is
/// `colour`. Never mutates `block`.
///
/// `Pass` appears only as a fallback when no other move is legal, so the
/// result is never empty and contains `Pass` exactly when it has length 1.
pub fn valid_moves(block: &Block, colour: Colour) -> Vec<Move> {
    let mut moves = Vec::new();

    if block.smashable() {
        moves.push(Move::new(Action::Smash, block));
    }

    if !block.children.is_empty() {
        moves.push(Move::new(Action::Swap(SwapDirection::Horizontal), block));
        moves.push(Move::new(Action::Swap(SwapDirection::Vertical), block));
        moves.push(Move::new(Action::Rotate(RotateDirection::Clockwise), block));
        moves.push(Move::new(
            Action::Rotate(RotateDirection::CounterClockwise),
            block,
        ));
        // Combine is the one non-invertible move; only legal one level
        // above max depth, where every child is a unit cell.
        if block.level + 1 == block.max_depth {
            moves.push(Move::new(Action::Combine, block));
        }
    }

    if block.level == block.max_depth && block.colour.is_some_and(|c| c != colour) {
        moves.push(Move::new(Action::Paint(colour), block));
    }

    if moves.is_empty() {
        moves.push(Move::new(Action::Pass, block));
    }
    moves
}

/// Apply `mv` to the matching block in `board`. Returns `false` (leaving
/// the board untouched) when the target block no longer exists at that
/// position and level, or when the action is illegal there. `Pass` always
/// succeeds.
///
/// `rng` feeds the random colours of a smash.
pub fn apply_move(board: &mut Block, mv: &Move, rng: &mut fastrand::Rng) -> bool {
    if mv.action == Action::Pass {
        return true;
    }
    let Some(target) = board.locate_mut(mv.position, mv.level) else {
        return false;
    };
    if target.level != mv.level {
        return false;
    }
    match mv.action {
        Action::Smash => target.smash(rng),
        Action::Swap(direction) => target.swap(direction),
        Action::Rotate(direction) => target.rotate(direction),
        Action::Paint(colour) => target.paint(colour),
        Action::Combine => target.combine(),
        Action::Pass => true,
    }
}
