//! Game configuration: the colour palette and default board parameters.
//!
//! The palette is fixed at four colours. Goals target one palette colour
//! each, so a game can have at most `COLOUR_LIST.len()` players.

use std::fmt;

// =============================================================================
// Colour Palette
// =============================================================================

/// A colour from the game palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Colour {
    PacificPoint,
    RealRed,
    OldOlive,
    DaffodilDelight,
}

/// The fixed game palette. Block colours and goal target colours are always
/// drawn from this list.
pub const COLOUR_LIST: [Colour; 4] = [
    Colour::PacificPoint,
    Colour::RealRed,
    Colour::OldOlive,
    Colour::DaffodilDelight,
];

impl Colour {
    /// Human-readable colour name, used in goal descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Colour::PacificPoint => "Pacific Point",
            Colour::RealRed => "Real Red",
            Colour::OldOlive => "Old Olive",
            Colour::DaffodilDelight => "Daffodil Delight",
        }
    }

    /// RGB value for the rendering layer.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Colour::PacificPoint => (1, 128, 181),
            Colour::RealRed => (199, 44, 58),
            Colour::OldOlive => (138, 151, 71),
            Colour::DaffodilDelight => (255, 211, 92),
        }
    }

    /// Single-character glyph for text board dumps.
    pub fn glyph(self) -> char {
        match self {
            Colour::PacificPoint => 'P',
            Colour::RealRed => 'R',
            Colour::OldOlive => 'O',
            Colour::DaffodilDelight => 'D',
        }
    }

    /// Draw a uniformly random palette colour.
    pub fn random(rng: &mut fastrand::Rng) -> Colour {
        COLOUR_LIST[rng.usize(..COLOUR_LIST.len())]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Board Defaults
// =============================================================================

/// Default board side length in board units. Must be divisible by
/// `2^max_depth` so that unit cells have integer sizes.
pub const BOARD_SIZE: usize = 768;

/// Default maximum subdivision depth.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Decay rate for random board generation: a leaf at `level` is subdivided
/// with probability `exp(-SMASH_RATE * level)`.
pub const SMASH_RATE: f64 = 0.25;

// =============================================================================
// Game Defaults
// =============================================================================

/// Default number of rounds in a headless game.
pub const DEFAULT_TURNS: usize = 10;

/// Default smart player difficulty (number of candidate moves sampled).
pub const DEFAULT_DIFFICULTY: usize = 5;
