//! Blocky-Rust: the Blocky board game core.
//!
//! Blocky is played on a square board that is recursively subdivided into
//! quadrants, a quad-tree of coloured blocks. Players rearrange the tree
//! with a fixed set of structural moves and score it against a personal
//! goal.
//!
//! ## Modules
//!
//! - [`settings`] - Colour palette and default game parameters
//! - [`block`] - The board quad-tree and its structural operations
//! - [`grid`] - Flattening a tree into a uniform grid of unit cells
//! - [`goal`] - Perimeter and blob scoring strategies
//! - [`moves`] - Legal-move enumeration and move application
//! - [`player`] - Human, random, and smart players
//! - [`game`] - Headless game loop driving players over a shared board
//!
//! ## Example
//!
//! ```
//! use blocky_rust::block::generate_board;
//! use blocky_rust::goal::Goal;
//! use blocky_rust::moves::apply_move;
//! use blocky_rust::player::{InputEvent, Player};
//! use blocky_rust::settings::Colour;
//!
//! let mut rng = fastrand::Rng::with_seed(148);
//! let mut board = generate_board(3, 64, &mut rng);
//!
//! // A smart player proposes a move; the caller applies it.
//! let mut player = Player::smart(0, Goal::Blob(Colour::RealRed), 10);
//! player.process_event(InputEvent::Proceed);
//! if let Some(mv) = player.generate_move(&board, &mut rng) {
//!     apply_move(&mut board, &mv, &mut rng);
//! }
//! println!("score: {}", player.goal.score(&board));
//! ```

pub mod block;
pub mod game;
pub mod goal;
pub mod grid;
pub mod moves;
pub mod player;
pub mod settings;
