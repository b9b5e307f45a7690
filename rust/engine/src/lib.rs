//! # setgame-engine: rules engine for the card game Set
//!
//! Pure state and transition logic: card universe, dealing, selection and match
//! evaluation, scoring and hint discovery. Rendering, animation and input handling
//! belong to whatever presentation layer drives the engine.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card attributes, the 81-card universe and the Set predicate
//! - [`deck`] - Seeded random draws without replacement
//! - [`game`] - The game state machine and its mutation surface
//! - [`hints`] - Enumeration of every Set on the table
//! - [`rules`] - Game configuration and scoring
//! - [`snapshot`] - Read-only view handed to a presentation layer
//! - [`errors`] - Rejection reasons
//!
//! ## Quick Start
//!
//! ```rust
//! use setgame_engine::game::{Choice, SetGame};
//! use setgame_engine::rules::GameConfig;
//!
//! let mut game = SetGame::new(GameConfig::with_seed(42)).unwrap();
//!
//! while game.hint_count() == 0 && game.add_three_cards().is_ok() {}
//!
//! if let Some([i, j, k]) = game.next_hint() {
//!     game.choose_card(i).unwrap();
//!     game.choose_card(j).unwrap();
//!     let choice = game.choose_card(k).unwrap();
//!     assert!(matches!(choice, Choice::Evaluated(_)));
//! }
//! ```
//!
//! ## Deterministic Play
//!
//! Draws and shuffles come from a ChaCha20 stream, so a fixed seed replays a game exactly:
//!
//! ```rust
//! use setgame_engine::game::SetGame;
//! use setgame_engine::rules::GameConfig;
//!
//! let a = SetGame::new(GameConfig::with_seed(7)).unwrap();
//! let b = SetGame::new(GameConfig::with_seed(7)).unwrap();
//! assert_eq!(a.table(), b.table());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hints;
pub mod rules;
pub mod snapshot;
