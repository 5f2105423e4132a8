//! Field model and game-state engine for Minesweeper.
//!
//! The crate owns everything which has rules in a game of Minesweeper: placing the mines, numbering the cells, opening and flagging them, and deciding
//! whether the game has been won or lost. Rendering, input, menus and sound are left to the frontend, which drives a [`Session`] (or a bare [`Field`]) and
//! redraws according to the outcomes it gets back.
//!
//! # Usage
//! ```
//! use minefield::{Difficulty, Session, GameStatus};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let mut session = Session::start_with_rng(&Difficulty::Easy.config(), &mut rng).unwrap();
//! // Flag every mine to win without opening anything.
//! let mines: Vec<_> = session.field().positions()
//!     .filter(|&p| session.field()[p].has_mine())
//!     .collect();
//! for mine in mines {
//!     session.flag_at(mine).unwrap();
//! }
//! assert_eq!(session.status(), GameStatus::Won);
//! ```
//!
//! # Feature gates
//! - `std` — enable a dependency on the hosted standard library (**enabled by default**)
//!
//!   Without this feature, the crate only depends on `core` and `alloc`, allowing it to run in a freestanding environment. The session clock and
//!   generation with the thread-local random number generator need it.
//!
//! - `generation` — enable random generation (**enabled by default**)
//!
//!   Enables the dependency on `rand`, used for generating random fields. Disable to remove said dependency if you'd like to use your own random field
//!   generator through [`Field::from_mines`].
//!
//! - `serialization` — enable support for field serialization (**enabled by default**, disable to speed up compilation)
//!
//!   Enables the dependency on `serde` and its derive macros, which allows one to serialize and deserialize a field, for example to send it to a separate
//!   rendering process. See the `serde` crate for more.

#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]
#![allow(clippy::must_use_candidate, clippy::missing_const_for_fn)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod cell;
pub use cell::*;
mod config;
pub use config::*;
mod error;
pub use error::*;
mod field;
pub use field::*;
pub mod iter;
pub use iter::*;
mod session;
pub use session::*;
