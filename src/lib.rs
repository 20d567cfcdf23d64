#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Movement, collision and food core for a grid based snake game.
//!
//! The crate owns the simulation only. A platform layer (window, GL context,
//! key callbacks) drives a [`session::GameSession`] once per frame with the
//! current monotonic time, forwards input as [`types::Input`] events and
//! implements [`types::CellRenderer`] to put cells on screen.
//!
//! ```
//! use snake_game_core::session::{GameSession, Phase, SessionConfig};
//! use snake_game_core::types::Input;
//!
//! let mut session = GameSession::seeded(SessionConfig::default(), 7).unwrap();
//! session.handle_input(Input::Confirm);
//! session.handle_input(Input::Confirm);
//! assert_eq!(session.update(0.0), Phase::Playing);
//! ```
//!
//! Between ticks the head's position is interpolated into a "front" so that
//! walls, body segments and food are detected on the frame the tick
//! completes rather than one tick later.

pub mod grid;
pub mod render;
pub mod session;
pub mod snake;
pub mod types;
