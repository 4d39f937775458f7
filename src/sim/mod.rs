//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, velocities in pixels per frame
//! - Randomness only through the injected RNG
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::track_ball;
pub use collision::{bounce_off_paddle, overlaps_paddle};
pub use state::{Ball, Field, GameEvent, GameState, Paddle, Side};
pub use tick::{TickInput, reset_ball, tick, update_ball};
