//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod quadrant;
pub mod state;
pub mod tick;

pub use quadrant::Quadrant;
pub use state::{Direction, GameEvent, GamePhase, GameState};
pub use tick::{activate, reset, tick};
