//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::quadrant::Quadrant;
use crate::consts::*;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first session starts
    Idle,
    /// Active gameplay
    Running,
    /// Session ended; state is frozen until reset
    GameOver,
}

/// Sweep direction of the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Sign applied to the per-tick angle step
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// State-change notifications for the rendering shell
///
/// The engine appends these as it mutates state; the shell drains them once
/// per frame. This replaces direct DOM/UI calls so the core has no
/// dependency on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted,
    TargetChanged { target: Quadrant },
    ScoreChanged { score: u32 },
    GameOver { final_score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG used for target selection
    pub rng: Pcg32,
    /// Cumulative hand rotation (degrees, unbounded; normalized only when
    /// classifying into a quadrant)
    pub angle: f32,
    /// Hand angle at the start of the current tick, for crossing detection
    pub previous_angle: f32,
    /// Sweep direction; reverses on every successful round
    pub direction: Direction,
    /// Degrees advanced per tick; never decreases within a session
    pub speed: f32,
    /// Sector the player must press inside
    pub target: Quadrant,
    /// Current phase
    pub phase: GamePhase,
    /// Successful rounds this session
    pub score: u32,
    /// Pending notifications, drained by the shell each frame
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state with the given seed, waiting for the first reset
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            angle: 0.0,
            previous_angle: 0.0,
            direction: Direction::Clockwise,
            speed: INITIAL_SPEED,
            target: Quadrant::Red,
            phase: GamePhase::Idle,
            score: 0,
            events: Vec::new(),
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at pending events without draining them
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}
