//! Quadrant geometry for the colored ring
//!
//! The ring is split into four fixed 90-degree sectors indexed 0-3. Sector i
//! spans [i*90, (i+1)*90) degrees after normalizing the angle into [0, 360).
//! Angles themselves are unbounded; they are only normalized here, at
//! classification time.

use serde::{Deserialize, Serialize};

use crate::consts::{QUADRANT_COUNT, QUADRANT_DEGREES};
use crate::normalize_degrees;

/// One of the four fixed sectors of the ring, named by its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Quadrant {
    /// All sectors, in index order
    pub const ALL: [Quadrant; QUADRANT_COUNT as usize] = [
        Quadrant::Red,
        Quadrant::Blue,
        Quadrant::Green,
        Quadrant::Yellow,
    ];

    /// Sector index in {0, 1, 2, 3}
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Quadrant::Red => 0,
            Quadrant::Blue => 1,
            Quadrant::Green => 2,
            Quadrant::Yellow => 3,
        }
    }

    /// Sector for an index (wraps modulo 4)
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % QUADRANT_COUNT) as usize]
    }

    /// Classify an angle (degrees, unbounded) into its sector
    pub fn from_angle(angle: f32) -> Self {
        Self::from_index((normalize_degrees(angle) / QUADRANT_DEGREES) as u8)
    }

    /// Start angle of this sector (degrees)
    #[inline]
    pub fn start_degrees(self) -> f32 {
        self.index() as f32 * QUADRANT_DEGREES
    }

    /// End angle of this sector (degrees, exclusive)
    #[inline]
    pub fn end_degrees(self) -> f32 {
        self.start_degrees() + QUADRANT_DEGREES
    }

    /// Check if an angle falls inside this sector
    pub fn contains_angle(self, angle: f32) -> bool {
        Quadrant::from_angle(angle) == self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::Red => "red",
            Quadrant::Blue => "blue",
            Quadrant::Green => "green",
            Quadrant::Yellow => "yellow",
        }
    }
}
