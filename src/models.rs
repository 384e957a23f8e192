//! Frontend Models
//!
//! Plain data produced by the feature logic and consumed by the views.

use serde::{Deserialize, Serialize};

/// Half-open range of seconds `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecondsRange {
    pub start: f64,
    pub end: f64,
}

impl SecondsRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start >= 0.0 && self.start <= self.end
    }

    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        if self.start == self.end {
            return value == self.start;
        }
        value >= self.start && value < self.end
    }
}

/// Parameters for one batch of decorative particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSpec {
    pub count: usize,
    pub delay_secs: SecondsRange,
    pub duration_secs: SecondsRange,
}

impl ParticleSpec {
    pub const HEARTS: ParticleSpec = ParticleSpec {
        count: 15,
        delay_secs: SecondsRange::new(0.0, 5.0),
        duration_secs: SecondsRange::new(3.0, 7.0),
    };

    pub const SPARKLES: ParticleSpec = ParticleSpec {
        count: 30,
        delay_secs: SecondsRange::new(0.0, 5.0),
        duration_secs: SecondsRange::new(2.0, 5.0),
    };

    pub fn is_valid(&self) -> bool {
        self.delay_secs.is_valid() && self.duration_secs.is_valid()
    }
}

/// A floating heart or sparkle. Coordinates are percentages of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Particle {
    /// Inline style consumed by the stylesheet animations
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left, self.top, self.delay, self.duration
        )
    }
}

/// A mini-game target position (percentages)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

impl Placement {
    pub fn style(&self) -> String {
        format!("left: {}%; top: {}%;", self.left, self.top)
    }
}
