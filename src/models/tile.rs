use serde::Serialize;

use crate::models::constants::ARC_TOTAL_DEGREES;

/// What the renderer receives after each refresh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileView {
    /// Calories logged, truncated to a whole number.
    pub count: i64,

    /// Fraction of the goal reached. Not clamped; exceeds 1.0 past the goal.
    pub percentage: f64,
}

impl TileView {
    pub fn new(count: i64, percentage: f64) -> Self {
        Self { count, percentage }
    }

    /// Sweep of the progress arc in degrees.
    #[inline]
    pub fn arc_degrees(&self) -> f64 {
        self.percentage * ARC_TOTAL_DEGREES
    }

    /// Whether the goal has been passed.
    #[inline]
    pub fn over_goal(&self) -> bool {
        self.percentage > 1.0
    }
}
