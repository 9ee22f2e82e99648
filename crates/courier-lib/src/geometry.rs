//! Geometry and cost model for the courier's square field.
//!
//! All costs are measured in seconds. Travel converts Euclidean distance to
//! time at the courier's fixed speed; the per-waypoint hop bounds measure the
//! distance to the nearest and farthest corner of the field and anchor the
//! pruning rule in [`crate::frontier::Frontier`].

use std::fmt;

use serde::Serialize;

/// A single stop offered on the courier's itinerary.
///
/// Coordinates are integers within the field. `penalty` is the cost in
/// seconds charged when the courier rides past this waypoint without
/// stopping; stopping avoids the penalty but costs the fixed delay plus the
/// detour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Waypoint {
    pub x: u32,
    pub y: u32,
    pub penalty: u32,
}

impl Waypoint {
    pub const fn new(x: u32, y: u32, penalty: u32) -> Self {
        Self { x, y, penalty }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) penalty={}", self.x, self.y, self.penalty)
    }
}

/// Field dimensions and cost constants for one courier run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    /// Edge length of the square field in metres.
    pub edge: u32,
    /// Courier speed in metres per second.
    pub speed: f64,
    /// Stop time in seconds charged for every waypoint the courier visits.
    pub delay: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            edge: 100,
            speed: 2.0,
            delay: 10.0,
        }
    }
}

impl CostModel {
    /// Corner the courier departs from.
    pub fn origin(&self) -> Waypoint {
        Waypoint::new(0, 0, 0)
    }

    /// Corner the courier must reach.
    pub fn terminus(&self) -> Waypoint {
        Waypoint::new(self.edge, self.edge, 0)
    }

    /// Whether a waypoint lies within the field.
    pub fn contains(&self, waypoint: Waypoint) -> bool {
        waypoint.x <= self.edge && waypoint.y <= self.edge
    }

    /// Travel time in seconds between two points of the field.
    pub fn travel_time(&self, from: Waypoint, to: Waypoint) -> f64 {
        let dx = f64::from(from.x) - f64::from(to.x);
        let dy = f64::from(from.y) - f64::from(to.y);
        debug_assert!(dx.abs() <= f64::from(self.edge));
        debug_assert!(dy.abs() <= f64::from(self.edge));
        let time = (dx * dx + dy * dy).sqrt() / self.speed;
        debug_assert!(!time.is_nan());
        time
    }

    /// Time from `waypoint` to the nearest corner of the field.
    ///
    /// Every route ends at a corner, so this lower-bounds the travel still
    /// ahead of a courier stopped at `waypoint`. The bound reaches zero on
    /// the boundary, which keeps it valid even when malformed input repeats
    /// a coordinate.
    pub fn best_hop_time(&self, waypoint: Waypoint) -> f64 {
        self.corner_time(
            waypoint.x.min(self.edge - waypoint.x),
            waypoint.y.min(self.edge - waypoint.y),
        )
    }

    /// Time from `waypoint` to the farthest corner of the field, an upper
    /// bound on finishing the route directly from `waypoint`.
    pub fn worst_hop_time(&self, waypoint: Waypoint) -> f64 {
        self.corner_time(
            waypoint.x.max(self.edge - waypoint.x),
            waypoint.y.max(self.edge - waypoint.y),
        )
    }

    fn corner_time(&self, dx: u32, dy: u32) -> f64 {
        let dx = f64::from(dx);
        let dy = f64::from(dy);
        (dx * dx + dy * dy).sqrt() / self.speed
    }
}
