//! Axis-aligned rectangle geometry for bricks, paddle, and lose zone
//!
//! A rect is defined by its center and half-extents, which keeps the
//! closest-point and overlap math symmetric around the origin of the body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center position
    pub center: Vec2,
    /// Half width / half height
    pub half: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }

    /// Closest point on or inside the rect to the given point
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        (point - self.center).clamp(-self.half, self.half) + self.center
    }

    /// Distance from a point to the rect surface (0 inside)
    pub fn distance_to(&self, point: Vec2) -> f32 {
        (point - self.closest_point(point)).length()
    }

    /// Check if a circle overlaps the rect with strictly positive depth.
    /// Exact tangency (zero overlap) counts as a miss: a grazing ball ends
    /// the tick with exactly-zero depth and produces no contact.
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        self.distance_to(center) < radius
    }
}
