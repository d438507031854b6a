//! Constructor-time game configuration
//!
//! Everything geometric or rule-shaped is fixed here for the simulation's
//! lifetime. Validation happens once, at construction; steady-state ticking
//! is infallible.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration rejected at construction
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena {width}x{height} too small to fit a brick row")]
    ArenaTooSmall { width: f32, height: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositiveSize { name: &'static str, value: f32 },
    #[error("timestep must be positive, got {0}")]
    NonPositiveTimestep(f32),
    #[error("initial lives must be at least 1")]
    ZeroLives,
}

/// Fixed parameters for one simulation instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Arena width (world units)
    pub arena_width: f32,
    /// Arena height (world units)
    pub arena_height: f32,
    /// Ball radius
    pub ball_radius: f32,
    /// Paddle size; width defaults to arena_width / 4
    pub paddle_size: Vec2,
    /// Paddle centerline height above the arena's bottom edge
    pub paddle_y_offset: f32,
    /// Brick size
    pub brick_size: Vec2,
    /// Center-to-center brick spacing (x within a row, y between rows)
    pub brick_spacing: Vec2,
    /// First row's distance below the arena's top edge
    pub brick_top_offset: f32,
    /// Number of brick rows
    pub brick_rows: u32,
    /// Lose zone thickness along the bottom edge
    pub lose_zone_height: f32,
    /// Launch impulse direction; scaled by `launch_speed` on serve
    pub launch_impulse: Vec2,
    /// Launch speed scale
    pub launch_speed: f32,
    /// Lives at the start of a fresh game
    pub initial_lives: u32,
    /// Fixed simulation timestep (seconds)
    pub timestep: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_radius: BALL_RADIUS,
            paddle_size: Vec2::new(ARENA_WIDTH / PADDLE_WIDTH_DIVISOR, PADDLE_HEIGHT),
            paddle_y_offset: PADDLE_Y_OFFSET,
            brick_size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            brick_spacing: Vec2::new(BRICK_SPACING_X, BRICK_SPACING_Y),
            brick_top_offset: BRICK_TOP_OFFSET,
            brick_rows: BRICK_ROWS,
            lose_zone_height: LOSE_ZONE_HEIGHT,
            launch_impulse: Vec2::new(LAUNCH_IMPULSE.0, LAUNCH_IMPULSE.1),
            launch_speed: LAUNCH_SPEED,
            initial_lives: INITIAL_LIVES,
            timestep: SIM_DT,
        }
    }
}

impl GameConfig {
    /// Create a config for an arena of the given size, deriving the paddle
    /// width from the arena width
    pub fn for_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            paddle_size: Vec2::new(width / PADDLE_WIDTH_DIVISOR, PADDLE_HEIGHT),
            ..Self::default()
        }
    }

    /// Number of bricks that fit in one row
    pub fn bricks_per_row(&self) -> u32 {
        (self.arena_width / self.brick_spacing.x).floor() as u32
    }

    /// Validate; every failure here is fatal at construction
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_size.x),
            ("paddle_height", self.paddle_size.y),
            ("brick_width", self.brick_size.x),
            ("brick_height", self.brick_size.y),
            ("brick_spacing_x", self.brick_spacing.x),
            ("brick_spacing_y", self.brick_spacing.y),
            ("lose_zone_height", self.lose_zone_height),
            ("launch_speed", self.launch_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveSize { name, value });
            }
        }

        if self.timestep <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep(self.timestep));
        }

        if self.initial_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }

        // The layout generator needs at least one full brick slot, and the
        // rows must fit above the paddle
        if self.bricks_per_row() == 0
            || self.brick_top_offset + self.brick_rows as f32 * self.brick_spacing.y
                > self.arena_height - self.paddle_y_offset
        {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        Ok(())
    }

    /// Minimum arena x (arena is centered on the origin)
    #[inline]
    pub fn min_x(&self) -> f32 {
        -self.arena_width / 2.0
    }

    /// Maximum arena x
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.arena_width / 2.0
    }

    /// Minimum arena y (bottom edge)
    #[inline]
    pub fn min_y(&self) -> f32 {
        -self.arena_height / 2.0
    }

    /// Maximum arena y (top edge)
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.arena_height / 2.0
    }
}
