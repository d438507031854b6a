//! Brickfall - a deterministic Breakout-style simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Constructor-time game configuration and validation
//!
//! Rendering, raw input polling, and audio are external collaborators: they
//! feed a paddle target x and a start signal in, and consume a per-tick
//! [`sim::Snapshot`] out. Nothing in this crate touches a platform API.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 350.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults - width is derived as arena width / 4
    pub const PADDLE_WIDTH_DIVISOR: f32 = 4.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Paddle centerline height above the arena's bottom edge
    pub const PADDLE_Y_OFFSET: f32 = 80.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Fixed launch impulse direction, scaled by `LAUNCH_SPEED`
    pub const LAUNCH_IMPULSE: (f32, f32) = (3.0, 5.0);
    /// Launch speed scale (units/sec per impulse component)
    pub const LAUNCH_SPEED: f32 = 40.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Horizontal center-to-center spacing between bricks in a row
    pub const BRICK_SPACING_X: f32 = 55.0;
    /// Vertical center-to-center spacing between rows
    pub const BRICK_SPACING_Y: f32 = 25.0;
    /// First row's distance below the arena's top edge
    pub const BRICK_TOP_OFFSET: f32 = 65.0;
    /// Number of brick rows
    pub const BRICK_ROWS: u32 = 3;

    /// Lose zone thickness along the arena's bottom edge
    pub const LOSE_ZONE_HEIGHT: f32 = 20.0;

    /// Lives at the start of a fresh game
    pub const INITIAL_LIVES: u32 = 3;
}
