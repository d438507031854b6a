//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness anywhere
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, ball_rect_collision, collide_ball, reflect_velocity};
pub use layout::generate_bricks;
pub use rect::Rect;
pub use snapshot::{BrickView, Snapshot};
pub use state::{
    Ball, BodyKind, Brick, BrickTier, Contact, GamePhase, GameState, Paddle, WallSide,
};
pub use tick::{TickInput, tick};
