//! Game state and core simulation types
//!
//! All state that must be persisted for save/resume determinism lives here.
//! The whole round is one owned [`GameState`] aggregate; there are no ambient
//! singletons, and bodies are identified by a typed [`BodyKind`] rather than
//! string tags.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout;
use super::rect::Rect;
use crate::config::{ConfigError, GameConfig};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball idle at arena center, waiting for a start input
    WaitingToStart,
    /// Active gameplay
    Playing,
    /// A life was just lost; transient bodies respawn on the next tick
    RoundLost,
    /// All bricks destroyed - terminal until a start input
    GameWon,
    /// Out of lives - terminal until a start input
    GameLost,
}

impl GamePhase {
    /// Terminal phases freeze the paddle and ball until a fresh game starts
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameWon | GamePhase::GameLost)
    }
}

/// A brick's remaining-hit-points state, in degrading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BrickTier {
    /// Fresh (blue)
    Tier1,
    /// Hit once (orange)
    Tier2,
    /// Hit twice (green); one more hit removes the brick
    Tier3,
}

impl BrickTier {
    /// Next tier after a hit, or `None` when the brick is destroyed
    pub fn degraded(self) -> Option<Self> {
        match self {
            BrickTier::Tier1 => Some(BrickTier::Tier2),
            BrickTier::Tier2 => Some(BrickTier::Tier3),
            BrickTier::Tier3 => None,
        }
    }

    /// Initial tier for a spawn row (row 0 at the top)
    pub fn for_row(row: u32) -> Self {
        match row {
            0 => BrickTier::Tier1,
            1 => BrickTier::Tier2,
            _ => BrickTier::Tier3,
        }
    }
}

/// Which arena edge a wall contact happened on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Typed identity of a body involved in a contact
///
/// Closed set - contact resolution never compares names or strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Ball,
    Paddle,
    Brick(u32),
    Wall(WallSide),
    LoseZone,
}

/// A detected overlap between the ball and one obstacle in a given tick
///
/// Ephemeral - produced by the collision engine, consumed by the round state
/// machine, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// The struck body
    pub body: BodyKind,
    /// Surface normal pointing toward the ball center
    pub normal: Vec2,
    /// Overlap depth (strictly positive; zero-depth grazing is no contact)
    pub penetration: f32,
}

/// The ball - recreated fresh each round, never reused across rounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// The player's paddle
///
/// Static with respect to physics: collision forces never move it, only the
/// input target does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
    pub tier: BrickTier,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed configuration for this simulation's lifetime
    pub config: GameConfig,
    /// Current phase
    pub phase: GamePhase,
    /// Score for the current round (resets to 0 on every round reset)
    pub score: u32,
    /// Remaining lives (persist across in-game resets)
    pub lives: u32,
    /// The one active ball, absent between lose-zone contact and respawn
    pub ball: Option<Ball>,
    /// The one paddle
    pub paddle: Paddle,
    /// Active bricks (sorted by id for determinism)
    pub bricks: Vec<Brick>,
    /// The lose boundary along the arena bottom
    pub lose_zone: Rect,
    /// Bricks destroyed this round
    pub bricks_destroyed: u32,
    /// Bricks the round started with
    pub total_bricks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new simulation from a validated config
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = Self {
            phase: GamePhase::WaitingToStart,
            score: 0,
            lives: config.initial_lives,
            ball: None,
            paddle: Paddle {
                rect: Rect::new(Vec2::ZERO, config.paddle_size),
            },
            bricks: Vec::new(),
            lose_zone: Rect::new(Vec2::ZERO, Vec2::ZERO),
            bricks_destroyed: 0,
            total_bricks: 0,
            time_ticks: 0,
            next_id: 1,
            config,
        };

        state.spawn_paddle();
        state.spawn_lose_zone();
        state.spawn_bricks();
        state.spawn_ball();

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a fresh idle ball at the arena center, replacing any prior ball.
    /// The registry never holds more than one ball.
    pub fn spawn_ball(&mut self) {
        self.ball = Some(Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: self.config.ball_radius,
        });
    }

    /// Spawn the paddle at its fixed height, replacing any prior paddle
    pub fn spawn_paddle(&mut self) {
        let y = self.config.min_y() + self.config.paddle_y_offset;
        self.paddle = Paddle {
            rect: Rect::new(Vec2::new(0.0, y), self.config.paddle_size),
        };
    }

    /// Spawn the lose zone spanning the full arena width at the bottom margin
    pub fn spawn_lose_zone(&mut self) {
        let height = self.config.lose_zone_height;
        let center_y = self.config.min_y() + height / 2.0;
        self.lose_zone = Rect::new(
            Vec2::new(0.0, center_y),
            Vec2::new(self.config.arena_width, height),
        );
    }

    /// Generate the brick grid, replacing any existing bricks (never appends)
    /// and resetting the destruction counters
    pub fn spawn_bricks(&mut self) {
        self.bricks.clear();
        self.bricks_destroyed = 0;
        let bricks = layout::generate_bricks(&self.config, &mut self.next_id);
        self.total_bricks = bricks.len() as u32;
        self.bricks = bricks;
    }

    /// Move the paddle toward the input target x, clamped so the paddle body
    /// never exits the arena
    pub fn set_paddle_target(&mut self, x: f32) {
        let half_w = self.paddle.rect.half.x;
        let clamped = x.clamp(self.config.min_x() + half_w, self.config.max_x() - half_w);
        self.paddle.rect.center.x = clamped;
    }

    /// Launch the ball with the configured impulse. Velocity changes only
    /// here and in collision reflection - there is no gravity or damping.
    pub fn apply_impulse(&mut self) {
        if let Some(ball) = &mut self.ball {
            ball.vel = self.config.launch_impulse * self.config.launch_speed;
        }
    }

    /// Look up an active brick by id. Returns `None` for a brick removed
    /// earlier in the same tick; callers treat that as a no-op.
    pub fn brick_mut(&mut self, id: u32) -> Option<&mut Brick> {
        self.bricks.iter_mut().find(|b| b.id == id)
    }

    /// Serialize the complete state for save/resume
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a previously serialized state
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn test_new_state_waits_to_start() {
        let state = state();
        assert_eq!(state.phase, GamePhase::WaitingToStart);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        let ball = state.ball.unwrap();
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_spawn_ball_replaces_prior_ball() {
        let mut state = state();
        state.apply_impulse();
        assert!(state.ball.unwrap().vel.length() > 0.0);

        state.spawn_ball();
        // Fresh ball, not the impulsed one
        assert_eq!(state.ball.unwrap().vel, Vec2::ZERO);
    }

    #[test]
    fn test_spawn_bricks_is_idempotent_replace() {
        let mut state = state();
        let first: Vec<_> = state.bricks.iter().map(|b| (b.rect, b.tier)).collect();

        state.spawn_bricks();
        let second: Vec<_> = state.bricks.iter().map(|b| (b.rect, b.tier)).collect();

        assert_eq!(first, second);
        assert_eq!(state.total_bricks as usize, state.bricks.len());
        assert_eq!(state.bricks_destroyed, 0);
    }

    #[test]
    fn test_paddle_target_clamped_to_arena() {
        let mut state = state();
        let half_w = state.paddle.rect.half.x;

        state.set_paddle_target(10_000.0);
        assert_eq!(state.paddle.rect.center.x, state.config.max_x() - half_w);

        state.set_paddle_target(-10_000.0);
        assert_eq!(state.paddle.rect.center.x, state.config.min_x() + half_w);

        state.set_paddle_target(12.0);
        assert_eq!(state.paddle.rect.center.x, 12.0);
    }

    #[test]
    fn test_impulse_is_fixed_vector_times_speed() {
        let mut state = state();
        state.apply_impulse();
        let expected = Vec2::new(3.0, 5.0) * state.config.launch_speed;
        assert_eq!(state.ball.unwrap().vel, expected);
    }

    #[test]
    fn test_tier_sequence_is_monotonic() {
        let mut tier = BrickTier::Tier1;
        let mut seen = vec![tier];
        while let Some(next) = tier.degraded() {
            assert!(next > tier, "tier degradation must never reverse");
            tier = next;
            seen.push(tier);
        }
        assert_eq!(seen, [BrickTier::Tier1, BrickTier::Tier2, BrickTier::Tier3]);
    }

    #[test]
    fn test_state_json_round_trip() {
        let mut state = state();
        state.apply_impulse();
        state.score = 7;

        let json = state.to_json().unwrap();
        let restored = GameState::from_json(&json).unwrap();

        assert_eq!(restored.score, 7);
        assert_eq!(restored.ball, state.ball);
        assert_eq!(restored.bricks, state.bricks);
        assert_eq!(restored.phase, state.phase);
    }
}
