//! Per-tick renderable snapshot
//!
//! The one-way data the rendering collaborator needs: body positions, brick
//! tiers (its color lookup), score, lives, phase, and the round message.
//! Everything else stays private to the simulation.

use glam::Vec2;
use serde::Serialize;

use super::state::{BrickTier, GamePhase, GameState};

/// A brick as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrickView {
    pub pos: Vec2,
    /// Maps to the blue/orange/green degrading palette
    pub tier: BrickTier,
}

/// Snapshot of one tick, emitted for the rendering collaborator
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Ball center, absent between a lost ball and its respawn
    pub ball_pos: Option<Vec2>,
    /// Paddle center
    pub paddle_pos: Vec2,
    pub bricks: Vec<BrickView>,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    /// On-screen banner for the current phase
    pub round_message: &'static str,
}

impl GameState {
    /// Emit the snapshot for the rendering collaborator
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_pos: self.ball.map(|b| b.pos),
            paddle_pos: self.paddle.rect.center,
            bricks: self
                .bricks
                .iter()
                .map(|b| BrickView {
                    pos: b.rect.center,
                    tier: b.tier,
                })
                .collect(),
            score: self.score,
            lives: self.lives,
            phase: self.phase,
            round_message: match self.phase {
                GamePhase::WaitingToStart => "Tap to start",
                GamePhase::Playing => "",
                GamePhase::RoundLost => "Ball lost!",
                GamePhase::GameWon => "You win!",
                GamePhase::GameLost => "Game over",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.score = 4;
        state.lives = 2;

        let snap = state.snapshot();
        assert_eq!(snap.score, 4);
        assert_eq!(snap.lives, 2);
        assert_eq!(snap.phase, GamePhase::WaitingToStart);
        assert_eq!(snap.round_message, "Tap to start");
        assert_eq!(snap.bricks.len(), state.bricks.len());
        assert_eq!(snap.ball_pos, Some(Vec2::ZERO));
        assert_eq!(snap.paddle_pos, state.paddle.rect.center);
    }

    #[test]
    fn test_snapshot_ball_absent_when_lost() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.ball = None;
        state.phase = GamePhase::RoundLost;

        let snap = state.snapshot();
        assert_eq!(snap.ball_pos, None);
        assert_eq!(snap.round_message, "Ball lost!");
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(GameConfig::default()).unwrap();
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"Tier1\""));
        assert!(json.contains("\"WaitingToStart\""));
    }
}
