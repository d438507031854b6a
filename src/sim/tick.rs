//! Fixed timestep simulation tick
//!
//! The driver is a pure sequencer: apply input, integrate the ball, run the
//! collision engine, feed the contacts to the round state machine. All
//! game-specific decisions live in the contact application below.

use super::collision::collide_ball;
use super::state::{BodyKind, Contact, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
///
/// The input collaborator reduces raw device events to these before the tick;
/// they are sampled once and applied before physics integration.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Target paddle center x (from mouse/touch position)
    pub paddle_target: Option<f32>,
    /// Start input (tap/click/space): launches the ball, or begins a fresh
    /// game from a terminal phase
    pub start: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // Input before physics; terminal phases freeze the paddle
    if !state.phase.is_terminal()
        && let Some(x) = input.paddle_target
    {
        state.set_paddle_target(x);
    }

    match state.phase {
        GamePhase::WaitingToStart => {
            if input.start {
                state.apply_impulse();
                state.phase = GamePhase::Playing;
                log::info!("round started");
            }
        }

        GamePhase::Playing => step_playing(state, dt),

        GamePhase::RoundLost => {
            // Automatic respawn, no input required: transient bodies (ball,
            // bricks) are rebuilt, lives persist, score starts over
            state.spawn_bricks();
            state.spawn_ball();
            state.score = 0;
            state.apply_impulse();
            state.phase = GamePhase::Playing;
            log::info!("round reset, {} lives remaining", state.lives);
        }

        GamePhase::GameWon | GamePhase::GameLost => {
            if input.start {
                start_fresh_game(state);
            }
        }
    }
}

/// Integrate the ball, collide it, and apply the resulting contacts
fn step_playing(state: &mut GameState, dt: f32) {
    let Some(mut ball) = state.ball else {
        return;
    };

    ball.pos += ball.vel * dt;
    let contacts = collide_ball(
        &mut ball,
        &state.config,
        &state.paddle.rect,
        &state.bricks,
        &state.lose_zone,
    );
    state.ball = Some(ball);

    apply_contacts(state, &contacts);
}

/// Round state machine: consume this tick's contacts in order.
///
/// Walls and the paddle are purely physical. Every brick contact is applied
/// independently - two bricks struck in one tick each take a hit and each
/// score, no event is dropped.
fn apply_contacts(state: &mut GameState, contacts: &[Contact]) {
    for contact in contacts {
        match contact.body {
            BodyKind::Brick(id) => hit_brick(state, id),
            BodyKind::LoseZone => lose_ball(state),
            BodyKind::Ball | BodyKind::Paddle | BodyKind::Wall(_) => {}
        }
    }
}

/// Advance the struck brick's tier; remove it past the last tier.
///
/// A contact naming a brick already removed earlier this tick is a no-op.
fn hit_brick(state: &mut GameState, id: u32) {
    let Some(idx) = state.bricks.iter().position(|b| b.id == id) else {
        return;
    };

    // Every brick hit scores, regardless of tier
    state.score += 1;

    match state.bricks[idx].tier.degraded() {
        Some(next) => state.bricks[idx].tier = next,
        None => {
            state.bricks.remove(idx);
            state.bricks_destroyed += 1;
            debug_assert!(state.bricks_destroyed <= state.total_bricks);

            if state.bricks_destroyed == state.total_bricks {
                // Immediate, even mid-tick
                state.phase = GamePhase::GameWon;
                log::info!(
                    "all {} bricks destroyed - won with score {}",
                    state.total_bricks,
                    state.score
                );
            }
        }
    }
}

/// Lose-zone contact: terminal for the ball, costs a life
fn lose_ball(state: &mut GameState) {
    if state.ball.take().is_none() {
        return;
    }

    debug_assert!(state.lives > 0);
    state.lives -= 1;

    if state.lives == 0 {
        state.phase = GamePhase::GameLost;
        log::info!("out of lives - game over");
    } else {
        state.phase = GamePhase::RoundLost;
        log::info!("ball lost, {} lives remaining", state.lives);
    }
}

/// Fresh game from a terminal phase: everything resets, including lives
fn start_fresh_game(state: &mut GameState) {
    state.lives = state.config.initial_lives;
    state.score = 0;
    state.spawn_bricks();
    state.spawn_ball();
    state.apply_impulse();
    state.phase = GamePhase::Playing;
    log::info!("fresh game started with {} lives", state.lives);
}
