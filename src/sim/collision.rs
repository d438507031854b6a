//! Collision detection and response
//!
//! Circle-vs-rectangle tests for the paddle, bricks, and lose zone, plus the
//! arena's four edges treated as implicit infinite-mass reflectors. All
//! collisions are perfectly elastic: reflection conserves speed exactly.
//!
//! Every overlap in a tick is reported as a distinct [`Contact`], but only
//! one physical response (the deepest penetration) is applied to the ball,
//! so simultaneous hits never fight over its velocity.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Ball, BodyKind, Brick, Contact, WallSide};
use crate::config::GameConfig;

/// Result of a single circle-vs-rect check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal pointing toward the ball center (axis-aligned)
    pub normal: Vec2,
    /// Penetration depth along the normal (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check collision between the ball and an axis-aligned rect.
///
/// Overlap is tested exactly via the closest point on the rect; the response
/// normal is resolved to the axis with the smaller penetration depth
/// (tie-break toward x), which is what makes brick hits feel flat-sided.
/// Exactly-zero overlap (grazing) is a miss.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> CollisionResult {
    if !rect.overlaps_circle(ball_pos, ball_radius) {
        return CollisionResult::miss();
    }

    let d = ball_pos - rect.center;
    let overlap_x = rect.half.x + ball_radius - d.x.abs();
    let overlap_y = rect.half.y + ball_radius - d.y.abs();

    if overlap_x <= overlap_y {
        CollisionResult {
            hit: true,
            normal: Vec2::new(d.x.signum(), 0.0),
            penetration: overlap_x,
        }
    } else {
        CollisionResult {
            hit: true,
            normal: Vec2::new(0.0, d.y.signum()),
            penetration: overlap_y,
        }
    }
}

/// Reflect velocity off a surface
///
/// Standard elastic reflection: v' = v - 2(v·n)n. Restitution 1 - the speed
/// magnitude is unchanged.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Run one tick of collision detection and response for the ball.
///
/// Returns every contact in a stable order (walls, paddle, bricks by id,
/// lose zone). The arena edges each invert the penetrating velocity
/// component and clamp the ball back inside. Among the rect obstacles, only
/// the deepest penetration gets a physical response; the lose zone never
/// does, since contact there is terminal for the ball.
pub fn collide_ball(
    ball: &mut Ball,
    config: &GameConfig,
    paddle: &Rect,
    bricks: &[Brick],
    lose_zone: &Rect,
) -> Vec<Contact> {
    let mut contacts = Vec::new();
    let r = ball.radius;

    // Arena edges: infinite-mass reflectors
    let left_pen = (config.min_x() + r) - ball.pos.x;
    if left_pen > 0.0 {
        contacts.push(Contact {
            body: BodyKind::Wall(WallSide::Left),
            normal: Vec2::X,
            penetration: left_pen,
        });
        ball.pos.x = config.min_x() + r;
        if ball.vel.x < 0.0 {
            ball.vel.x = -ball.vel.x;
        }
    }
    let right_pen = ball.pos.x - (config.max_x() - r);
    if right_pen > 0.0 {
        contacts.push(Contact {
            body: BodyKind::Wall(WallSide::Right),
            normal: Vec2::NEG_X,
            penetration: right_pen,
        });
        ball.pos.x = config.max_x() - r;
        if ball.vel.x > 0.0 {
            ball.vel.x = -ball.vel.x;
        }
    }
    let top_pen = ball.pos.y - (config.max_y() - r);
    if top_pen > 0.0 {
        contacts.push(Contact {
            body: BodyKind::Wall(WallSide::Top),
            normal: Vec2::NEG_Y,
            penetration: top_pen,
        });
        ball.pos.y = config.max_y() - r;
        if ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
        }
    }
    let bottom_pen = (config.min_y() + r) - ball.pos.y;
    if bottom_pen > 0.0 {
        contacts.push(Contact {
            body: BodyKind::Wall(WallSide::Bottom),
            normal: Vec2::Y,
            penetration: bottom_pen,
        });
        ball.pos.y = config.min_y() + r;
        if ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
        }
    }

    // Rect obstacles: report every overlap, respond to the deepest
    let mut deepest: Option<Contact> = None;
    let mut consider = |contact: Contact, deepest: &mut Option<Contact>| {
        if deepest.map(|d| contact.penetration > d.penetration).unwrap_or(true) {
            *deepest = Some(contact);
        }
    };

    let result = ball_rect_collision(ball.pos, r, paddle);
    if result.hit {
        let contact = Contact {
            body: BodyKind::Paddle,
            normal: result.normal,
            penetration: result.penetration,
        };
        contacts.push(contact);
        consider(contact, &mut deepest);
    }

    for brick in bricks {
        let result = ball_rect_collision(ball.pos, r, &brick.rect);
        if result.hit {
            let contact = Contact {
                body: BodyKind::Brick(brick.id),
                normal: result.normal,
                penetration: result.penetration,
            };
            contacts.push(contact);
            consider(contact, &mut deepest);
        }
    }

    let result = ball_rect_collision(ball.pos, r, lose_zone);
    if result.hit {
        // Terminal for the ball: reported, never responded to
        contacts.push(Contact {
            body: BodyKind::LoseZone,
            normal: result.normal,
            penetration: result.penetration,
        });
    }

    if let Some(contact) = deepest {
        // Only reflect if moving toward the surface, then push the ball out
        // so the same obstacle cannot be double-counted next tick
        if ball.vel.dot(contact.normal) < 0.0 {
            ball.vel = reflect_velocity(ball.vel, contact.normal);
        }
        ball.pos += contact.normal * contact.penetration;
    }

    contacts
}
