//! Per-frame simulation tick
//!
//! Advances the game by exactly one frame: ball, then AI paddle.

use glam::Vec2;
use rand::Rng;

use super::ai::track_ball;
use super::collision::{bounce_off_paddle, overlaps_paddle};
use super::state::{Ball, Field, GameEvent, GameState, Side};
use crate::consts::BALL_BASE_SPEED;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position, relative to the field top
    pub pointer_y: Option<f32>,
    /// Let the tracker drive the player paddle too (attract/headless mode)
    pub autopilot: bool,
}

/// Advance the game state by one frame
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) {
    state.events.clear();
    state.time_ticks += 1;

    if let Some(pointer_y) = input.pointer_y {
        state.apply_pointer(pointer_y);
    }

    let events = update_ball(state, rng);
    state.events = events;

    track_ball(
        &mut state.ai,
        &state.ball,
        &state.field,
        state.ai_smoothing,
    );

    if input.autopilot {
        track_ball(
            &mut state.player,
            &state.ball,
            &state.field,
            state.ai_smoothing,
        );
    }
}

/// Move the ball, resolve wall and paddle contacts, and award points
///
/// Checks run in a fixed order and later ones may override earlier ones:
/// walls, player paddle, AI paddle, then the scoring edges.
pub fn update_ball<R: Rng>(state: &mut GameState, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let field = state.field;
    let ball = &mut state.ball;

    ball.pos += ball.vel;

    // No positional correction: the ball may sit past the wall for a frame
    if ball.top() < 0.0 || ball.bottom() > field.height {
        ball.vel.y = -ball.vel.y;
        log::trace!("Wall bounce at y={:.1}", ball.pos.y);
        events.push(GameEvent::WallBounce);
    }

    for side in [Side::Player, Side::Ai] {
        let paddle = match side {
            Side::Player => &state.player,
            Side::Ai => &state.ai,
        };
        if overlaps_paddle(ball, paddle, side) {
            let angle = bounce_off_paddle(ball, paddle);
            log::debug!(
                "{} paddle hit, angle {:.1} deg",
                side.as_str(),
                angle.to_degrees()
            );
            events.push(GameEvent::PaddleHit { side, angle });
        }
    }

    if ball.left() < 0.0 {
        state.ai.score += 1;
        reset_ball(ball, &field, rng);
        log::info!("AI scores ({} - {})", state.player.score, state.ai.score);
        events.push(GameEvent::Scored { side: Side::Ai });
    }
    if ball.right() > field.width {
        state.player.score += 1;
        reset_ball(ball, &field, rng);
        log::info!("Player scores ({} - {})", state.player.score, state.ai.score);
        events.push(GameEvent::Scored { side: Side::Player });
    }

    events
}

/// Put the ball back at the centre with a fresh random heading
///
/// `dx` is a full `speed` either way and `dy` is a uniform fraction of
/// `speed`, so the served ball is faster than `speed` unless `dy` is zero.
pub fn reset_ball<R: Rng>(ball: &mut Ball, field: &Field, rng: &mut R) {
    ball.pos = field.center();
    ball.speed = BALL_BASE_SPEED;

    let dx = if rng.random_bool(0.5) {
        ball.speed
    } else {
        -ball.speed
    };
    let dy = rng.random_range(-1.0f32..=1.0) * ball.speed;
    ball.vel = Vec2::new(dx, dy);
}
