//! Collision detection and response for the paddles
//!
//! The ball is tested as its bounding square against each paddle rectangle.
//! Only the paddle's face edge is tested on the horizontal axis: the player
//! paddle catches the ball's left edge, the AI paddle its right edge.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Check whether the ball currently overlaps the paddle facing `side`
///
/// The leading horizontal edge of the ball must lie strictly inside the
/// paddle's horizontal span, and the vertical spans must overlap.
pub fn overlaps_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let edge = match side {
        Side::Player => ball.left(),
        Side::Ai => ball.right(),
    };

    edge > paddle.x
        && edge < paddle.x + paddle.width
        && ball.bottom() > paddle.y
        && ball.top() < paddle.y + paddle.height
}

/// Deflect the ball off a paddle and return the bounce angle (radians)
///
/// Contact at the paddle centre sends the ball straight back; contact at
/// either end deflects it by up to [`MAX_BOUNCE_ANGLE`]. The contact point is
/// not clamped, so a hit past the end of the paddle can exceed that slightly.
/// The velocity magnitude is reset to `ball.speed`.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> f32 {
    ball.vel.x = -ball.vel.x;

    let collide_point = (ball.pos.y - paddle.center_y()) / (paddle.height / 2.0);
    let angle = collide_point * MAX_BOUNCE_ANGLE;
    let direction = if ball.vel.x > 0.0 { 1.0 } else { -1.0 };

    ball.vel = Vec2::new(
        direction * ball.speed * angle.cos(),
        ball.speed * angle.sin(),
    );
    angle
}
