//! Reactive paddle controller
//!
//! Eases the paddle centre toward the ball each frame. No prediction.

use super::state::{Ball, Field, Paddle};

/// Move `paddle` a fraction `smoothing` of the way toward centring on the ball
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, field: &Field, smoothing: f32) {
    let target = ball.pos.y - paddle.height / 2.0;
    paddle.y += (target - paddle.y) * smoothing;
    paddle.clamp_to(field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::AI_SMOOTHING;
    use crate::sim::state::Side;
    use glam::Vec2;

    #[test]
    fn test_moves_fraction_of_gap() {
        let field = Field::default();
        let mut paddle = Paddle::new(Side::Ai, &field);
        let mut ball = Ball::new(&field);
        ball.pos = Vec2::new(400.0, 400.0);

        // target = 360, gap = 100
        track_ball(&mut paddle, &ball, &field, AI_SMOOTHING);
        assert!((paddle.y - 269.0).abs() < 1e-4);
    }

    #[test]
    fn test_stays_put_when_centred() {
        let field = Field::default();
        let mut paddle = Paddle::new(Side::Ai, &field);
        let ball = Ball::new(&field);

        track_ball(&mut paddle, &ball, &field, AI_SMOOTHING);
        assert_eq!(paddle.y, 260.0);
    }

    #[test]
    fn test_clamped_at_edges() {
        let field = Field::default();
        let mut paddle = Paddle::new(Side::Ai, &field);
        let mut ball = Ball::new(&field);

        ball.pos.y = -500.0;
        for _ in 0..200 {
            track_ball(&mut paddle, &ball, &field, AI_SMOOTHING);
        }
        assert_eq!(paddle.y, 0.0);

        ball.pos.y = 5000.0;
        for _ in 0..200 {
            track_ball(&mut paddle, &ball, &field, AI_SMOOTHING);
        }
        assert_eq!(paddle.y, field.height - paddle.height);
    }

    #[test]
    fn test_stronger_smoothing_closes_faster() {
        let field = Field::default();
        let mut ball = Ball::new(&field);
        ball.pos.y = 500.0;

        let mut weak = Paddle::new(Side::Ai, &field);
        let mut strong = Paddle::new(Side::Ai, &field);
        track_ball(&mut weak, &ball, &field, 0.05);
        track_ball(&mut strong, &ball, &field, 0.2);

        assert!(strong.y > weak.y);
    }
}
