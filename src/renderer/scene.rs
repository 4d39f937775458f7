//! Frame display list
//!
//! Turns a [`GameState`] into backend-neutral draw commands. The canvas
//! backend replays them; tests inspect them directly.

use glam::Vec2;

use crate::consts::{NET_DASH_HEIGHT, NET_DASH_SPACING, NET_DASH_WIDTH};
use crate::sim::{GameState, Paddle, Side};

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const PLAYER: &str = "#4CAF50";
    pub const AI: &str = "#F44336";
    pub const BALL: &str = "#fff";
    pub const NET: &str = "#fff";
    pub const SCORE: &str = "#fff";
}

/// Score label font
pub const SCORE_FONT: &str = "bold 36px Arial";
/// Baseline of the score labels
pub const SCORE_Y: f32 = 48.0;

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear { width: f32, height: f32 },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &'static str,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    /// Centre-aligned text
    Text {
        text: String,
        x: f32,
        y: f32,
        font: &'static str,
        color: &'static str,
    },
}

pub fn paddle_color(side: Side) -> &'static str {
    match side {
        Side::Player => colors::PLAYER,
        Side::Ai => colors::AI,
    }
}

fn paddle_rect(paddle: &Paddle, side: Side) -> DrawCommand {
    DrawCommand::FillRect {
        x: paddle.x,
        y: paddle.y,
        width: paddle.width,
        height: paddle.height,
        color: paddle_color(side),
    }
}

/// Build the draw commands for one frame, back to front
pub fn build_frame(state: &GameState) -> Vec<DrawCommand> {
    let field = &state.field;
    let mut commands = Vec::with_capacity(8 + (field.height / NET_DASH_SPACING) as usize);

    commands.push(DrawCommand::Clear {
        width: field.width,
        height: field.height,
    });

    // Net
    let mut y = 0.0;
    while y < field.height {
        commands.push(DrawCommand::FillRect {
            x: field.width / 2.0 - NET_DASH_WIDTH / 2.0,
            y,
            width: NET_DASH_WIDTH,
            height: NET_DASH_HEIGHT,
            color: colors::NET,
        });
        y += NET_DASH_SPACING;
    }

    commands.push(paddle_rect(&state.player, Side::Player));
    commands.push(paddle_rect(&state.ai, Side::Ai));

    commands.push(DrawCommand::FillCircle {
        center: state.ball.pos,
        radius: state.ball.radius(),
        color: colors::BALL,
    });

    let (player_score, ai_score) = state.scores();
    for (score, x) in [
        (player_score, field.width / 4.0),
        (ai_score, 3.0 * field.width / 4.0),
    ] {
        commands.push(DrawCommand::Text {
            text: score.to_string(),
            x,
            y: SCORE_Y,
            font: SCORE_FONT,
            color: colors::SCORE,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net_dashes(commands: &[DrawCommand]) -> Vec<(f32, f32)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { x, y, color, .. } if *color == colors::NET => {
                    Some((*x, *y))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let state = GameState::default();
        let commands = build_frame(&state);
        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            }
        );
    }

    #[test]
    fn test_net_dash_every_24px() {
        let state = GameState::default();
        let dashes = net_dashes(&build_frame(&state));

        // 0, 24, ..., 576
        assert_eq!(dashes.len(), 25);
        assert_eq!(dashes[0], (398.0, 0.0));
        assert_eq!(dashes[1], (398.0, 24.0));
        assert_eq!(dashes.last(), Some(&(398.0, 576.0)));
    }

    #[test]
    fn test_paddles_and_ball() {
        let state = GameState::default();
        let commands = build_frame(&state);

        assert!(commands.contains(&DrawCommand::FillRect {
            x: 16.0,
            y: 260.0,
            width: 12.0,
            height: 80.0,
            color: colors::PLAYER,
        }));
        assert!(commands.contains(&DrawCommand::FillRect {
            x: 772.0,
            y: 260.0,
            width: 12.0,
            height: 80.0,
            color: colors::AI,
        }));
        assert!(commands.contains(&DrawCommand::FillCircle {
            center: Vec2::new(400.0, 300.0),
            radius: 7.0,
            color: colors::BALL,
        }));
    }

    #[test]
    fn test_score_labels() {
        let mut state = GameState::default();
        state.player.score = 3;
        state.ai.score = 11;

        let labels: Vec<_> = build_frame(&state)
            .into_iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, y, font, .. } => Some((text, x, y, font)),
                _ => None,
            })
            .collect();

        assert_eq!(
            labels,
            vec![
                ("3".to_string(), 200.0, 48.0, SCORE_FONT),
                ("11".to_string(), 600.0, 48.0, SCORE_FONT),
            ]
        );
    }
}
