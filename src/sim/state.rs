//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which paddle an event or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the pointer
    Player,
    /// Right paddle, driven by the tracker
    Ai,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Ai => "ai",
        }
    }
}

/// Things that happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball hit the top or bottom edge
    WallBounce,
    /// Ball deflected off a paddle at the given angle (radians)
    PaddleHit { side: Side, angle: f32 },
    /// `side` won the point
    Scored { side: Side },
}

/// The rectangular play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

/// An axis-aligned paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, fixed for the session
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// Create a vertically centred paddle for the given side of the field
    pub fn new(side: Side, field: &Field) -> Self {
        let x = match side {
            Side::Player => PADDLE_MARGIN,
            Side::Ai => field.width - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            x,
            y: field.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            score: 0,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle fully inside the field
    pub fn clamp_to(&mut self, field: &Field) {
        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.y + self.height > field.height {
            self.y = field.height - self.height;
        }
    }

    /// Centre the paddle on a pointer position (top-relative), then clamp
    pub fn follow_pointer(&mut self, pointer_y: f32, field: &Field) {
        self.y = pointer_y - self.height / 2.0;
        self.clamp_to(field);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    /// Diameter
    pub size: f32,
    /// Velocity magnitude restored after every paddle bounce
    pub speed: f32,
}

impl Ball {
    /// Ball at the field centre heading down and to the right
    pub fn new(field: &Field) -> Self {
        Self {
            pos: field.center(),
            vel: Vec2::splat(BALL_BASE_SPEED),
            size: BALL_SIZE,
            speed: BALL_BASE_SPEED,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius()
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    /// Left, pointer-driven paddle
    pub player: Paddle,
    /// Right, tracker-driven paddle
    pub ai: Paddle,
    pub ball: Ball,
    /// AI tracking factor
    pub ai_smoothing: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session on the given field
    pub fn new(field: Field) -> Self {
        Self {
            player: Paddle::new(Side::Player, &field),
            ai: Paddle::new(Side::Ai, &field),
            ball: Ball::new(&field),
            field,
            ai_smoothing: AI_SMOOTHING,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn with_ai_smoothing(mut self, ai_smoothing: f32) -> Self {
        self.ai_smoothing = ai_smoothing;
        self
    }

    /// Map a pointer position onto the player paddle
    pub fn apply_pointer(&mut self, pointer_y: f32) {
        self.player.follow_pointer(pointer_y, &self.field);
    }

    /// (player, ai)
    pub fn scores(&self) -> (u32, u32) {
        (self.player.score, self.ai.score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Field::default())
    }
}
