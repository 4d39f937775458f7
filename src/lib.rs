//! Canvas Pong - two paddles, one ball, one stubborn AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, paddle collisions, scoring, AI)
//! - `renderer`: Frame display list and the HTML canvas backend
//! - `session`: Frame-loop driver that owns the state and the RNG
//! - `settings`: Data-driven configuration

pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side of the field
    pub const PADDLE_MARGIN: f32 = 16.0;

    /// Ball diameter
    pub const BALL_SIZE: f32 = 14.0;
    /// Speed restored on every reset (pixels per frame)
    pub const BALL_BASE_SPEED: f32 = 5.0;

    /// Largest deflection off a paddle edge (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// AI tracking factor per frame (higher = stronger AI)
    pub const AI_SMOOTHING: f32 = 0.09;

    /// Default field when no canvas dictates one
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

    /// Net dashes
    pub const NET_DASH_WIDTH: f32 = 4.0;
    pub const NET_DASH_HEIGHT: f32 = 16.0;
    pub const NET_DASH_SPACING: f32 = 24.0;
}
