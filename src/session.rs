//! Frame-loop driver
//!
//! Owns the game state and the seeded RNG, and runs one frame at a time:
//! ball, AI, then render.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::{DrawCommand, build_frame};
use crate::settings::{Settings, SettingsError, check_field};
use crate::sim::{Field, GameState, TickInput, tick};

/// A running game
pub struct Session {
    pub state: GameState,
    rng: Pcg32,
    seed: u64,
}

impl Session {
    /// Start a session on `field`, seeding from the settings when they fix a seed
    pub fn new(settings: &Settings, field: Field, fallback_seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        check_field(&field)?;

        let seed = settings.seed.unwrap_or(fallback_seed);
        let state = GameState::new(field).with_ai_smoothing(settings.ai_smoothing);
        log::info!(
            "Session started on {}x{} field with seed {}",
            field.width,
            field.height,
            seed
        );

        Ok(Self {
            state,
            rng: Pcg32::seed_from_u64(seed),
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Forward a pointer move straight to the player paddle
    pub fn pointer_moved(&mut self, pointer_y: f32) {
        self.state.apply_pointer(pointer_y);
    }

    /// Advance one frame without drawing
    pub fn step(&mut self, input: &TickInput) {
        tick(&mut self.state, input, &mut self.rng);
    }

    /// Advance one frame and return what to draw
    pub fn frame(&mut self, input: &TickInput) -> Vec<DrawCommand> {
        self.step(input);
        build_frame(&self.state)
    }
}
