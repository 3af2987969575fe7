//! The pokemario game: a small side-scrolling platformer advanced by the
//! frame deltas the loop driver derives from the host's animation-frame
//! callbacks.

pub mod entities;
pub mod frame_loop;
pub mod physics;
pub mod render;
pub mod sprites;
pub mod world;

pub use frame_loop::FrameLoop;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::InputState;
use world::World;

/// Longest simulated slice per sub-step. A long host pause (backgrounded
/// tab) arrives as one large delta; integrating it in bounded slices
/// keeps the physics stable.
const MAX_STEP_MS: f64 = 50.0;
const MAX_STEPS_PER_TICK: usize = 8;

pub struct Game {
    world: World,
    pub input: InputState,
    elapsed_ms: f64,
}

/// Cheap copy of the HUD-relevant state, polled outside the frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameSnapshot {
    pub score: u32,
    pub lives: u32,
    pub time_survived_secs: u64,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            score: 0,
            lives: world::START_LIVES,
            time_survived_secs: 0,
            game_over: false,
        }
    }
}

impl Game {
    /// Builds a game sized to the mounted surface. The size is fixed for
    /// the lifetime of the view.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            world: World::generate(width, height),
            input: InputState::default(),
            elapsed_ms: 0.0,
        }
    }

    /// Advances the game by `delta_ms` of host time. Zero is a valid
    /// no-advance step; once the run is over the world is frozen and
    /// ticks no longer advance anything.
    pub fn tick(&mut self, delta_ms: f64) {
        if self.world.game_over || delta_ms <= 0.0 {
            return;
        }
        let mut remaining = delta_ms;
        let mut steps = 0;
        while remaining > 0.0 && steps < MAX_STEPS_PER_TICK {
            let slice = remaining.min(MAX_STEP_MS);
            physics::step(&mut self.world, &self.input, slice / 1000.0);
            self.elapsed_ms += slice;
            remaining -= slice;
            steps += 1;
        }
    }

    /// Draws the current state. Never mutates the game.
    pub fn render(&self, canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) {
        render::draw(ctx, &self.world, canvas.width() as f64, canvas.height() as f64);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.world.score,
            lives: self.world.lives,
            time_survived_secs: (self.elapsed_ms / 1000.0) as u64,
            game_over: self.world.game_over,
        }
    }
}
