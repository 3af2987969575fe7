//! Entities of the pokemario world. Positions are canvas pixels with the
//! origin at the top-left; velocities are pixels per second.

use super::world::TILE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Standing,
    Walking,
    Jumping,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub on_ground: bool,
    pub facing_right: bool,
    pub state: PlayerState,
    /// Accumulated walk time driving the two-frame walk cycle.
    pub walk_clock_ms: f64,
    pub walk_frame: u8,
    /// Grace period after a respawn, in ms; contact damage is ignored
    /// while positive.
    pub invuln_ms: f64,
}

impl Player {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            on_ground: true,
            facing_right: true,
            state: PlayerState::Standing,
            walk_clock_ms: 0.0,
            walk_frame: 0,
            invuln_ms: 0.0,
        }
    }
}

/// Goomba-style walker. Patrols between `min_x` and `max_x` (sprite
/// origin bounds), reverses at either end, and is squished when stomped
/// from above.
#[derive(Clone, Debug, PartialEq)]
pub struct Critter {
    pub x: f64,
    pub y: f64,
    pub min_x: f64,
    pub max_x: f64,
    pub moving_right: bool,
    pub alive: bool,
    /// Remaining time the squished corpse stays visible, in ms.
    pub squish_timer_ms: f64,
}

impl Critter {
    /// Spawns a critter patrolling the top of a platform strip.
    pub fn patrolling(min_x: f64, max_x: f64, platform_top: f64) -> Self {
        Self {
            x: min_x,
            y: platform_top - TILE,
            min_x,
            max_x,
            moving_right: true,
            alive: true,
            squish_timer_ms: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub x: f64,
    pub y: f64,
    pub collected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels; entities stand at `y - TILE`.
    pub y: f64,
    pub width_tiles: u32,
    pub is_ground: bool,
}

impl Platform {
    pub fn width_px(&self) -> f64 {
        self.width_tiles as f64 * TILE
    }
}
