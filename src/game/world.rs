//! World construction. The layout is a pure function of the mounted
//! surface size so a given canvas always produces the same level.

use super::entities::{Coin, Critter, Platform, Player};
use super::sprites::{SCALE, SPRITE_PX};

/// Entity and platform tile edge length in canvas pixels.
pub const TILE: f64 = SPRITE_PX as f64 * SCALE;

pub const START_LIVES: u32 = 3;

/// Floating ledges as (x fraction of width, height above the bottom,
/// width in tiles). Clamped into the surface on narrow canvases.
const LEDGES: [(f64, f64, u32); 4] = [
    (0.15, 120.0, 4),
    (0.45, 180.0, 3),
    (0.70, 120.0, 4),
    (0.88, 220.0, 3),
];

#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub width: f64,
    pub height: f64,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub critters: Vec<Critter>,
    pub player: Player,
    pub spawn_x: f64,
    pub spawn_y: f64,
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
    /// Accumulated simulated time toward the next critter spawn, in ms.
    pub spawn_clock_ms: f64,
    /// Rotates spawn platforms so cadence stays deterministic.
    pub spawn_seq: usize,
}

impl World {
    pub fn generate(width: f64, height: f64) -> Self {
        // A zero-sized surface (hidden element) still yields a playable
        // minimum so the simulation never divides by nothing.
        let width = width.max(TILE * 20.0);
        let height = height.max(TILE * 15.0);

        let ground_top = height - TILE;
        let mut platforms = vec![Platform {
            x: 0.0,
            y: ground_top,
            width_tiles: (width / TILE).ceil() as u32,
            is_ground: true,
        }];
        for (fx, rise, width_tiles) in LEDGES {
            let w_px = width_tiles as f64 * TILE;
            if w_px > width {
                continue;
            }
            platforms.push(Platform {
                x: (width * fx).min(width - w_px),
                y: (height - rise).max(TILE * 2.0),
                width_tiles,
                is_ground: false,
            });
        }

        // One coin centered over each ledge, plus a short row over the
        // middle of the ground.
        let mut coins = Vec::new();
        for pl in platforms.iter().filter(|p| !p.is_ground) {
            coins.push(Coin {
                x: pl.x + pl.width_px() / 2.0 - TILE / 2.0,
                y: pl.y - 2.0 * TILE,
                collected: false,
            });
        }
        for fx in [0.3, 0.5, 0.7] {
            coins.push(Coin {
                x: width * fx,
                y: ground_top - 3.0 * TILE,
                collected: false,
            });
        }

        let mut critters = vec![Critter::patrolling(
            width * 0.35,
            width * 0.65,
            ground_top,
        )];
        if let Some(ledge) = platforms.iter().find(|p| !p.is_ground) {
            critters.push(Critter::patrolling(
                ledge.x,
                ledge.x + ledge.width_px() - TILE,
                ledge.y,
            ));
        }

        let spawn_x = TILE * 2.0;
        let spawn_y = ground_top - TILE;
        Self {
            width,
            height,
            platforms,
            coins,
            critters,
            player: Player::at(spawn_x, spawn_y),
            spawn_x,
            spawn_y,
            score: 0,
            lives: START_LIVES,
            game_over: false,
            spawn_clock_ms: 0.0,
            spawn_seq: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(World::generate(800.0, 600.0), World::generate(800.0, 600.0));
    }

    #[test]
    fn ground_spans_the_full_width() {
        let world = World::generate(800.0, 600.0);
        let ground = &world.platforms[0];
        assert!(ground.is_ground);
        assert_eq!(ground.x, 0.0);
        assert!(ground.width_px() >= world.width);
        assert_eq!(ground.y, world.height - TILE);
    }

    #[test]
    fn ledges_and_coins_stay_inside_the_surface() {
        let world = World::generate(800.0, 600.0);
        for pl in &world.platforms {
            assert!(pl.x >= 0.0);
            assert!(pl.x + pl.width_px() <= world.width + TILE);
            assert!(pl.y >= TILE);
        }
        for coin in &world.coins {
            assert!(coin.x >= 0.0 && coin.x + TILE <= world.width + TILE);
            assert!(coin.y >= 0.0 && coin.y < world.height);
        }
    }

    #[test]
    fn player_starts_on_the_ground_with_full_lives() {
        let world = World::generate(800.0, 600.0);
        assert!(world.player.on_ground);
        assert_eq!(world.player.y, world.height - 2.0 * TILE);
        assert_eq!(world.lives, START_LIVES);
        assert!(!world.game_over);
    }

    #[test]
    fn tiny_surfaces_are_clamped_to_a_playable_minimum() {
        let world = World::generate(0.0, 0.0);
        assert!(world.width >= TILE * 20.0);
        assert!(world.height >= TILE * 15.0);
        assert!(!world.platforms.is_empty());
    }
}
