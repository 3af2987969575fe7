//! Full-frame canvas draw. Rendering reads the world and never mutates
//! it; animation frames are advanced by the simulation step.

use web_sys::CanvasRenderingContext2d;

use super::entities::PlayerState;
use super::sprites::{
    self, BRICK, COIN, CRITTER, GROUND, PLAYER_JUMP, PLAYER_STANDING, PLAYER_WALK1, PLAYER_WALK2,
    draw_sprite,
};
use super::world::{TILE, World};

pub fn draw(ctx: &CanvasRenderingContext2d, world: &World, width: f64, height: f64) {
    ctx.set_fill_style_str(sprites::SKY);
    ctx.fill_rect(0.0, 0.0, width, height);

    for pl in &world.platforms {
        let (sprite, color) = if pl.is_ground {
            (&GROUND, sprites::GROUND_COLOR)
        } else {
            (&BRICK, sprites::BRICK_COLOR)
        };
        for tx in 0..pl.width_tiles {
            draw_sprite(ctx, sprite, pl.x + tx as f64 * TILE, pl.y, color, false);
        }
    }

    for coin in world.coins.iter().filter(|c| !c.collected) {
        draw_sprite(ctx, &COIN, coin.x, coin.y, sprites::COIN_GOLD, false);
    }

    for c in &world.critters {
        if c.alive {
            draw_sprite(ctx, &CRITTER, c.x, c.y, sprites::CRITTER_BROWN, !c.moving_right);
        } else if c.squish_timer_ms > 0.0 {
            // Squished corpse: just the flattened bottom quarter.
            ctx.set_fill_style_str(sprites::CRITTER_BROWN);
            ctx.fill_rect(c.x, c.y + TILE * 0.75, TILE, TILE * 0.25);
        }
    }

    let p = &world.player;
    let sprite = match p.state {
        PlayerState::Standing => &PLAYER_STANDING,
        PlayerState::Jumping => &PLAYER_JUMP,
        PlayerState::Walking => {
            if p.walk_frame == 0 {
                &PLAYER_WALK1
            } else {
                &PLAYER_WALK2
            }
        }
    };
    // Blink through the respawn grace period.
    let hidden = p.invuln_ms > 0.0 && (p.invuln_ms / 100.0) as u64 % 2 == 0;
    if !hidden {
        draw_sprite(ctx, sprite, p.x, p.y, sprites::PLAYER_RED, !p.facing_right);
    }
}
