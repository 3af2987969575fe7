//! 8x8 pixel-art sprites and the scaling blitter that draws them.
//! Each sprite row is one byte; the most significant bit is the leftmost
//! pixel.

use web_sys::CanvasRenderingContext2d;

pub const SPRITE_PX: usize = 8;
/// Canvas pixels per sprite pixel.
pub const SCALE: f64 = 2.0;

pub const SKY: &str = "#5c94fc";
pub const GROUND_COLOR: &str = "#9c4a00";
pub const BRICK_COLOR: &str = "#c84c0c";
pub const PLAYER_RED: &str = "#f83800";
pub const CRITTER_BROWN: &str = "#a0522d";
pub const COIN_GOLD: &str = "#f8b800";

pub const PLAYER_STANDING: [u8; 8] = [
    0b0011_1100,
    0b0111_1110,
    0b0101_1010,
    0b0111_1110,
    0b0011_1100,
    0b0111_1110,
    0b0110_0110,
    0b0110_0110,
];

pub const PLAYER_WALK1: [u8; 8] = [
    0b0011_1100,
    0b0111_1110,
    0b0101_1010,
    0b0111_1110,
    0b0011_1100,
    0b0111_1110,
    0b0110_1100,
    0b0000_1100,
];

pub const PLAYER_WALK2: [u8; 8] = [
    0b0011_1100,
    0b0111_1110,
    0b0101_1010,
    0b0111_1110,
    0b0011_1100,
    0b0111_1110,
    0b0011_0110,
    0b0011_0000,
];

pub const PLAYER_JUMP: [u8; 8] = [
    0b0011_1100,
    0b1111_1111,
    0b0101_1010,
    0b0111_1110,
    0b0011_1100,
    0b0111_1110,
    0b0110_0110,
    0b0000_0000,
];

pub const CRITTER: [u8; 8] = [
    0b0001_1000,
    0b0011_1100,
    0b0111_1110,
    0b1111_1111,
    0b1101_1011,
    0b0111_1110,
    0b0110_0110,
    0b1110_0111,
];

pub const GROUND: [u8; 8] = [
    0b1111_1111,
    0b0101_0101,
    0b1010_1010,
    0b0101_0101,
    0b1010_1010,
    0b0101_0101,
    0b1010_1010,
    0b1111_1111,
];

pub const BRICK: [u8; 8] = [
    0b1111_1111,
    0b1101_1101,
    0b1101_1101,
    0b1111_1111,
    0b0111_0111,
    0b0111_0111,
    0b1111_1111,
    0b1111_1111,
];

pub const COIN: [u8; 8] = [
    0b0011_1100,
    0b0111_1110,
    0b0111_0110,
    0b0111_0110,
    0b0110_1110,
    0b0110_1110,
    0b0111_1110,
    0b0011_1100,
];

/// Blits a sprite at canvas position (`x`, `y`), scaled by [`SCALE`].
pub fn draw_sprite(
    ctx: &CanvasRenderingContext2d,
    sprite: &[u8; 8],
    x: f64,
    y: f64,
    color: &str,
    flip_x: bool,
) {
    ctx.set_fill_style_str(color);
    for (row, bits) in sprite.iter().enumerate() {
        for col in 0..SPRITE_PX {
            let bit = if flip_x { col } else { SPRITE_PX - 1 - col };
            if (bits >> bit) & 1 == 1 {
                ctx.fill_rect(
                    x + col as f64 * SCALE,
                    y + row as f64 * SCALE,
                    SCALE,
                    SCALE,
                );
            }
        }
    }
}
