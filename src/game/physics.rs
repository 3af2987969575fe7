//! Delta-proportional simulation step. All motion scales with the step
//! duration in seconds, so a zero delta is a valid no-advance step and
//! frame cadence never changes gameplay speed.

use crate::state::InputState;

use super::entities::{Critter, PlayerState};
use super::world::{TILE, World};

pub const GRAVITY: f64 = 1500.0;
pub const MOVE_ACCEL: f64 = 1800.0;
pub const FRICTION: f64 = 1400.0;
pub const MAX_RUN_SPEED: f64 = 220.0;
pub const JUMP_SPEED: f64 = 560.0;
pub const MAX_FALL_SPEED: f64 = 900.0;
pub const STOMP_BOUNCE: f64 = 260.0;
pub const CRITTER_SPEED: f64 = 60.0;
pub const SQUISH_MS: f64 = 400.0;
pub const RESPAWN_INVULN_MS: f64 = 1200.0;

const SPAWN_PERIOD_MS: f64 = 5000.0;
const MAX_CRITTERS: usize = 6;
const WALK_FRAME_MS: f64 = 150.0;

/// Advances the world by `dt` seconds of simulated time.
pub fn step(world: &mut World, input: &InputState, dt: f64) {
    if dt <= 0.0 || world.game_over {
        return;
    }
    step_player(world, input, dt);
    step_critters(world, dt);
    resolve_contacts(world);
    collect_coins(world);
    spawn_critters(world, dt);
}

fn step_player(world: &mut World, input: &InputState, dt: f64) {
    let p = &mut world.player;

    if input.left && !input.right {
        p.vx = (p.vx - MOVE_ACCEL * dt).max(-MAX_RUN_SPEED);
        p.facing_right = false;
    } else if input.right && !input.left {
        p.vx = (p.vx + MOVE_ACCEL * dt).min(MAX_RUN_SPEED);
        p.facing_right = true;
    } else {
        let decel = FRICTION * dt;
        if p.vx.abs() <= decel {
            p.vx = 0.0;
        } else {
            p.vx -= decel * p.vx.signum();
        }
    }

    if input.jump && p.on_ground {
        p.vy = -JUMP_SPEED;
        p.on_ground = false;
    }
    p.vy = (p.vy + GRAVITY * dt).min(MAX_FALL_SPEED);

    let prev_bottom = p.y + TILE;
    p.x += p.vx * dt;
    p.y += p.vy * dt;

    if p.x < 0.0 {
        p.x = 0.0;
        p.vx = 0.0;
    } else if p.x > world.width - TILE {
        p.x = world.width - TILE;
        p.vx = 0.0;
    }

    // Platforms are one-way: the player lands only when the previous
    // bottom edge was at or above the platform top.
    p.on_ground = false;
    if p.vy >= 0.0 {
        for pl in &world.platforms {
            let new_bottom = p.y + TILE;
            let overlaps_x = p.x + TILE > pl.x && p.x < pl.x + pl.width_px();
            if overlaps_x && prev_bottom <= pl.y && new_bottom >= pl.y {
                p.y = pl.y - TILE;
                p.vy = 0.0;
                p.on_ground = true;
                break;
            }
        }
    }

    if p.on_ground {
        if p.vx.abs() > 1.0 {
            p.state = PlayerState::Walking;
            p.walk_clock_ms += dt * 1000.0;
            if p.walk_clock_ms >= WALK_FRAME_MS {
                p.walk_clock_ms -= WALK_FRAME_MS;
                p.walk_frame ^= 1;
            }
        } else {
            p.state = PlayerState::Standing;
            p.walk_clock_ms = 0.0;
            p.walk_frame = 0;
        }
    } else {
        p.state = PlayerState::Jumping;
    }

    if p.invuln_ms > 0.0 {
        p.invuln_ms = (p.invuln_ms - dt * 1000.0).max(0.0);
    }
}

fn step_critters(world: &mut World, dt: f64) {
    for c in &mut world.critters {
        if !c.alive {
            c.squish_timer_ms -= dt * 1000.0;
            continue;
        }
        let dir = if c.moving_right { 1.0 } else { -1.0 };
        c.x += dir * CRITTER_SPEED * dt;
        if c.x <= c.min_x {
            c.x = c.min_x;
            c.moving_right = true;
        } else if c.x >= c.max_x {
            c.x = c.max_x;
            c.moving_right = false;
        }
    }
    world.critters.retain(|c| c.alive || c.squish_timer_ms > 0.0);
}

fn resolve_contacts(world: &mut World) {
    if world.player.y > world.height {
        lose_life(world);
        return;
    }
    if world.player.invuln_ms > 0.0 {
        return;
    }

    let (px, py, pvy) = (world.player.x, world.player.y, world.player.vy);
    let mut stomped = None;
    let mut hit = false;
    for (i, c) in world.critters.iter().enumerate() {
        if !c.alive {
            continue;
        }
        let overlaps = px + TILE > c.x && px < c.x + TILE && py + TILE > c.y && py < c.y + TILE;
        if !overlaps {
            continue;
        }
        // Stomp when descending with the feet just past the critter's
        // crown; anything else is side contact.
        if pvy > 0.0 && (py + TILE) - c.y < TILE * 0.5 {
            stomped = Some(i);
        } else {
            hit = true;
        }
        break;
    }

    if let Some(i) = stomped {
        let c = &mut world.critters[i];
        c.alive = false;
        c.squish_timer_ms = SQUISH_MS;
        world.score += 100;
        world.player.vy = -STOMP_BOUNCE;
        world.player.on_ground = false;
        world.player.state = PlayerState::Jumping;
    } else if hit {
        lose_life(world);
    }
}

fn collect_coins(world: &mut World) {
    let (px, py) = (world.player.x, world.player.y);
    for coin in &mut world.coins {
        if coin.collected {
            continue;
        }
        if px + TILE > coin.x && px < coin.x + TILE && py + TILE > coin.y && py < coin.y + TILE {
            coin.collected = true;
            world.score += 10;
        }
    }
}

fn spawn_critters(world: &mut World, dt: f64) {
    world.spawn_clock_ms += dt * 1000.0;
    while world.spawn_clock_ms >= SPAWN_PERIOD_MS {
        world.spawn_clock_ms -= SPAWN_PERIOD_MS;
        if world.critters.iter().filter(|c| c.alive).count() >= MAX_CRITTERS {
            continue;
        }
        let pl = &world.platforms[world.spawn_seq % world.platforms.len()];
        world.spawn_seq += 1;
        world
            .critters
            .push(Critter::patrolling(pl.x, pl.x + pl.width_px() - TILE, pl.y));
    }
}

fn lose_life(world: &mut World) {
    world.lives = world.lives.saturating_sub(1);
    if world.lives == 0 {
        world.game_over = true;
        return;
    }
    let p = &mut world.player;
    p.x = world.spawn_x;
    p.y = world.spawn_y;
    p.vx = 0.0;
    p.vy = 0.0;
    p.on_ground = true;
    p.facing_right = true;
    p.state = PlayerState::Standing;
    p.invuln_ms = RESPAWN_INVULN_MS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::START_LIVES;

    const DT: f64 = 1.0 / 60.0;

    fn world() -> World {
        let mut world = World::generate(800.0, 600.0);
        // Keep interaction tests deterministic: no wandering critters
        // unless a test places one.
        world.critters.clear();
        world
    }

    fn ground_top(world: &World) -> f64 {
        world.platforms[0].y
    }

    #[test]
    fn zero_dt_advances_nothing() {
        let mut w = world();
        let before = w.clone();
        step(&mut w, &InputState::default(), 0.0);
        assert_eq!(w, before);
    }

    #[test]
    fn gravity_pulls_an_airborne_player_down() {
        let mut w = world();
        w.player.y = 100.0;
        w.player.on_ground = false;
        step(&mut w, &InputState::default(), 0.1);
        assert!(w.player.vy > 0.0);
        assert!(w.player.y > 100.0);
        assert_eq!(w.player.state, PlayerState::Jumping);
    }

    #[test]
    fn falling_player_lands_flush_on_the_ground() {
        let mut w = world();
        w.player.y = ground_top(&w) - 5.0 * TILE;
        w.player.on_ground = false;
        for _ in 0..300 {
            step(&mut w, &InputState::default(), DT);
            if w.player.on_ground {
                break;
            }
        }
        assert!(w.player.on_ground);
        assert_eq!(w.player.y, ground_top(&w) - TILE);
        assert_eq!(w.player.vy, 0.0);
    }

    #[test]
    fn holding_right_accelerates_up_to_the_run_cap() {
        let mut w = world();
        let input = InputState {
            right: true,
            ..Default::default()
        };
        let x0 = w.player.x;
        for _ in 0..120 {
            step(&mut w, &input, DT);
        }
        assert_eq!(w.player.vx, MAX_RUN_SPEED);
        assert!(w.player.x > x0);
        assert!(w.player.facing_right);
        assert_eq!(w.player.state, PlayerState::Walking);
    }

    #[test]
    fn jump_launches_only_from_the_ground() {
        let mut w = world();
        let input = InputState {
            jump: true,
            ..Default::default()
        };
        step(&mut w, &input, DT);
        assert!(w.player.vy < 0.0);
        assert!(!w.player.on_ground);
        let vy_airborne = w.player.vy;
        step(&mut w, &input, DT);
        // Still ascending: the held key must not double-launch.
        assert!(w.player.vy > vy_airborne);
        assert!(w.player.vy < 0.0);
    }

    #[test]
    fn stomp_squishes_the_critter_and_bounces_the_player() {
        let mut w = world();
        let top = ground_top(&w);
        w.critters.push(Critter::patrolling(200.0, 200.0, top));
        w.player.x = 200.0;
        w.player.y = (top - 2.0 * TILE) + 2.0;
        w.player.vy = 100.0;
        w.player.on_ground = false;
        step(&mut w, &InputState::default(), 0.001);
        assert!(!w.critters[0].alive);
        assert!(w.critters[0].squish_timer_ms > 0.0);
        assert_eq!(w.score, 100);
        assert_eq!(w.player.vy, -STOMP_BOUNCE);
        assert_eq!(w.lives, START_LIVES);
    }

    #[test]
    fn squished_critter_disappears_after_its_timer() {
        let mut w = world();
        let top = ground_top(&w);
        w.critters.push(Critter::patrolling(200.0, 200.0, top));
        w.critters[0].alive = false;
        w.critters[0].squish_timer_ms = SQUISH_MS;
        step(&mut w, &InputState::default(), (SQUISH_MS / 1000.0) + 0.1);
        assert!(w.critters.is_empty());
    }

    #[test]
    fn side_contact_costs_a_life_and_respawns_with_grace() {
        let mut w = world();
        let top = ground_top(&w);
        w.critters.push(Critter::patrolling(300.0, 300.0, top));
        w.player.x = 290.0;
        w.player.y = top - TILE;
        step(&mut w, &InputState::default(), 0.001);
        assert_eq!(w.lives, START_LIVES - 1);
        assert_eq!(w.player.x, w.spawn_x);
        assert!(w.player.invuln_ms > 0.0);
        assert!(!w.game_over);
    }

    #[test]
    fn respawn_grace_ignores_contact_damage() {
        let mut w = world();
        let top = ground_top(&w);
        w.critters
            .push(Critter::patrolling(w.spawn_x, w.spawn_x, top));
        w.player.invuln_ms = RESPAWN_INVULN_MS;
        step(&mut w, &InputState::default(), DT);
        assert_eq!(w.lives, START_LIVES);
    }

    #[test]
    fn falling_off_the_bottom_costs_a_life() {
        let mut w = world();
        w.player.y = w.height + 10.0;
        w.player.on_ground = false;
        step(&mut w, &InputState::default(), DT);
        assert_eq!(w.lives, START_LIVES - 1);
        assert_eq!(w.player.y, w.spawn_y);
    }

    #[test]
    fn game_over_latches_at_zero_lives_and_freezes_the_world() {
        let mut w = world();
        w.lives = 1;
        w.player.y = w.height + 10.0;
        w.player.on_ground = false;
        step(&mut w, &InputState::default(), DT);
        assert!(w.game_over);
        assert_eq!(w.lives, 0);
        let frozen = w.clone();
        step(&mut w, &InputState::default(), DT);
        assert_eq!(w, frozen);
    }

    #[test]
    fn coin_overlap_collects_and_scores() {
        let mut w = world();
        w.coins[0].x = w.player.x;
        w.coins[0].y = w.player.y;
        step(&mut w, &InputState::default(), 0.001);
        assert!(w.coins[0].collected);
        assert_eq!(w.score, 10);
        // A collected coin never scores twice.
        step(&mut w, &InputState::default(), 0.001);
        assert_eq!(w.score, 10);
    }

    #[test]
    fn critter_reverses_at_its_patrol_bounds() {
        let mut w = world();
        let top = ground_top(&w);
        let mut c = Critter::patrolling(100.0, 132.0, top);
        c.x = c.max_x - 0.5;
        w.critters.push(c);
        step(&mut w, &InputState::default(), 0.1);
        assert!(!w.critters[0].moving_right);
        assert_eq!(w.critters[0].x, 132.0);
        step(&mut w, &InputState::default(), 0.1);
        assert!(w.critters[0].x < 132.0);
    }

    #[test]
    fn critters_spawn_on_a_time_cadence() {
        let mut w = world();
        let before = w.critters.len();
        step(&mut w, &InputState::default(), SPAWN_PERIOD_MS / 1000.0);
        assert_eq!(w.critters.len(), before + 1);
        let spawned = w.critters.last().unwrap();
        assert!(w.platforms.iter().any(|pl| pl.y - TILE == spawned.y));
    }
}
