//! Per-level content generation.
//!
//! The wall maze is fixed and generated once; level advances regenerate coins
//! and add the level-gated entities (slowing zone at level 2, backup cop and
//! door at level 3). All randomness flows through the game's seeded rng.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;
use slotmap::SlotMap;

use crate::geom::{Rect, Vec2};
use crate::state::{Coin, Door, SlowingZone, Wall};
use crate::types::*;

pub const ROBBER_SPAWN: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
pub const COP_SPAWN: Vec2 = Vec2::new(100.0, 100.0);
pub const BACKUP_COP_SPAWN: Vec2 = Vec2::new(SCREEN_WIDTH - 100.0, SCREEN_HEIGHT - 100.0);

/// Uniform draw in `[min, max]` from the raw rng stream.
fn random_f32_in(rng: &mut ChaCha8Rng, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max);
    let unit = rng.next_u32() as f32 / u32::MAX as f32;
    min + unit * (max - min)
}

/// The fixed three-segment partial maze every level shares.
pub fn generate_walls(walls: &mut SlotMap<WallId, Wall>) {
    walls.clear();
    walls.insert(Wall { rect: Rect::new(150.0, 150.0, 200.0, WALL_THICKNESS) });
    walls.insert(Wall { rect: Rect::new(450.0, 300.0, WALL_THICKNESS, 200.0) });
    walls.insert(Wall { rect: Rect::new(250.0, 450.0, 300.0, WALL_THICKNESS) });
}

/// Rejection-sampled coin placement: draw uniform points inset by the coin
/// radius from the screen edges, rejecting any that land inside a wall.
/// Coins may overlap each other; only walls are excluded.
pub fn generate_coins(
    rng: &mut ChaCha8Rng,
    walls: &SlotMap<WallId, Wall>,
    coins: &mut SlotMap<CoinId, Coin>,
) {
    coins.clear();
    while coins.len() < MAX_COINS {
        let candidate = Vec2::new(
            random_f32_in(rng, COIN_RADIUS, SCREEN_WIDTH - COIN_RADIUS),
            random_f32_in(rng, COIN_RADIUS, SCREEN_HEIGHT - COIN_RADIUS),
        );
        if walls.values().any(|wall| wall.rect.contains_point(candidate)) {
            continue;
        }
        let id = coins.insert(Coin { id: CoinId::default(), position: candidate, collected: false });
        coins[id].id = id;
    }
}

/// Level 2 hazard: a half-screen-sized zone at a random on-screen position.
pub fn generate_slowing_zone(rng: &mut ChaCha8Rng) -> SlowingZone {
    let zone_width = SCREEN_WIDTH / 2.0;
    let zone_height = SCREEN_HEIGHT / 2.0;
    SlowingZone {
        rect: Rect::new(
            random_f32_in(rng, 0.0, SCREEN_WIDTH - zone_width),
            random_f32_in(rng, 0.0, SCREEN_HEIGHT - zone_height),
            zone_width,
            zone_height,
        ),
        multiplier: SLOW_MULTIPLIER,
    }
}

/// Level 3 exit: centered on the bottom edge, open from the start.
pub fn generate_door() -> Door {
    Door {
        rect: Rect::new(SCREEN_WIDTH / 2.0 - 40.0, SCREEN_HEIGHT - 80.0, 80.0, 40.0),
        is_open: true,
    }
}
