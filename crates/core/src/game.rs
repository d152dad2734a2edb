//! The per-frame state machine that owns every entity.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use crate::geom::{Vec2, circle_overlaps_rect, circles_overlap};
use crate::level;
use crate::pursuit::pursuit_step;
use crate::state::{Cop, Robber, World};
use crate::types::*;

pub struct Game {
    seed: u64,
    frame: u64,
    rng: ChaCha8Rng,
    world: World,
    phase: Phase,
    score: u32,
    level: u32,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut walls = SlotMap::with_key();
        level::generate_walls(&mut walls);

        let mut coins = SlotMap::with_key();
        level::generate_coins(&mut rng, &walls, &mut coins);

        let world = World {
            walls,
            coins,
            robber: Robber::new(level::ROBBER_SPAWN),
            cop: Cop::new(level::COP_SPAWN),
            backup_cop: None,
            slowing_zone: None,
            door: None,
        };

        Self {
            seed,
            frame: 0,
            rng,
            world,
            phase: Phase::Playing,
            score: 0,
            level: 1,
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one frame of sampled input. While a terminal
    /// phase is active only the restart input is honored.
    pub fn advance(&mut self, controls: Controls) {
        self.frame += 1;
        match self.phase {
            Phase::Playing => self.step_playing(controls),
            Phase::GameOver | Phase::Escaped => {
                if controls.restart {
                    self.restart();
                }
            }
        }
    }

    fn step_playing(&mut self, controls: Controls) {
        // Player movement with wholesale rollback on wall contact; the robber
        // has no partial-slide resolution, unlike the cops.
        let old_position = self.world.robber.position;
        self.world.robber.apply_input(controls);
        let robber = &self.world.robber;
        if self.world.walls.values().any(|wall| {
            circle_overlaps_rect(robber.position, robber.radius, wall.rect)
        }) {
            self.world.robber.position = old_position;
        }

        self.world.robber.speed = match &self.world.slowing_zone {
            Some(zone) if zone.contains(self.world.robber.position) => {
                ROBBER_BASE_SPEED * zone.multiplier
            }
            _ => ROBBER_BASE_SPEED,
        };

        let target = self.world.robber.position;
        pursuit_step(&mut self.world.cop, target, &self.world.walls);
        if let Some(backup) = self.world.backup_cop.as_mut() {
            pursuit_step(backup, target, &self.world.walls);
        }

        if self.robber_caught() {
            self.phase = Phase::GameOver;
            self.events.push(GameEvent::Caught);
            return;
        }

        self.collect_coins();

        if self.score >= MAX_COINS as u32 {
            self.advance_level();
            if self.phase != Phase::Playing {
                return;
            }
        }

        let robber = &self.world.robber;
        if let Some(door) = &self.world.door
            && door.is_open
            && circle_overlaps_rect(robber.position, robber.radius, door.rect)
        {
            self.phase = Phase::Escaped;
            self.events.push(GameEvent::Escaped);
        }
    }

    fn robber_caught(&self) -> bool {
        let robber = &self.world.robber;
        let caught_by = |cop: &Cop| {
            circles_overlap(robber.position, robber.radius, cop.position, cop.radius)
        };
        caught_by(&self.world.cop) || self.world.backup_cop.as_ref().is_some_and(caught_by)
    }

    fn collect_coins(&mut self) {
        let robber = self.world.robber;
        let touched: Vec<CoinId> = self
            .world
            .coins
            .iter()
            .filter(|(_, coin)| {
                !coin.collected
                    && circles_overlap(robber.position, robber.radius, coin.position, COIN_RADIUS)
            })
            .map(|(id, _)| id)
            .collect();

        for id in touched {
            self.world.coins[id].collected = true;
            self.score += 1;
            self.events.push(GameEvent::CoinCollected { coin: id, score: self.score });
        }
    }

    fn advance_level(&mut self) {
        self.level += 1;
        self.score = 0;
        level::generate_coins(&mut self.rng, &self.world.walls, &mut self.world.coins);

        match self.level {
            2 => {
                self.world.slowing_zone = Some(level::generate_slowing_zone(&mut self.rng));
            }
            3 => {
                self.world.backup_cop = Some(Cop::new(level::BACKUP_COP_SPAWN));
                self.world.door = Some(level::generate_door());
            }
            // No content defined past level 3; the run ends here.
            _ => {
                self.phase = Phase::GameOver;
                return;
            }
        }

        self.events.push(GameEvent::LevelAdvanced { level: self.level });
    }

    /// Rebuild level-1 initial conditions in place. The robber keeps its
    /// position; everything level-gated is cleared and the primary cop and
    /// coins are regenerated fresh.
    fn restart(&mut self) {
        self.score = 0;
        self.level = 1;
        self.phase = Phase::Playing;
        self.world.backup_cop = None;
        self.world.slowing_zone = None;
        self.world.door = None;
        self.world.cop = Cop::new(level::COP_SPAWN);
        self.world.robber.speed = ROBBER_BASE_SPEED;
        level::generate_coins(&mut self.rng, &self.world.walls, &mut self.world.coins);
        self.events.push(GameEvent::Restarted);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_frame(&self) -> u64 {
        self.frame
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hash of the canonical simulation state, for determinism checks.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        fn write_position(hasher: &mut Xxh3, position: Vec2) {
            hasher.write_u32(position.x.to_bits());
            hasher.write_u32(position.y.to_bits());
        }

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.frame);
        hasher.write_u8(match self.phase {
            Phase::Playing => 0,
            Phase::GameOver => 1,
            Phase::Escaped => 2,
        });
        hasher.write_u32(self.score);
        hasher.write_u32(self.level);

        write_position(&mut hasher, self.world.robber.position);
        write_position(&mut hasher, self.world.cop.position);
        if let Some(backup) = &self.world.backup_cop {
            write_position(&mut hasher, backup.position);
        }
        for coin in self.world.coins.values() {
            write_position(&mut hasher, coin.position);
            hasher.write_u8(u8::from(coin.collected));
        }

        hasher.finish()
    }
}
