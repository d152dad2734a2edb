//! Draw pass: world entities, HUD text, and terminal-state banners.
//! Pure read of the game state; nothing here mutates the simulation.

use app::hud;
use chase_core::{COIN_RADIUS, Cop, Game, Phase, Vec2};
use macroquad::prelude::*;

const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const WALL_COLOR: Color = GRAY;
const ZONE_COLOR: Color = Color::new(0.0, 0.89, 0.19, 0.5);
const COIN_COLOR: Color = GOLD;
const DOOR_COLOR: Color = BROWN;
const ROBBER_COLOR: Color = BLUE;
const COP_COLOR: Color = RED;
const BACKUP_COP_COLOR: Color = PINK;

const HUD_FONT_SIZE: f32 = 24.0;
const BANNER_FONT_SIZE: f32 = 48.0;
const HINT_FONT_SIZE: f32 = 24.0;

pub fn draw_frame(game: &Game) {
    let world = game.world();

    if game.phase() == Phase::Escaped {
        // The escape screen drops the arena entirely: black background, the
        // robber, and the success banner.
        clear_background(BLACK);
        draw_circle(world.robber.position.x, world.robber.position.y, world.robber.radius, ROBBER_COLOR);
        draw_banner(game.phase(), GREEN);
        return;
    }

    clear_background(BACKGROUND);

    for wall in world.walls.values() {
        draw_rectangle(wall.rect.x, wall.rect.y, wall.rect.w, wall.rect.h, WALL_COLOR);
    }

    if let Some(zone) = &world.slowing_zone {
        draw_rectangle(zone.rect.x, zone.rect.y, zone.rect.w, zone.rect.h, ZONE_COLOR);
    }

    for coin in world.coins.values() {
        if !coin.collected {
            draw_circle(coin.position.x, coin.position.y, COIN_RADIUS, COIN_COLOR);
        }
    }

    if let Some(door) = &world.door
        && door.is_open
    {
        draw_rectangle(door.rect.x, door.rect.y, door.rect.w, door.rect.h, DOOR_COLOR);
    }

    draw_circle(world.robber.position.x, world.robber.position.y, world.robber.radius, ROBBER_COLOR);
    draw_cop(&world.cop, COP_COLOR);
    if let Some(backup) = &world.backup_cop {
        draw_cop(backup, BACKUP_COP_COLOR);
    }

    draw_text(&hud::score_line(game.score()), 10.0, 26.0, HUD_FONT_SIZE, BLACK);
    draw_text(&hud::level_line(game.level()), 10.0, 54.0, HUD_FONT_SIZE, BLACK);

    if game.phase() == Phase::GameOver {
        draw_banner(game.phase(), RED);
    }
}

/// Cops render with a short line showing their current pursuit facing.
fn draw_cop(cop: &Cop, color: Color) {
    draw_circle(cop.position.x, cop.position.y, cop.radius, color);
    let tip = cop.position + Vec2::from_angle_degrees(cop.rotation_degrees) * cop.radius;
    draw_line(cop.position.x, cop.position.y, tip.x, tip.y, 2.0, BLACK);
}

fn draw_banner(phase: Phase, title_color: Color) {
    let lines = hud::banner_lines(phase);
    let mut y = screen_height() / 2.0;
    for (index, line) in lines.iter().enumerate() {
        let font_size = if index == 0 { BANNER_FONT_SIZE } else { HINT_FONT_SIZE };
        let color = if index == 0 { title_color } else { DARKGRAY };
        let width = measure_text(line, None, font_size as u16, 1.0).width;
        draw_text(line, (screen_width() - width) / 2.0, y, font_size, color);
        y += font_size + 10.0;
    }
}
