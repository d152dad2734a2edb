//! Keyboard sampling for one rendered frame.

use chase_core::Controls;
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

pub fn capture_controls() -> Controls {
    Controls {
        up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        restart: is_key_pressed(KeyCode::R),
    }
}
