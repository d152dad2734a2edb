//! Window configuration for the desktop app.

use app::APP_NAME;
use chase_core::{SCREEN_HEIGHT, SCREEN_WIDTH};
use macroquad::window::Conf;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}
