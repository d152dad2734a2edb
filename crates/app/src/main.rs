use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use chase_core::Game;
use macroquad::prelude::next_frame;
use macroquad::window::Conf;

mod frame_input;
mod render;
mod window_config;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice.value(),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let mut game = Game::new(seed);
    loop {
        game.advance(frame_input::capture_controls());
        render::draw_frame(&game);
        next_frame().await
    }
}
