//! Text for the HUD and the terminal-state banners.

use chase_core::Phase;

pub const GAME_OVER_TITLE: &str = "Game Over!";
pub const RESTART_HINT: &str = "Press 'R' to restart";
pub const ESCAPE_LINE: &str = "We have successfully robbed our neighbour!";

pub fn score_line(score: u32) -> String {
    format!("Score: {score}")
}

pub fn level_line(level: u32) -> String {
    format!("Level: {level}")
}

/// Banner lines for a terminal phase, top to bottom; empty while playing.
pub fn banner_lines(phase: Phase) -> Vec<&'static str> {
    match phase {
        Phase::Playing => Vec::new(),
        Phase::GameOver => vec![GAME_OVER_TITLE, RESTART_HINT],
        Phase::Escaped => vec![ESCAPE_LINE, RESTART_HINT],
    }
}
