pub mod hud;
pub mod seed;

pub const APP_NAME: &str = "Cop and Robber";
