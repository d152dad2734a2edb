pub mod game;
pub mod geom;
pub mod level;
pub mod pursuit;
pub mod state;
pub mod types;

pub use game::Game;
pub use geom::{Rect, Vec2};
pub use state::{Coin, Cop, Door, Robber, SlowingZone, Wall, World};
pub use types::*;
