use slotmap::new_key_type;

new_key_type! {
    pub struct WallId;
    pub struct CoinId;
}

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

pub const ROBBER_RADIUS: f32 = 20.0;
pub const ROBBER_BASE_SPEED: f32 = 4.5;
pub const COP_RADIUS: f32 = 20.0;
pub const COP_SPEED: f32 = 3.0;
pub const COIN_RADIUS: f32 = 10.0;
pub const WALL_THICKNESS: f32 = 20.0;
pub const SLOW_MULTIPLIER: f32 = 0.75;

/// Coins per level; collecting all of them triggers a level advance.
pub const MAX_COINS: usize = 5;

/// One frame's worth of sampled player input. Direction flags are
/// held-this-frame, `restart` is pressed-this-frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub restart: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Terminal: a cop caught the robber, or the level sequence ran out.
    GameOver,
    /// Terminal: the robber reached an open door.
    Escaped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected { coin: CoinId, score: u32 },
    LevelAdvanced { level: u32 },
    Caught,
    Escaped,
    Restarted,
}
