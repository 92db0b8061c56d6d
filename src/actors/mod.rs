pub mod collectible;
pub mod player;
pub mod scoreboard;
