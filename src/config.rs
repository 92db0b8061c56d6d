use macroquad::prelude::Conf;

pub const SCREEN_W: f32 = 1280.0;
pub const SCREEN_H: f32 = 720.0;

// 可移动区域（左上角锚点），精灵右下角留出余量
pub const PLAY_MAX_X: f32 = 1230.0;
pub const PLAY_MAX_Y: f32 = 670.0;

// 收集物刷新范围（整数像素，含两端）
pub const SPAWN_MIN_X: i32 = 50;
pub const SPAWN_MAX_X: i32 = 1230;
pub const SPAWN_MIN_Y: i32 = 50;
pub const SPAWN_MAX_Y: i32 = 670;

pub const PLAYER_START_X: f32 = 200.0;
pub const PLAYER_START_Y: f32 = 200.0;
pub const COLLECTIBLE_START_X: f32 = 50.0;
pub const COLLECTIBLE_START_Y: f32 = 50.0;

pub const PLAYER_BASE_SPEED: f32 = 200.0;
pub const SPEED_PER_PICKUP: f32 = 100.0;

pub const SHIP_SIZE: u32 = 48;

pub const SCORE_X: f32 = 600.0;
pub const SCORE_Y: f32 = 50.0;
pub const SCORE_FONT_SIZE: u16 = 36;

pub const MUSIC_VOLUME: f32 = 0.25;
pub const SFX_VOLUME: f32 = 0.25;

pub const SHIP_PATH: &str = "gfx/ship.png";
pub const BACKGROUND_PATH: &str = "gfx/simple_game_bg.png";
pub const COLLECTIBLE_PATH: &str = "gfx/collectible.png";
pub const MUSIC_PATH: &str = "sfx/music.ogg";
pub const COLLECT_SFX_PATH: &str = "sfx/collect.wav";

// 固定尺寸窗口
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Starship Collector".to_string(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}
