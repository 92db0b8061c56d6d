use macroquad::prelude::*;

use crate::actors::collectible::Collectible;
use crate::actors::player::Player;
use crate::actors::scoreboard::Scoreboard;
use crate::assets::{SpriteId, SpriteStore};
use crate::config::SCORE_FONT_SIZE;
use crate::model::Game;
use crate::ui::{draw_text_top_left, Ui};

// 由后往前绘制整帧：背景、玩家、收集物、计分
pub fn draw_frame(ui: &Ui, sprites: &SpriteStore, game: &Game) {
    clear_background(BLACK);
    draw_background(sprites);
    draw_player(sprites, &game.player);
    draw_collectible(sprites, &game.collectible);
    draw_scoreboard(ui, &game.scoreboard);
}

pub fn draw_background(sprites: &SpriteStore) {
    draw_texture(sprites.get(SpriteId::Background), 0.0, 0.0, WHITE);
}

// 每帧按绝对朝向旋转原始精灵，不修改精灵本身
pub fn draw_player(sprites: &SpriteStore, player: &Player) {
    draw_texture_ex(
        sprites.get(SpriteId::Ship),
        player.pos.x,
        player.pos.y,
        WHITE,
        DrawTextureParams {
            rotation: player.rotation_radians(),
            ..Default::default()
        },
    );
}

pub fn draw_collectible(sprites: &SpriteStore, collectible: &Collectible) {
    draw_texture(
        sprites.get(SpriteId::Collectible),
        collectible.pos.x,
        collectible.pos.y,
        WHITE,
    );
}

// 分数文字每帧重新排版绘制
pub fn draw_scoreboard(ui: &Ui, board: &Scoreboard) {
    draw_text_top_left(ui, &board.text, board.pos.x, board.pos.y, SCORE_FONT_SIZE, WHITE);
}
