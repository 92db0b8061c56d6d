use anyhow::Result;
use macroquad::audio::{play_sound, stop_sound, PlaySoundParams};
use macroquad::prelude::{get_frame_time, next_frame};

use crate::assets::{load_ui_font, SpriteId, SpriteStore, Sounds};
use crate::config::{MUSIC_VOLUME, SFX_VOLUME};
use crate::model::Game;
use crate::render::draw_frame;
use crate::systems::events;
use crate::ui::Ui;

// 游戏主循环：加载资源后反复执行 事件→更新→绘制，直到窗口关闭
pub async fn run() -> Result<()> {
    let sprites = SpriteStore::load().await?;
    let sounds = Sounds::load().await?;
    let ui = Ui {
        font: load_ui_font().await,
    };

    let mut rng = rand::thread_rng();
    let mut game = Game::new(
        sprites.size(SpriteId::Ship),
        sprites.size(SpriteId::Collectible),
        &mut rng,
    );

    events::capture_quit();
    play_sound(
        &sounds.music,
        PlaySoundParams {
            looped: true,
            volume: MUSIC_VOLUME,
        },
    );
    log::info!("game started");

    while game.is_running() {
        game.handle_events(&events::poll());
        if !game.is_running() {
            break;
        }

        let outcome = game.update(get_frame_time(), &mut rng);
        if outcome.collected {
            play_sound(
                &sounds.collect,
                PlaySoundParams {
                    looped: false,
                    volume: SFX_VOLUME,
                },
            );
        }

        draw_frame(&ui, &sprites, &game);
        next_frame().await;
    }

    stop_sound(&sounds.music);
    log::info!("game stopped, final score {}", game.state.score);
    Ok(())
}
