use macroquad::math::{vec2, Vec2};
use rand::Rng;

use crate::actors::collectible::Collectible;
use crate::actors::player::Player;
use crate::actors::scoreboard::Scoreboard;
use crate::config::{
    COLLECTIBLE_START_X, COLLECTIBLE_START_Y, PLAYER_START_X, PLAYER_START_Y, SCORE_X, SCORE_Y,
    SPEED_PER_PICKUP,
};
use crate::systems::{Event, KeyBinds};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunState {
    Running,
    Stopped,
}

// 本局共享状态：分数与运行状态
#[derive(Clone, Copy, Debug)]
pub struct GameState {
    pub score: u32,
    pub run_state: RunState,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            run_state: RunState::Running,
        }
    }
}

// 单帧更新结果，供主循环触发音效
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FrameOutcome {
    pub collected: bool,
}

#[derive(Clone, Debug)]
pub struct Game {
    pub player: Player,
    pub collectible: Collectible,
    pub scoreboard: Scoreboard,
    pub keybinds: KeyBinds,
    pub state: GameState,
}

impl Game {
    // 开局：玩家在固定出生点，收集物立即随机放置
    pub fn new<R: Rng + ?Sized>(ship_size: Vec2, collectible_size: Vec2, rng: &mut R) -> Self {
        let state = GameState::default();
        let mut collectible = Collectible::new(
            vec2(COLLECTIBLE_START_X, COLLECTIBLE_START_Y),
            collectible_size,
        );
        collectible.randomize_position(rng);
        Self {
            player: Player::new(vec2(PLAYER_START_X, PLAYER_START_Y), ship_size),
            collectible,
            scoreboard: Scoreboard::new(vec2(SCORE_X, SCORE_Y), state.score),
            keybinds: KeyBinds::default(),
            state,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.run_state == RunState::Running
    }

    // 处理本帧事件：关闭窗口即停止，其余交给键位表
    pub fn handle_events(&mut self, events: &[Event]) {
        for event in events {
            if *event == Event::Quit {
                self.state.run_state = RunState::Stopped;
                continue;
            }
            self.keybinds.apply(event, &mut self.player);
        }
    }

    // 推进一帧：移动、碰撞检测与计分
    pub fn update<R: Rng + ?Sized>(&mut self, elapsed: f32, rng: &mut R) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        self.player.update(elapsed.max(0.0));
        self.collectible.update();

        if self.player.bounds().intersects(&self.collectible.bounds()) {
            self.collect(rng);
            outcome.collected = true;
        }

        self.scoreboard.set_score(self.state.score);
        outcome
    }

    fn collect<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.collectible.randomize_position(rng);
        self.player.accelerate(SPEED_PER_PICKUP);
        self.state.score += 1;
        log::debug!(
            "collected: score={} speed={} next=({}, {})",
            self.state.score,
            self.player.speed,
            self.collectible.pos.x,
            self.collectible.pos.y
        );
    }
}
