use macroquad::prelude::*;

// 计分文字：固定位置，内容跟随分数
#[derive(Clone, Debug)]
pub struct Scoreboard {
    pub pos: Vec2,
    pub text: String,
}

impl Scoreboard {
    pub fn new(pos: Vec2, score: u32) -> Self {
        Self {
            pos,
            text: score.to_string(),
        }
    }

    pub fn set_score(&mut self, score: u32) {
        self.text = score.to_string();
    }
}
