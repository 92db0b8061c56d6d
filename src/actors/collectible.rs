use macroquad::math::{vec2, Vec2};
use rand::Rng;

use crate::collision::Aabb;
use crate::config::{SPAWN_MAX_X, SPAWN_MAX_Y, SPAWN_MIN_X, SPAWN_MIN_Y};

// 收集物：被拾取后随机换位
#[derive(Clone, Debug)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    bounds: Aabb,
}

impl Collectible {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            bounds: Aabb::from_pos(pos, size),
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn update(&mut self) {
        self.bounds = Aabb::from_pos(self.pos, self.size);
    }

    // 在刷新范围内均匀取整数坐标；不避开玩家当前位置
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let x = rng.gen_range(SPAWN_MIN_X..=SPAWN_MAX_X);
        let y = rng.gen_range(SPAWN_MIN_Y..=SPAWN_MAX_Y);
        self.pos = vec2(x as f32, y as f32);
        self.update();
    }
}
