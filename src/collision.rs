use macroquad::prelude::*;

// 轴对齐包围盒：左上角 + 宽高
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    // 由实体位置与精灵尺寸生成，位置截断到整数像素
    pub fn from_pos(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x.trunc(), pos.y.trunc(), size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    // 两轴区间都重叠才算相交；仅边缘相接不算（Rect::overlaps 会把相接算作相交）
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
