use macroquad::prelude::*;

use crate::collision::Aabb;
use crate::config::{PLAYER_BASE_SPEED, PLAY_MAX_X, PLAY_MAX_Y};

// 四个移动方向
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // 单位方向向量（屏幕坐标，y 向下）
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => vec2(0.0, -1.0),
            Direction::Down => vec2(0.0, 1.0),
            Direction::Left => vec2(-1.0, 0.0),
            Direction::Right => vec2(1.0, 0.0),
        }
    }
}

// 玩家飞船：位置、速度、朝向与移动状态
#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub angle: i32,
    pub direction: Option<Direction>,
    pub moving: bool,
    bounds: Aabb,
}

impl Player {
    // 创建玩家，size 取自飞船精灵
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            pos: spawn,
            size,
            speed: PLAYER_BASE_SPEED,
            angle: 0,
            direction: None,
            moving: false,
            bounds: Aabb::from_pos(spawn, size),
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    // 按经过时间推进位置，再夹紧到可移动区域
    pub fn update(&mut self, elapsed: f32) {
        if self.moving {
            if let Some(dir) = self.direction {
                self.pos += dir.unit() * self.speed * elapsed;
            }
            self.pos.x = self.pos.x.clamp(0.0, PLAY_MAX_X);
            self.pos.y = self.pos.y.clamp(0.0, PLAY_MAX_Y);
        }
        self.bounds = Aabb::from_pos(self.pos, self.size);
    }

    // 记录绝对朝向；渲染时由朝向重新旋转原始精灵
    pub fn set_angle(&mut self, new_angle: i32) {
        self.angle = new_angle;
    }

    // 渲染用旋转弧度（逆时针为正，macroquad 顺时针为正，故取负）
    pub fn rotation_radians(&self) -> f32 {
        -(self.angle as f32).to_radians()
    }

    pub fn accelerate(&mut self, amount: f32) {
        self.speed += amount.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> Player {
        Player::new(vec2(200.0, 200.0), vec2(48.0, 48.0))
    }

    #[test]
    fn new_player_is_idle_facing_up() {
        let p = ship();
        assert_eq!(p.speed, 200.0);
        assert_eq!(p.angle, 0);
        assert_eq!(p.direction, None);
        assert!(!p.moving);
        assert_eq!(p.bounds(), Aabb::new(200.0, 200.0, 48.0, 48.0));
    }

    #[test]
    fn moving_right_for_one_second() {
        let mut p = ship();
        p.direction = Some(Direction::Right);
        p.moving = true;
        p.update(1.0);
        assert_eq!(p.pos, vec2(400.0, 200.0));
        assert_eq!(p.bounds().x, 400.0);
    }

    #[test]
    fn up_and_left_are_negative() {
        let mut p = ship();
        p.moving = true;
        p.direction = Some(Direction::Up);
        p.update(0.5);
        assert_eq!(p.pos, vec2(200.0, 100.0));
        p.direction = Some(Direction::Left);
        p.update(0.5);
        assert_eq!(p.pos, vec2(100.0, 100.0));
    }

    #[test]
    fn not_moving_keeps_position() {
        let mut p = ship();
        p.direction = Some(Direction::Down);
        p.update(3.0);
        assert_eq!(p.pos, vec2(200.0, 200.0));
    }

    #[test]
    fn update_clamps_into_playfield() {
        let starts = [
            vec2(0.0, 0.0),
            vec2(1230.0, 670.0),
            vec2(615.5, 333.3),
            vec2(1200.0, 10.0),
        ];
        let dirs = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        let elapsed = [0.0, 0.016, 0.5, 1.0, 10.0, 1000.0];
        for start in starts {
            for dir in dirs {
                for dt in elapsed {
                    let mut p = Player::new(start, vec2(48.0, 48.0));
                    p.speed = 900.0;
                    p.direction = Some(dir);
                    p.moving = true;
                    p.update(dt);
                    assert!((0.0..=PLAY_MAX_X).contains(&p.pos.x), "{:?}", p.pos);
                    assert!((0.0..=PLAY_MAX_Y).contains(&p.pos.y), "{:?}", p.pos);
                }
            }
        }
    }

    #[test]
    fn bounds_use_truncated_position() {
        let mut p = ship();
        p.direction = Some(Direction::Right);
        p.moving = true;
        p.update(0.0049);
        assert!(p.pos.x > 200.0);
        assert_eq!(p.bounds().x, 200.0);
    }

    #[test]
    fn set_angle_stores_absolute_target() {
        let mut p = ship();
        p.set_angle(270);
        p.set_angle(270);
        assert_eq!(p.angle, 270);
        p.set_angle(90);
        assert_eq!(p.angle, 90);
        assert!((p.rotation_radians() + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn accelerate_never_slows_down() {
        let mut p = ship();
        p.accelerate(100.0);
        p.accelerate(-50.0);
        assert_eq!(p.speed, 300.0);
    }
}
