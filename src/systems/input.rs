use macroquad::prelude::KeyCode;

use crate::actors::player::{Direction, Player};
use crate::systems::events::Event;

// 单个按键绑定：朝向角度与移动方向
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Binding {
    pub key: KeyCode,
    pub angle: i32,
    pub direction: Direction,
}

// 固定的 WASD 键位表
#[derive(Clone, Debug)]
pub struct KeyBinds {
    bindings: [Binding; 4],
}

impl Default for KeyBinds {
    fn default() -> Self {
        Self {
            bindings: [
                Binding { key: KeyCode::W, angle: 0, direction: Direction::Up },
                Binding { key: KeyCode::D, angle: 270, direction: Direction::Right },
                Binding { key: KeyCode::S, angle: 180, direction: Direction::Down },
                Binding { key: KeyCode::A, angle: 90, direction: Direction::Left },
            ],
        }
    }
}

impl KeyBinds {
    pub fn lookup(&self, key: KeyCode) -> Option<Binding> {
        self.bindings.iter().copied().find(|b| b.key == key)
    }

    // 将按键事件作用到玩家；未绑定的键与 Quit 忽略
    pub fn apply(&self, event: &Event, player: &mut Player) {
        match *event {
            Event::KeyDown(key) => {
                let Some(binding) = self.lookup(key) else {
                    return;
                };
                let turn = binding.angle - player.angle;
                player.set_angle(binding.angle);
                player.direction = Some(binding.direction);
                player.moving = true;
                log::debug!("heading {:?}, turned {} deg", binding.direction, turn);
            }
            Event::KeyUp(key) => {
                let Some(binding) = self.lookup(key) else {
                    return;
                };
                // 只有松开当前方向的键才停下
                if player.direction == Some(binding.direction) {
                    player.moving = false;
                }
            }
            Event::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    fn ship() -> Player {
        Player::new(vec2(200.0, 200.0), vec2(48.0, 48.0))
    }

    #[test]
    fn key_down_sets_heading_and_moving() {
        let binds = KeyBinds::default();
        let mut p = ship();
        binds.apply(&Event::KeyDown(KeyCode::D), &mut p);
        assert_eq!(p.direction, Some(Direction::Right));
        assert_eq!(p.angle, 270);
        assert!(p.moving);
    }

    #[test]
    fn release_of_current_direction_stops() {
        let binds = KeyBinds::default();
        let mut p = ship();
        binds.apply(&Event::KeyDown(KeyCode::A), &mut p);
        binds.apply(&Event::KeyUp(KeyCode::A), &mut p);
        assert!(!p.moving);
        assert_eq!(p.direction, Some(Direction::Left));
        assert_eq!(p.angle, 90);
    }

    #[test]
    fn stale_release_does_not_stop() {
        let binds = KeyBinds::default();
        let mut p = ship();
        binds.apply(&Event::KeyDown(KeyCode::W), &mut p);
        binds.apply(&Event::KeyUp(KeyCode::S), &mut p);
        assert_eq!(p.direction, Some(Direction::Up));
        assert!(p.moving);
    }

    #[test]
    fn last_pressed_wins() {
        let binds = KeyBinds::default();
        let mut p = ship();
        binds.apply(&Event::KeyDown(KeyCode::W), &mut p);
        binds.apply(&Event::KeyDown(KeyCode::D), &mut p);
        binds.apply(&Event::KeyUp(KeyCode::W), &mut p);
        assert_eq!(p.direction, Some(Direction::Right));
        assert!(p.moving);
        binds.apply(&Event::KeyUp(KeyCode::D), &mut p);
        assert!(!p.moving);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let binds = KeyBinds::default();
        let mut p = ship();
        binds.apply(&Event::KeyDown(KeyCode::Space), &mut p);
        binds.apply(&Event::KeyUp(KeyCode::Up), &mut p);
        binds.apply(&Event::Quit, &mut p);
        assert_eq!(p.direction, None);
        assert!(!p.moving);
        assert_eq!(p.angle, 0);
    }

    #[test]
    fn bindings_cover_all_directions() {
        let binds = KeyBinds::default();
        let expected = [
            (KeyCode::W, 0, Direction::Up),
            (KeyCode::D, 270, Direction::Right),
            (KeyCode::S, 180, Direction::Down),
            (KeyCode::A, 90, Direction::Left),
        ];
        for (key, angle, direction) in expected {
            let b = binds.lookup(key).expect("bound key");
            assert_eq!(b.angle, angle);
            assert_eq!(b.direction, direction);
        }
    }
}
