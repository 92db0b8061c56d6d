use std::collections::HashSet;

use macroquad::prelude::*;

// 每帧从平台取出的输入事件
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    Quit,
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

// 拦截窗口关闭，交给主循环以 Quit 事件处理
pub fn capture_quit() {
    prevent_quit();
}

// 取出本帧全部事件（非阻塞）
pub fn poll() -> Vec<Event> {
    let mut events = Vec::new();
    if is_quit_requested() {
        events.push(Event::Quit);
    }
    events.extend(order_key_events(
        &get_keys_pressed(),
        &get_keys_released(),
        is_key_down,
    ));
    events
}

// 还原同帧按键顺序：仅松开的键在前，仅按下的键在后。
// 同帧既按下又松开的键：仍按住说明是松开后再按，否则是一次轻点。
pub fn order_key_events(
    pressed: &HashSet<KeyCode>,
    released: &HashSet<KeyCode>,
    is_down: impl Fn(KeyCode) -> bool,
) -> Vec<Event> {
    let mut events = Vec::with_capacity(pressed.len() + released.len());

    events.extend(released.difference(pressed).copied().map(Event::KeyUp));

    for &key in pressed.intersection(released) {
        if is_down(key) {
            events.push(Event::KeyUp(key));
            events.push(Event::KeyDown(key));
        } else {
            events.push(Event::KeyDown(key));
            events.push(Event::KeyUp(key));
        }
    }

    events.extend(pressed.difference(released).copied().map(Event::KeyDown));
    events
}
