mod actors;
mod app;
mod assets;
mod collision;
mod config;
mod model;
mod render;
mod systems;
mod ui;

use crate::config::window_conf;

#[macroquad::main(window_conf)]
// 程序入口：初始化日志与窗口配置，启动游戏主循环；资源加载失败直接退出
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = app::run().await {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
