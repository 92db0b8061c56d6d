use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use macroquad::audio::{load_sound, Sound};
use macroquad::file::load_file;
use macroquad::prelude::*;

use crate::config::{
    BACKGROUND_PATH, COLLECTIBLE_PATH, COLLECT_SFX_PATH, MUSIC_PATH, SHIP_PATH, SHIP_SIZE,
};

// 精灵逻辑名
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SpriteId {
    Ship,
    Background,
    Collectible,
}

// 启动时一次性加载的图像资源，之后只读
pub struct SpriteStore {
    ship: Texture2D,
    background: Texture2D,
    collectible: Texture2D,
}

impl SpriteStore {
    // 加载全部图像，任一缺失即失败
    pub async fn load() -> Result<Self> {
        let ship = load_scaled_texture(SHIP_PATH, SHIP_SIZE, SHIP_SIZE).await?;
        let background = load_texture(BACKGROUND_PATH)
            .await
            .with_context(|| format!("failed loading {BACKGROUND_PATH}"))?;
        let collectible = load_texture(COLLECTIBLE_PATH)
            .await
            .with_context(|| format!("failed loading {COLLECTIBLE_PATH}"))?;
        log::info!("sprites loaded");
        Ok(Self {
            ship,
            background,
            collectible,
        })
    }

    pub fn get(&self, id: SpriteId) -> &Texture2D {
        match id {
            SpriteId::Ship => &self.ship,
            SpriteId::Background => &self.background,
            SpriteId::Collectible => &self.collectible,
        }
    }

    // 精灵像素尺寸，用于碰撞盒
    pub fn size(&self, id: SpriteId) -> Vec2 {
        let tex = self.get(id);
        vec2(tex.width(), tex.height())
    }
}

// 解码后缩放到固定尺寸再上传为纹理
async fn load_scaled_texture(path: &str, w: u32, h: u32) -> Result<Texture2D> {
    let bytes = load_file(path)
        .await
        .with_context(|| format!("failed loading {path}"))?;
    let rgba = image::load_from_memory(&bytes)
        .with_context(|| format!("failed decoding {path}"))?
        .resize_exact(w, h, FilterType::Triangle)
        .to_rgba8();
    Ok(Texture2D::from_rgba8(w as u16, h as u16, &rgba.into_raw()))
}

// 背景音乐与拾取音效
pub struct Sounds {
    pub music: Sound,
    pub collect: Sound,
}

impl Sounds {
    pub async fn load() -> Result<Self> {
        let music = load_sound(MUSIC_PATH)
            .await
            .with_context(|| format!("failed loading {MUSIC_PATH}"))?;
        let collect = load_sound(COLLECT_SFX_PATH)
            .await
            .with_context(|| format!("failed loading {COLLECT_SFX_PATH}"))?;
        log::info!("sounds loaded");
        Ok(Self { music, collect })
    }
}

// 加载计分字体，优先 Calibri，其次常见无衬线字体；都没有则用内置字体
pub async fn load_ui_font() -> Option<Font> {
    let candidates = [
        "gfx/calibri.ttf",
        "C:/Windows/Fonts/calibri.ttf",
        "/Library/Fonts/Calibri.ttf",
        "/usr/share/fonts/truetype/crosextra/Carlito-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:/Windows/Fonts/arial.ttf",
    ];

    for path in candidates {
        if !Path::new(path).exists() {
            continue;
        }
        if let Ok(font) = load_ttf_font(path).await {
            log::info!("ui font: {path}");
            return Some(font);
        }
    }

    log::warn!("no ui font found, using built-in font");
    None
}
