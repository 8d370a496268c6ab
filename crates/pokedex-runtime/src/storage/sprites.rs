use image::RgbaImage;
use pokedex_core::DataPaths;
use std::path::PathBuf;

use crate::Result;

/// Downloaded sprite files under `icons/`
#[derive(Debug, Clone)]
pub struct SpriteCache {
    paths: DataPaths,
}

impl SpriteCache {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    pub fn path(&self, sprite_id: u32, shiny: bool) -> PathBuf {
        self.paths.icon_file(sprite_id, shiny)
    }

    pub fn contains(&self, sprite_id: u32, shiny: bool) -> bool {
        self.path(sprite_id, shiny).exists()
    }

    /// Decoded sprite, or `None` when absent or undecodable
    pub fn load(&self, sprite_id: u32, shiny: bool) -> Option<RgbaImage> {
        let path = self.path(sprite_id, shiny);
        let bytes = std::fs::read(&path).ok()?;
        match decode(&bytes) {
            Some(image) => Some(image),
            None => {
                tracing::warn!(path = %path.display(), "cached sprite is not a readable image");
                None
            }
        }
    }

    /// Writes downloaded bytes as-is; the format is sniffed on load.
    pub fn store(&self, sprite_id: u32, shiny: bool, bytes: &[u8]) -> Result<()> {
        let path = self.path(sprite_id, shiny);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)?;
        Ok(())
    }
}

/// Decodes PNG or GIF bytes (first frame) into RGBA
pub fn decode(bytes: &[u8]) -> Option<RgbaImage> {
    image::load_from_memory(bytes)
        .ok()
        .map(|image| image.to_rgba8())
}
