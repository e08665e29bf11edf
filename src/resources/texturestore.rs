//! Texture registry.
//!
//! All textures are loaded once at startup: the background, the fallback
//! sprite, and every animation frame listed by the
//! [`AnimationLibrary`](crate::resources::animationlibrary::AnimationLibrary).
//! Render-facing components refer to textures by string key.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

use crate::error::AssetError;
use crate::resources::animationlibrary::AnimationLibrary;
use crate::resources::gameconfig::GameConfig;

/// Texture key of the background image.
pub const BACKGROUND_TEX_KEY: &str = "background";
/// Texture key of the pre-animation placeholder sprite.
pub const FALLBACK_TEX_KEY: &str = "fallback";

#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    /// Load every texture the game needs.
    ///
    /// Fails with [`AssetError`] on the first missing or unreadable image;
    /// asset problems are fatal at startup.
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        config: &GameConfig,
        library: &AnimationLibrary,
    ) -> Result<Self, AssetError> {
        let mut store = Self::default();

        let background = config.images_path().join(&config.background_file);
        store.insert(
            BACKGROUND_TEX_KEY,
            load_texture(rl, thread, &background)?,
        );

        let fallback = config.images_path().join(&config.fallback_file);
        store.insert(FALLBACK_TEX_KEY, load_texture(rl, thread, &fallback)?);

        for frame in library.frame_assets() {
            store.insert(frame.tex_key.clone(), load_texture(rl, thread, &frame.path)?);
        }

        Ok(store)
    }
}

fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }
    rl.load_texture(thread, path.to_string_lossy().as_ref())
        .map_err(|reason| AssetError::Texture {
            path: path.to_path_buf(),
            reason,
        })
}
