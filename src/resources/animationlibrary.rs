//! Animation library resource.
//!
//! This module provides the store for per-action frame sequences, loaded
//! once at startup from the asset tree. Each action owns an ordered list of
//! frames; ordering is numeric on the filename stem (`1.png, 2.png,
//! 10.png`), not lexicographic. Systems look up an animation by action name
//! and drive playback against the immutable data stored here.

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use log::warn;
use rustc_hash::FxHashMap;

use crate::error::AssetError;
use crate::resources::gameconfig::GameConfig;

/// Central registry of frame sequences keyed by action name.
#[derive(Resource, Debug, Default)]
pub struct AnimationLibrary {
    animations: FxHashMap<String, AnimationFrames>,
}

/// One frame of an animation: the texture key used for rendering and the
/// image path it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameAsset {
    pub tex_key: String,
    pub path: PathBuf,
}

/// Immutable ordered frame sequence for one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationFrames {
    frames: Vec<FrameAsset>,
}

impl AnimationFrames {
    pub fn new(frames: Vec<FrameAsset>) -> Self {
        Self { frames }
    }

    /// Index at which a playback cycle is complete. Saturates to 0 for an
    /// empty sequence, so callers never index out of range.
    pub fn last_frame_index(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Texture key for the frame at `index`, if one exists.
    pub fn frame(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(|f| f.tex_key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// All frames, in playback order.
    pub fn assets(&self) -> &[FrameAsset] {
        &self.frames
    }
}

impl AnimationLibrary {
    /// Load the frame sequences for every configured action.
    ///
    /// Each action scans `assets/images/animations/<action>/` for `*.png`
    /// files whose stem parses as an integer, ordered numerically. A
    /// missing directory is fatal; a directory with zero usable frames
    /// loads as an empty sequence and playback degrades by holding the
    /// previously shown frame.
    pub fn load(config: &GameConfig) -> Result<Self, AssetError> {
        let mut animations = FxHashMap::default();
        for action in &config.actions {
            let dir = config.animations_path().join(action);
            let frames = load_action_frames(action, &dir)?;
            if frames.is_empty() {
                warn!("animation '{action}' has no frames in {}", dir.display());
            }
            animations.insert(action.clone(), frames);
        }
        Ok(Self { animations })
    }

    pub fn get(&self, action: &str) -> Option<&AnimationFrames> {
        self.animations.get(action)
    }

    pub fn insert(&mut self, action: impl Into<String>, frames: AnimationFrames) {
        self.animations.insert(action.into(), frames);
    }

    /// Iterate over every frame of every action, for the texture loader.
    pub fn frame_assets(&self) -> impl Iterator<Item = &FrameAsset> {
        self.animations.values().flat_map(|a| a.assets().iter())
    }
}

fn load_action_frames(action: &str, dir: &Path) -> Result<AnimationFrames, AssetError> {
    if !dir.is_dir() {
        return Err(AssetError::NotFound(dir.to_path_buf()));
    }
    let entries = std::fs::read_dir(dir).map_err(|source| AssetError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    // (numeric sort key, frame)
    let mut numbered: Vec<(u64, FrameAsset)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AssetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("png") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Ok(number) = stem.parse::<u64>() else {
            warn!(
                "skipping frame with non-numeric name: {}",
                path.display()
            );
            continue;
        };
        numbered.push((
            number,
            FrameAsset {
                tex_key: format!("{action}/{stem}"),
                path,
            },
        ));
    }
    numbered.sort_by_key(|(number, _)| *number);

    Ok(AnimationFrames::new(
        numbered.into_iter().map(|(_, frame)| frame).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames_from_keys(keys: &[&str]) -> AnimationFrames {
        AnimationFrames::new(
            keys.iter()
                .map(|k| FrameAsset {
                    tex_key: k.to_string(),
                    path: PathBuf::from(format!("{k}.png")),
                })
                .collect(),
        )
    }

    #[test]
    fn test_last_frame_index() {
        assert_eq!(frames_from_keys(&["a", "b", "c"]).last_frame_index(), 2);
        assert_eq!(frames_from_keys(&["a"]).last_frame_index(), 0);
        assert_eq!(frames_from_keys(&[]).last_frame_index(), 0);
    }

    #[test]
    fn test_frame_lookup() {
        let frames = frames_from_keys(&["idle/0", "idle/1"]);
        assert_eq!(frames.frame(0), Some("idle/0"));
        assert_eq!(frames.frame(1), Some("idle/1"));
        assert_eq!(frames.frame(2), None);
        assert_eq!(frames_from_keys(&[]).frame(0), None);
    }

    #[test]
    fn test_library_get_and_insert() {
        let mut library = AnimationLibrary::default();
        library.insert("idle", frames_from_keys(&["idle/0"]));
        assert!(library.get("idle").is_some());
        assert!(library.get("jump").is_none());
    }
}
