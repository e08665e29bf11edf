//! Integration tests for animation library loading from a real directory
//! tree, covering numeric frame ordering and the degraded/error paths.

use std::fs;
use std::path::{Path, PathBuf};

use fighter2d::error::AssetError;
use fighter2d::resources::animationlibrary::AnimationLibrary;
use fighter2d::resources::gameconfig::GameConfig;

/// Unique scratch directory per test, removed on drop.
struct ScratchAssets {
    root: PathBuf,
}

impl ScratchAssets {
    fn new(test_name: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "fighter2d-{}-{}",
            std::process::id(),
            test_name
        ));
        fs::create_dir_all(root.join("images/animations")).expect("failed to create scratch dir");
        Self { root }
    }

    fn action_dir(&self, action: &str) -> PathBuf {
        self.root.join("images/animations").join(action)
    }

    fn write_frames(&self, action: &str, filenames: &[&str]) {
        let dir = self.action_dir(action);
        fs::create_dir_all(&dir).expect("failed to create action dir");
        for name in filenames {
            fs::write(dir.join(name), b"").expect("failed to write frame file");
        }
    }

    fn config(&self, actions: &[&str]) -> GameConfig {
        let mut config = GameConfig::new();
        config.assets_path = self.root.clone();
        config.actions = actions.iter().map(|a| a.to_string()).collect();
        config
    }
}

impl Drop for ScratchAssets {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.root).ok();
    }
}

fn frame_keys(library: &AnimationLibrary, action: &str) -> Vec<String> {
    let frames = library.get(action).expect("action missing from library");
    (0..frames.len())
        .map(|i| frames.frame(i).unwrap().to_string())
        .collect()
}

#[test]
fn frames_are_ordered_numerically_not_lexicographically() {
    let scratch = ScratchAssets::new("numeric-order");
    scratch.write_frames("idle", &["2.png", "10.png", "1.png"]);

    let library = AnimationLibrary::load(&scratch.config(&["idle"])).expect("load failed");

    assert_eq!(frame_keys(&library, "idle"), vec!["idle/1", "idle/2", "idle/10"]);
}

#[test]
fn last_frame_index_matches_loaded_count() {
    let scratch = ScratchAssets::new("frame-count");
    scratch.write_frames("jump", &["0.png", "1.png", "2.png", "3.png"]);

    let library = AnimationLibrary::load(&scratch.config(&["jump"])).expect("load failed");

    let jump = library.get("jump").unwrap();
    assert_eq!(jump.len(), 4);
    assert_eq!(jump.last_frame_index(), 3);
}

#[test]
fn non_png_and_non_numeric_files_are_skipped() {
    let scratch = ScratchAssets::new("skip-files");
    scratch.write_frames("kick", &["0.png", "1.png", "notes.txt", "thumb.png"]);

    let library = AnimationLibrary::load(&scratch.config(&["kick"])).expect("load failed");

    assert_eq!(frame_keys(&library, "kick"), vec!["kick/0", "kick/1"]);
}

#[test]
fn missing_action_directory_is_fatal() {
    let scratch = ScratchAssets::new("missing-dir");
    scratch.write_frames("idle", &["0.png"]);

    let err = AnimationLibrary::load(&scratch.config(&["idle", "jump"]))
        .expect_err("load should fail");

    match err {
        AssetError::NotFound(path) => {
            assert_eq!(path, scratch.action_dir("jump"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_action_directory_loads_an_empty_sequence() {
    let scratch = ScratchAssets::new("empty-dir");
    fs::create_dir_all(scratch.action_dir("idle")).unwrap();

    let library = AnimationLibrary::load(&scratch.config(&["idle"])).expect("load failed");

    let idle = library.get("idle").unwrap();
    assert!(idle.is_empty());
    assert_eq!(idle.last_frame_index(), 0);
    assert_eq!(idle.frame(0), None);
}

#[test]
fn frame_assets_point_into_the_action_directory() {
    let scratch = ScratchAssets::new("frame-paths");
    scratch.write_frames("punsh", &["0.png", "1.png"]);

    let library = AnimationLibrary::load(&scratch.config(&["punsh"])).expect("load failed");

    let punsh = library.get("punsh").unwrap();
    for asset in punsh.assets() {
        assert_eq!(asset.path.parent(), Some(scratch.action_dir("punsh").as_path()));
        assert_eq!(asset.path.extension().and_then(|e| e.to_str()), Some("png"));
    }
    let all: Vec<&Path> = library.frame_assets().map(|a| a.path.as_path()).collect();
    assert_eq!(all.len(), 2);
}
