//! High-level scene setup.
//!
//! Spawns the two entities of the demo: the window-filling background and
//! the player, with its fallback action already queued so the state
//! machine settles into the idle loop without any input.

use bevy_ecs::prelude::*;

use crate::components::action::ActionState;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::{BACKGROUND_TEX_KEY, FALLBACK_TEX_KEY};

/// Spawn the background and player entities.
///
/// The background sprite is sized to the window so its image stretches to
/// fill it. The player starts on the fallback sprite; the anchor system
/// sizes and places it from the first frame onward.
pub fn setup(world: &mut World) {
    let config = world.resource::<GameConfig>().clone();
    let (width, height) = (config.window_width as f32, config.window_height as f32);

    world.spawn((
        Sprite::new(BACKGROUND_TEX_KEY, width, height),
        MapPosition::new(0.0, 0.0),
        ZIndex(0),
    ));

    world.spawn((
        Player,
        ActionState::new(config.fallback_action.clone()),
        Sprite::new(FALLBACK_TEX_KEY, 0.0, 0.0),
        MapPosition::new(0.0, 0.0),
        ZIndex(1),
    ));
}
