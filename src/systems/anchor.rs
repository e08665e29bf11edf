//! Player sprite anchoring.
//!
//! Frame textures vary in size between actions and even between frames of
//! one action, so the sprite's dimensions and pivot are recomputed every
//! iteration: horizontal center pinned to the window center, bottom pinned
//! 25 px above the window's bottom edge.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

/// Vertical gap between the sprite's bottom edge and the window's.
const FLOOR_MARGIN: f32 = 25.0;

/// Size the player sprite from its current frame texture and anchor it
/// bottom-center above the floor line.
pub fn anchor_player_sprite(
    mut query: Query<(&mut Sprite, &mut MapPosition), With<Player>>,
    textures: Res<TextureStore>,
    screen: Res<ScreenSize>,
) {
    for (mut sprite, mut position) in query.iter_mut() {
        let Some(texture) = textures.get(&sprite.tex_key) else {
            continue;
        };
        sprite.width = texture.width as f32;
        sprite.height = texture.height as f32;
        // Pivot at bottom-center, so the position is the anchor point
        sprite.origin = Vector2 {
            x: sprite.width / 2.0,
            y: sprite.height,
        };
        position.pos = Vector2 {
            x: screen.w as f32 / 2.0,
            y: screen.h as f32 - FLOOR_MARGIN,
        };
    }
}
