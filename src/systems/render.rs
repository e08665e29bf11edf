//! Render systems.
//!
//! We render inside raylib's drawing scope and query the ECS World
//! directly. Sprites are collected, sorted by [`ZIndex`], and drawn with
//! the whole texture as the source rectangle: the destination rectangle is
//! the sprite's size, so the window-sized background sprite stretches its
//! image to fill the window while the player draws at native frame size.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::action::ActionState;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

/// Exclusive render system: one drawing scope per loop iteration.
///
/// Raylib's target-FPS wait happens inside `end_drawing`, so this system
/// is also the render-rate limiter for the whole loop.
pub fn render_system(world: &mut World) {
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread resource missing");
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle resource missing");

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        render_pass(world, &mut d);
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Draw all sprites, back to front.
fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    // Query: (Sprite, Position, ZIndex). Collect, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world).map(|(s, p, z)| (s.clone(), *p, *z)).collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.resource::<TextureStore>();

    for (sprite, position, _z) in to_draw.iter() {
        if let Some(tex) = textures.get(&sprite.tex_key) {
            // Whole texture as the source; scaling happens through dest
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            let dest = Rectangle {
                x: position.pos.x,
                y: position.pos.y,
                width: sprite.width,
                height: sprite.height,
            };
            d.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
        }
    }
}

/// Text overlay shown while the `DebugMode` resource is present.
fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if world.contains_resource::<DebugMode>() {
        let screen = *world.resource::<ScreenSize>();

        let fps = d.get_fps();
        let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
        d.draw_text(&text, 10, 10, 10, Color::BLACK);

        let mut players = world.query_filtered::<&ActionState, With<Player>>();
        for state in players.iter(world) {
            let action = state.current.as_deref().unwrap_or("none");
            let text = format!(
                "Action: {} (loop: {}) frame {}",
                action, state.looped, state.frame_index
            );
            d.draw_text(&text, 10, (screen.h - 20) as i32, 10, Color::BLACK);
        }
    }
}
