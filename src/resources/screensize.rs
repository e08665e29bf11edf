//! Screen size resource.
//!
//! Stores the window dimensions in pixels. The window is fixed-size, so
//! this is written once at startup; the anchor and render systems read it.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
