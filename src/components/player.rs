use bevy_ecs::prelude::Component;

/// Tag component marking the player entity.
///
/// Input-driven action requests and the anchor system only apply to
/// entities carrying this marker.
#[derive(Component, Clone, Debug)]
pub struct Player;
