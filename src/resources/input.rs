//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes
//! it to systems via the [`InputState`] resource. Every gameplay key maps
//! to one action request: Space/E/Q/D/A queue the one-shot fighting moves,
//! F11 toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub action_jump: BoolState,
    pub action_kick: BoolState,
    pub action_lower_kick: BoolState,
    pub action_punsh: BoolState,
    pub action_lower_punsh: BoolState,
    pub mode_debug: BoolState,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            action_jump: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            action_kick: BoolState::bound_to(KeyboardKey::KEY_E),
            action_lower_kick: BoolState::bound_to(KeyboardKey::KEY_Q),
            action_punsh: BoolState::bound_to(KeyboardKey::KEY_D),
            action_lower_punsh: BoolState::bound_to(KeyboardKey::KEY_A),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}
