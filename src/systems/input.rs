//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Just-pressed gameplay keys trigger
//!   [`ActionRequestEvent`](crate::events::action::ActionRequestEvent)s;
//!   F11 triggers [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::action::ActionRequestEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input, update the `InputState` resource, and
/// emit action requests for keys that were just pressed.
///
/// Every fighting move is a one-shot (`looped: false`); the state machine
/// falls back to the idle loop when the move's cycle completes.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll = |key_state: &mut BoolState| {
        key_state.active = rl.is_key_down(key_state.key_binding);
        key_state.just_pressed = rl.is_key_pressed(key_state.key_binding);
        key_state.just_released = rl.is_key_released(key_state.key_binding);
        key_state.just_pressed
    };

    if poll(&mut input.mode_debug) {
        commands.trigger(SwitchDebugEvent {});
    }

    // Gameplay keys: each just-press queues one action request
    if poll(&mut input.action_jump) {
        commands.trigger(ActionRequestEvent {
            action: "jump".to_string(),
            looped: false,
        });
    }
    if poll(&mut input.action_kick) {
        commands.trigger(ActionRequestEvent {
            action: "kick".to_string(),
            looped: false,
        });
    }
    if poll(&mut input.action_lower_kick) {
        commands.trigger(ActionRequestEvent {
            action: "lower_kick".to_string(),
            looped: false,
        });
    }
    if poll(&mut input.action_punsh) {
        commands.trigger(ActionRequestEvent {
            action: "punsh".to_string(),
            looped: false,
        });
    }
    if poll(&mut input.action_lower_punsh) {
        commands.trigger(ActionRequestEvent {
            action: "lower_punsh".to_string(),
            looped: false,
        });
    }
}
