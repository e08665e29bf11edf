//! Action request event and observer.
//!
//! The input systems do not touch the player's state machine directly:
//! they trigger an [`ActionRequestEvent`], and [`action_request_observer`]
//! writes the request into the player's
//! [`ActionState`](crate::components::action::ActionState). The state
//! machine then commits it at the next cycle boundary.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::action::ActionState;
use crate::components::player::Player;

/// Event asking the player to switch to another action.
///
/// `looped` selects between looping playback and a one-shot that falls
/// back to idle when its cycle completes.
#[derive(Event, Debug, Clone)]
pub struct ActionRequestEvent {
    /// Name of the requested action (must match an animation directory).
    pub action: String,
    /// Whether the animation should restart after its last frame.
    pub looped: bool,
}

/// Observer that queues the requested action on the player.
///
/// Overwrites any unconsumed pending request; the transition itself is
/// deferred to the state machine's cycle-boundary check.
pub fn action_request_observer(
    trigger: On<ActionRequestEvent>,
    mut query: Query<&mut ActionState, With<Player>>,
) {
    let event = trigger.event();
    for mut state in query.iter_mut() {
        state.request(event.action.clone(), event.looped);
    }
}
