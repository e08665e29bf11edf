//! Action playback system.
//!
//! [`advance_action_playback`] is the state machine tick: it commits the
//! pending action request at a cycle boundary, advances the frame index
//! when the [`AnimationClock`](crate::resources::animationclock::AnimationClock)
//! fires, and resolves the current frame into the player's
//! [`Sprite`](crate::components::sprite::Sprite) texture key.
//!
//! # Playback Flow
//!
//! 1. Frame sequences are defined in
//!    [`AnimationLibrary`](crate::resources::animationlibrary::AnimationLibrary)
//! 2. The player entity has an [`ActionState`](crate::components::action::ActionState)
//!    pointing to an action key
//! 3. Key presses queue requests via
//!    [`action_request_observer`](crate::events::action::action_request_observer)
//! 4. This system commits requests at frame index 0 and advances playback
//!    on the animation clock's cadence

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::action::ActionState;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::resources::animationclock::AnimationClock;
use crate::resources::animationlibrary::AnimationLibrary;
use crate::resources::worldtime::WorldTime;

/// Commit pending transitions and advance animation playback.
///
/// Contract
/// - Transition check runs every loop iteration; frame advancement only
///   when the clock deadline has passed.
/// - Mutates [`ActionState`] and writes the resolved frame's texture key
///   into [`Sprite`].
/// - Degrades by holding the current sprite when the action has no
///   animation or the animation has no frames.
pub fn advance_action_playback(
    mut query: Query<(&mut ActionState, &mut Sprite), With<Player>>,
    library: Res<AnimationLibrary>,
    mut clock: ResMut<AnimationClock>,
    time: Res<WorldTime>,
) {
    let due = clock.is_due(time.elapsed);
    for (mut state, mut sprite) in query.iter_mut() {
        state.commit_pending();

        if !due {
            continue;
        }
        // Before the first commit there is nothing to play.
        let Some(action) = state.current.clone() else {
            continue;
        };
        let Some(animation) = library.get(&action) else {
            warn!("no animation loaded for action '{action}'");
            continue;
        };

        state.advance(animation.last_frame_index());

        if let Some(tex_key) = animation.frame(state.frame_index) {
            sprite.tex_key = tex_key.to_string();
        }
        // No frame resolved (empty sequence): hold the current sprite.
    }
}
