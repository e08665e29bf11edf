//! Player action state machine.
//!
//! [`ActionState`] tracks which action the player is currently performing,
//! the playback position inside that action's animation, and the single
//! pending [`ActionRequest`] waiting to be committed. Transitions only
//! happen at a cycle boundary (frame index 0), so a kick requested mid-jump
//! waits until the jump animation wraps before taking over.
//!
//! The frame sequences themselves live in
//! [`AnimationLibrary`](crate::resources::animationlibrary::AnimationLibrary);
//! this component only stores the action key and index, and the
//! [`advance_action_playback`](crate::systems::action::advance_action_playback)
//! system resolves them against the library each tick.

use bevy_ecs::prelude::Component;
use log::info;

/// The single outstanding transition target.
///
/// A new request unconditionally overwrites the previous unconsumed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: String,
    pub looped: bool,
}

/// Playback state for the player's current action.
#[derive(Debug, Clone, Component)]
pub struct ActionState {
    /// Action currently playing. `None` only before the first commit.
    pub current: Option<String>,
    /// Whether the current animation restarts after its last frame.
    pub looped: bool,
    /// Index into the current animation's frame sequence.
    pub frame_index: usize,
    /// Action auto-queued (looping) when a one-shot animation completes.
    pub fallback: String,
    pending: Option<ActionRequest>,
}

impl ActionState {
    /// Create a state with the fallback action already queued, so the
    /// `current == None` boot state lasts at most one tick.
    pub fn new(fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        let mut state = Self {
            current: None,
            looped: false,
            frame_index: 0,
            fallback: fallback.clone(),
            pending: None,
        };
        state.request(fallback, true);
        state
    }

    /// Queue `action` as the next transition, overwriting any unconsumed
    /// pending request. The log line is diagnostics only.
    pub fn request(&mut self, action: impl Into<String>, looped: bool) {
        let action = action.into();
        info!("next action queued: {action} (loop: {looped})");
        self.pending = Some(ActionRequest { action, looped });
    }

    /// Currently queued request, if any.
    pub fn pending(&self) -> Option<&ActionRequest> {
        self.pending.as_ref()
    }

    /// Apply the pending request if one exists and the playback position is
    /// at a cycle boundary. Returns true when the current action changed.
    ///
    /// A request naming the action already playing is discarded without
    /// resetting playback; a request issued mid-cycle stays queued until
    /// the frame index returns to 0.
    pub fn commit_pending(&mut self) -> bool {
        match self.pending.take() {
            None => false,
            Some(req) => {
                if self.current.as_deref() == Some(req.action.as_str()) {
                    false
                } else if self.frame_index == 0 {
                    self.looped = req.looped;
                    self.current = Some(req.action);
                    true
                } else {
                    self.pending = Some(req);
                    false
                }
            }
        }
    }

    /// Advance playback by one animation tick.
    ///
    /// `last_frame_index` is the index at which the cycle is complete. On
    /// completion the index wraps to 0 and, for one-shot playback, the
    /// fallback action is queued (looping) to be committed on a later tick.
    pub fn advance(&mut self, last_frame_index: usize) {
        if self.frame_index >= last_frame_index {
            if !self.looped {
                let fallback = self.fallback.clone();
                self.request(fallback, true);
            }
            self.frame_index = 0;
        } else {
            self.frame_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queues_fallback() {
        let state = ActionState::new("idle");
        assert_eq!(state.current, None);
        let pending = state.pending().expect("fallback should be queued");
        assert_eq!(pending.action, "idle");
        assert!(pending.looped);
    }

    #[test]
    fn test_commit_applies_fallback_on_first_tick() {
        let mut state = ActionState::new("idle");
        assert!(state.commit_pending());
        assert_eq!(state.current.as_deref(), Some("idle"));
        assert!(state.looped);
        assert_eq!(state.frame_index, 0);
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_request_overwrites_pending() {
        let mut state = ActionState::new("idle");
        state.commit_pending();
        state.request("kick", false);
        state.request("punsh", false);
        assert!(state.commit_pending());
        assert_eq!(state.current.as_deref(), Some("punsh"));
        assert!(!state.looped);
    }

    #[test]
    fn test_commit_waits_for_cycle_boundary() {
        let mut state = ActionState::new("idle");
        state.commit_pending();
        state.frame_index = 2;
        state.request("kick", false);
        assert!(!state.commit_pending());
        assert_eq!(state.current.as_deref(), Some("idle"));
        // Still queued, not lost
        assert_eq!(state.pending().unwrap().action, "kick");

        state.frame_index = 0;
        assert!(state.commit_pending());
        assert_eq!(state.current.as_deref(), Some("kick"));
    }

    #[test]
    fn test_rerequest_of_current_action_is_discarded() {
        let mut state = ActionState::new("idle");
        state.commit_pending();
        state.frame_index = 1;
        state.request("idle", false);
        assert!(!state.commit_pending());
        assert!(state.pending().is_none());
        // Loop flag untouched by the discarded request
        assert!(state.looped);
    }

    #[test]
    fn test_advance_increments_until_last_frame() {
        let mut state = ActionState::new("idle");
        state.commit_pending();
        state.advance(2);
        assert_eq!(state.frame_index, 1);
        state.advance(2);
        assert_eq!(state.frame_index, 2);
    }

    #[test]
    fn test_advance_wraps_looping_cycle() {
        let mut state = ActionState::new("idle");
        state.commit_pending();
        state.frame_index = 2;
        state.advance(2);
        assert_eq!(state.frame_index, 0);
        // Looping playback queues nothing
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_one_shot_completion_queues_fallback() {
        let mut state = ActionState::new("idle");
        state.commit_pending();
        state.request("kick", false);
        state.commit_pending();
        state.frame_index = 3;
        state.advance(3);
        assert_eq!(state.frame_index, 0);
        let pending = state.pending().expect("fallback should be queued");
        assert_eq!(pending.action, "idle");
        assert!(pending.looped);
    }

    #[test]
    fn test_advance_on_empty_animation_holds_at_zero() {
        let mut state = ActionState::new("idle");
        state.commit_pending();
        // Empty sequences saturate to last_frame_index == 0
        state.advance(0);
        assert_eq!(state.frame_index, 0);
    }
}
