//! ECS components for entities.
//!
//! Submodules overview:
//! - [`action`] – the player's action-queue / animation playback state machine
//! - [`mapposition`] – screen-space position (pivot) for an entity
//! - [`player`] – tag component for the player entity
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod action;
pub mod mapposition;
pub mod player;
pub mod sprite;
pub mod zindex;
