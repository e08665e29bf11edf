//! ECS systems.
//!
//! Submodules overview:
//! - [`action`] – the action/animation state machine tick
//! - [`anchor`] – player sprite sizing and bottom-center anchoring
//! - [`input`] – keyboard polling and action request emission
//! - [`render`] – background + sprite drawing, debug overlay
//! - [`time`] – world clock update

pub mod action;
pub mod anchor;
pub mod input;
pub mod render;
pub mod time;
