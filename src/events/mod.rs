//! Event types and their observers.
//!
//! Submodules overview:
//! - [`action`] – request an action change on the player
//! - [`switchdebug`] – toggle the debug overlay

pub mod action;
pub mod switchdebug;
