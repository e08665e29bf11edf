//! ECS resources shared by systems.
//!
//! Submodules overview:
//! - [`animationclock`] – fixed-interval pacing for animation advancement
//! - [`animationlibrary`] – per-action ordered frame sequences
//! - [`debugmode`] – marker resource enabling the debug overlay
//! - [`gameconfig`] – startup configuration (window, pacing, asset paths)
//! - [`input`] – per-frame keyboard state
//! - [`screensize`] – window dimensions in pixels
//! - [`texturestore`] – textures keyed by string
//! - [`worldtime`] – elapsed/delta clock

pub mod animationclock;
pub mod animationlibrary;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
