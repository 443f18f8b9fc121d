//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and drains the
//! pending events for a tick without blocking the frame.

pub mod map;
pub mod poll;

pub use tui_shooter_types as types;

pub use map::handle_key_event;
pub use poll::{drain_actions, push_action, ActionBatch, MAX_ACTIONS_PER_TICK};
