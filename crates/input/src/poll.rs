//! Non-blocking drain of pending terminal events.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Capacity of one tick's action batch.
pub const MAX_ACTIONS_PER_TICK: usize = 32;

pub type ActionBatch = ArrayVec<GameAction, MAX_ACTIONS_PER_TICK>;

/// Read every event already queued by the terminal without waiting.
///
/// Non-key events are skipped; resizes are detected by the game loop
/// comparing sizes, not here.
pub fn drain_actions() -> Result<ActionBatch> {
    let mut actions = ActionBatch::new();
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if let Some(action) = handle_key_event(key) {
                push_action(&mut actions, action);
            }
        }
    }
    Ok(actions)
}

/// Add `action` to a tick's batch.
///
/// Repeats collapse to one entry, except Pause, where every press toggles.
/// A full batch still takes a Quit by replacing its last entry.
pub fn push_action(actions: &mut ActionBatch, action: GameAction) {
    if action != GameAction::Pause && actions.contains(&action) {
        return;
    }
    if actions.is_full() {
        if action == GameAction::Quit {
            actions.pop();
            actions.push(action);
        }
        return;
    }
    actions.push(action);
}
