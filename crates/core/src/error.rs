//! Fatal session errors.

use thiserror::Error;

use crate::types::{MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The terminal cannot hold the play-field.
    #[error(
        "terminal is {width}x{height}, but the game needs at least {min_width}x{min_height}; \
         enlarge the window and start again"
    )]
    FieldTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    /// The terminal changed size mid-session.
    #[error(
        "terminal resized from {width}x{height} to {new_width}x{new_height} during play; \
         please restart the game"
    )]
    TerminalResized {
        width: u16,
        height: u16,
        new_width: u16,
        new_height: u16,
    },
}

/// Refuse fields smaller than the minimum playable size.
pub fn check_field_size(width: u16, height: u16) -> Result<(), GameError> {
    if width < MIN_FIELD_WIDTH || height < MIN_FIELD_HEIGHT {
        return Err(GameError::FieldTooSmall {
            width,
            height,
            min_width: MIN_FIELD_WIDTH,
            min_height: MIN_FIELD_HEIGHT,
        });
    }
    Ok(())
}
