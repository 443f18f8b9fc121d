//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout toolkits and instead renders into a simple
//! framebuffer of tagged cells that is flushed to the terminal every frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep color choice a rendering concern (`ColorTag` → terminal color)
//! - Emit as few color switches as the frame's color transitions require

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod palette;
pub mod probe;
pub mod renderer;

pub use tui_shooter_core as core;
pub use tui_shooter_types as types;

pub use audio::{AudioSink, Silent, TerminalBell};
pub use fb::{Cell, FrameBuffer};
pub use game_view::{FinalStats, GameView};
pub use probe::detect_rich_color;
pub use renderer::{
    encode_escape_into, encode_runs_into, restore_terminal, terminal_size, RenderMode,
    TerminalRenderer,
};
