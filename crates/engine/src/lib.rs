//! Game loop for the terminal shooter.
//!
//! [`app::App`] is the screen state machine and owns the play session.
//! [`runner::run_loop`] drives it at a fixed frame rate against any
//! [`runner::Frontend`]; [`terminal::TerminalFrontend`] is the real one.

pub mod app;
pub mod clock;
pub mod runner;
pub mod terminal;

pub use tui_shooter_core as core;
pub use tui_shooter_input as input;
pub use tui_shooter_term as term;
pub use tui_shooter_types as types;

pub use app::{App, Phase};
pub use clock::{frame_sleep, sanitize_elapsed};
pub use runner::{run_loop, run_session, Frontend};
pub use terminal::TerminalFrontend;
