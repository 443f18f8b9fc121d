//! Terminal arcade shooter (workspace facade crate).
//!
//! Re-exports the `tui_shooter::{core,engine,input,term,types}` API; the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_shooter_core as core;
pub use tui_shooter_engine as engine;
pub use tui_shooter_input as input;
pub use tui_shooter_term as term;
pub use tui_shooter_types as types;
