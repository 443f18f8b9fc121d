//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, session state, and simulation logic.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical sessions
//! - **Testable**: Every simulation stage is covered by unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`collision`]: AABB overlap and swept bullet tests
//! - [`config`]: Tunables with the `arcade` and `classic` presets
//! - [`entities`]: Player, bullet, enemy, power-up and star records
//! - [`error`]: Fatal session errors (field too small, terminal resized)
//! - [`rng`]: Seeded LCG for spawns and the starfield
//! - [`session`]: Session state and the per-tick simulation step
//!
//! # Game Rules
//!
//! - **Fan fire**: each shot spawns bullets at fixed offsets around the ship
//! - **Swept bullets**: bullets move several rows per tick and hit anything they pass
//! - **Power-ups**: pickup shortens the fire cooldown for a fixed window
//! - **Levels**: `level = 1 + score / 250`; enemies spawn faster and step sooner
//! - **Boss**: one tough enemy appears the first time level 2 is reached
//!
//! # Example
//!
//! ```
//! use tui_shooter_core::{GameConfig, Session};
//! use tui_shooter_types::FrameInput;
//!
//! let mut session = Session::new(GameConfig::arcade().with_seed(7), 80, 30).unwrap();
//! let fire = FrameInput { fire: true, ..FrameInput::default() };
//!
//! session.step(33, fire);
//! assert_eq!(session.bullets().len(), 3);
//! assert_eq!(session.level(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`Session::step`](session::Session::step) once per frame with the
//! elapsed milliseconds. Movement and firing are per-tick; spawning, enemy
//! steps and star drift accumulate elapsed time.

pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod rng;
pub mod session;

pub use tui_shooter_types as types;

// Re-export commonly used types for convenience
pub use collision::{bullet_hits_enemy, rect_hit, sprites_hit};
pub use config::GameConfig;
pub use entities::{Bullet, Enemy, Player, PowerUp, Star, Tier};
pub use error::{check_field_size, GameError};
pub use rng::SimpleRng;
pub use session::{Session, TickCues};
