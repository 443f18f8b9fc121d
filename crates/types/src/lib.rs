//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Field Layout
//!
//! The play-field is the whole terminal grid, origin top-left, `y` growing downward:
//!
//! | Row | Use |
//! |-----|-----|
//! | `0` | HUD (score, level, lives, power timer) |
//! | `TOP_MARGIN` | Enemy and power-up spawn row, bullet ceiling |
//! | `height - 4` | Player ship (two rows tall) |
//! | `height - BOTTOM_MARGIN_OFFSET` | Leak row for enemies and power-ups |
//! | `height - 1` | Controls footer |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 33 | Target frame duration (~30 FPS) |
//! | `LEVEL_SCORE_STEP` | 250 | Points per level |
//!
//! # Examples
//!
//! ```
//! use tui_shooter_types::{level_for_score, FrameInput, GameAction};
//!
//! assert_eq!(level_for_score(0), 1);
//! assert_eq!(level_for_score(249), 1);
//! assert_eq!(level_for_score(250), 2);
//!
//! let input = FrameInput::from_actions(&[GameAction::MoveLeft, GameAction::Fire]);
//! assert!(input.left && input.fire && !input.right);
//! ```

/// Smallest playable field width in columns.
pub const MIN_FIELD_WIDTH: u16 = 60;

/// Smallest playable field height in rows.
pub const MIN_FIELD_HEIGHT: u16 = 25;

/// Target frame duration in milliseconds (33ms ≈ 30 FPS)
pub const FRAME_MS: u32 = 33;

/// Score needed per level step.
pub const LEVEL_SCORE_STEP: u32 = 250;

/// Spawn row for enemies and power-ups; bullets above it are discarded.
pub const TOP_MARGIN: i32 = 2;

/// Distance of the leak row from the bottom edge (`height - 2`).
pub const BOTTOM_MARGIN_OFFSET: i32 = 2;

/// Distance of the player's top row from the bottom edge (`height - 4`).
pub const PLAYER_ROW_OFFSET: i32 = 4;

/// Level derived from score: `1 + floor(score / 250)`.
pub fn level_for_score(score: u32) -> u32 {
    1 + score / LEVEL_SCORE_STEP
}

/// Semantic color categories for rendered cells.
///
/// This is a rendering concern only; the simulation never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorTag {
    #[default]
    None,
    Star,
    Player,
    Bullet,
    EnemyTier1,
    EnemyTier2,
    Hud,
    Title,
    PowerUp,
}

impl ColorTag {
    pub const ALL: [ColorTag; 9] = [
        ColorTag::None,
        ColorTag::Star,
        ColorTag::Player,
        ColorTag::Bullet,
        ColorTag::EnemyTier1,
        ColorTag::EnemyTier2,
        ColorTag::Hud,
        ColorTag::Title,
        ColorTag::PowerUp,
    ];
}

/// Discrete key events consumed by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move ship left by one step
    MoveLeft,
    /// Move ship right by one step
    MoveRight,
    /// Fire the bullet fan (subject to cooldown)
    Fire,
    /// Toggle pause state
    Pause,
    /// Leave the game from any screen
    Quit,
    /// Start from the title screen / dismiss the game-over screen
    Confirm,
}

/// Per-tick input, OR-ed across every key event drained this tick.
///
/// Repeated presses of the same key within one tick count once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl FrameInput {
    pub fn from_actions(actions: &[GameAction]) -> Self {
        let mut input = Self::default();
        for action in actions {
            match action {
                GameAction::MoveLeft => input.left = true,
                GameAction::MoveRight => input.right = true,
                GameAction::Fire => input.fire = true,
                GameAction::Pause | GameAction::Quit | GameAction::Confirm => {}
            }
        }
        input
    }
}

/// Best-effort audio cues emitted by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Shoot,
    PlayerHit,
    BossSpawn,
    BossDefeat,
}

impl SoundCue {
    /// Tone frequency in Hz.
    pub fn frequency_hz(&self) -> u32 {
        match self {
            SoundCue::Shoot => 880,
            SoundCue::PlayerHit => 220,
            SoundCue::BossSpawn => 330,
            SoundCue::BossDefeat => 660,
        }
    }

    /// Tone duration in milliseconds.
    pub fn duration_ms(&self) -> u32 {
        match self {
            SoundCue::Shoot => 15,
            SoundCue::PlayerHit => 120,
            SoundCue::BossSpawn => 250,
            SoundCue::BossDefeat => 300,
        }
    }
}
