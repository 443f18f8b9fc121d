//! Entity records. Plain data; behavior lives in [`crate::session`].
//!
//! Ships and enemies are 3 columns wide (centered on `x`) and 2 rows tall
//! (starting at `y`). Bullets, power-ups and stars occupy a single cell.

/// Width of ship and enemy sprites.
pub const SPRITE_W: i32 = 3;
/// Height of ship and enemy sprites.
pub const SPRITE_H: i32 = 2;

/// The player's ship. `y` never changes during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Milliseconds until the next shot; ready once `<= 0`.
    pub cooldown_ms: i32,
}

impl Player {
    pub fn can_fire(&self) -> bool {
        self.cooldown_ms <= 0
    }
}

/// An upward-travelling player bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Row at the start of the current tick; the swept test covers `y0..=y`.
    pub y0: i32,
}

impl Bullet {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, y0: y }
    }
}

/// Enemy toughness tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Basic,
    Tough,
}

impl Tier {
    /// Starting hit points for an ordinary enemy of this tier.
    pub fn hit_points(&self) -> u32 {
        match self {
            Tier::Basic => 1,
            Tier::Tough => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub tier: Tier,
    pub hp: u32,
    pub is_boss: bool,
}

impl Enemy {
    pub fn new(x: i32, y: i32, tier: Tier) -> Self {
        Self {
            x,
            y,
            tier,
            hp: tier.hit_points(),
            is_boss: false,
        }
    }

    /// The boss wears the tough-tier shape with its own hit points.
    pub fn boss(x: i32, y: i32, hp: u32) -> Self {
        Self {
            x,
            y,
            tier: Tier::Tough,
            hp,
            is_boss: true,
        }
    }
}

/// A falling pickup that shortens the fire cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub x: i32,
    pub y: i32,
}

/// Decorative background star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    /// Rows per drift step, 1..=3.
    pub speed: i32,
}
