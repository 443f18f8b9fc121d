//! Gameplay tunables.
//!
//! `GameConfig::arcade()` is the canonical ruleset (three-bullet fan, power-ups,
//! one boss). `GameConfig::classic()` is the stripped-down variant: a single
//! bullet, one-cell moves, no power-ups and no boss.

/// Every knob the simulation reads.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Lives at session start.
    pub lives: u32,
    /// Cells moved per tick while a direction key is down.
    pub move_step: i32,
    /// Horizontal offsets of the bullet fan, relative to the ship's center.
    pub bullet_offsets: &'static [i32],
    /// Rows a bullet travels per tick.
    pub bullet_speed: i32,
    /// Fire cooldown without a power-up.
    pub fire_cooldown_ms: i32,
    /// Fire cooldown while a power-up is active. Must be below `fire_cooldown_ms`.
    pub powered_cooldown_ms: i32,
    /// Length of the power-active window after a pickup.
    pub power_duration_ms: u64,

    pub star_count: usize,
    /// Accumulated time needed for one starfield drift step.
    pub star_drift_ms: u32,

    /// Enemy spawns per second at level 1.
    pub spawn_rate_base: f32,
    /// Extra spawns per second for each level above 1.
    pub spawn_rate_per_level: f32,
    pub spawn_rate_max: f32,
    /// Probability that a spawned enemy is tier 2.
    pub tier2_chance: f32,

    /// Enemy step period at level 1.
    pub enemy_step_ms: u32,
    /// Period reduction for each level above 1.
    pub enemy_step_per_level_ms: u32,
    pub enemy_step_min_ms: u32,

    pub power_ups_enabled: bool,
    /// Power-up accumulator growth per second.
    pub power_up_rate: f32,
    /// Chance that a full accumulator actually drops a power-up.
    pub power_up_gate: f32,
    pub power_up_step_ms: u32,

    pub boss_enabled: bool,
    pub boss_hp: u32,

    pub score_tier1_kill: u32,
    pub score_tier2_kill: u32,
    /// Awarded for a hit that does not destroy the enemy.
    pub score_partial_hit: u32,
    /// Extra bonus on top of the tier-2 kill award when the boss dies.
    pub score_boss_bonus: u32,

    /// RNG seed for spawns and the starfield.
    pub seed: u32,
}

impl GameConfig {
    pub fn arcade() -> Self {
        Self {
            lives: 3,
            move_step: 2,
            bullet_offsets: &[-1, 0, 1],
            bullet_speed: 2,
            fire_cooldown_ms: 220,
            powered_cooldown_ms: 110,
            power_duration_ms: 6000,
            star_count: 48,
            star_drift_ms: 60,
            spawn_rate_base: 0.7,
            spawn_rate_per_level: 0.25,
            spawn_rate_max: 3.0,
            tier2_chance: 0.18,
            enemy_step_ms: 480,
            enemy_step_per_level_ms: 50,
            enemy_step_min_ms: 120,
            power_ups_enabled: true,
            power_up_rate: 0.12,
            power_up_gate: 0.5,
            power_up_step_ms: 200,
            boss_enabled: true,
            boss_hp: 18,
            score_tier1_kill: 20,
            score_tier2_kill: 40,
            score_partial_hit: 5,
            score_boss_bonus: 500,
            seed: 1,
        }
    }

    pub fn classic() -> Self {
        Self {
            move_step: 1,
            bullet_offsets: &[0],
            power_ups_enabled: false,
            boss_enabled: false,
            ..Self::arcade()
        }
    }

    pub fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Enemy spawns per second at `level`, clamped to `spawn_rate_max`.
    pub fn spawn_rate_for_level(&self, level: u32) -> f32 {
        let bonus = level.saturating_sub(1) as f32 * self.spawn_rate_per_level;
        (self.spawn_rate_base + bonus).min(self.spawn_rate_max)
    }

    /// Enemy step period at `level`, floored at `enemy_step_min_ms`.
    pub fn enemy_step_for_level(&self, level: u32) -> u32 {
        let cut = level
            .saturating_sub(1)
            .saturating_mul(self.enemy_step_per_level_ms);
        self.enemy_step_ms
            .saturating_sub(cut)
            .max(self.enemy_step_min_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::arcade()
    }
}
