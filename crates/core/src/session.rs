//! Session state and the per-tick simulation step.
//!
//! A [`Session`] owns every entity collection plus score, lives and the
//! timing accumulators. The game loop creates one when play starts, calls
//! [`Session::step`] once per unpaused tick and drops it after game over.
//!
//! The stages inside `step` run in a fixed order; later stages read positions
//! written by earlier ones in the same tick (bullets are swept from the `y0`
//! snapshot taken during bullet movement, collisions see moved enemies, and so
//! on).

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::collision::{bullet_hits_enemy, rect_hit, sprites_hit};
use crate::config::GameConfig;
use crate::entities::{Bullet, Enemy, Player, PowerUp, Star, Tier, SPRITE_H, SPRITE_W};
use crate::error::{check_field_size, GameError};
use crate::rng::SimpleRng;
use crate::types::{
    level_for_score, FrameInput, SoundCue, BOTTOM_MARGIN_OFFSET, PLAYER_ROW_OFFSET, TOP_MARGIN,
};

/// Upper bound on cues reported for one tick; extras are dropped.
pub const MAX_CUES_PER_TICK: usize = 8;

/// Audio cues produced by one tick.
pub type TickCues = ArrayVec<SoundCue, MAX_CUES_PER_TICK>;

/// Leftmost column the ship's center may occupy.
pub const PLAYER_MIN_X: i32 = 3;

/// Complete state of one play session.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    width: i32,
    height: i32,
    player: Player,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    power_ups: Vec<PowerUp>,
    stars: Vec<Star>,
    score: u32,
    /// Last level seen by the transition check. Always equal to
    /// `level_for_score(score)` between ticks.
    level: u32,
    lives: u32,
    paused: bool,
    game_over: bool,
    boss_spawned: bool,
    /// Simulation time, advanced only by unpaused ticks.
    clock_ms: u64,
    power_until_ms: u64,
    star_acc_ms: u32,
    spawn_acc: f32,
    power_up_acc: f32,
    enemy_acc_ms: u32,
    power_up_move_acc_ms: u32,
    spawn_rate: f32,
    enemy_step_ms: u32,
    rng: SimpleRng,
}

impl Session {
    /// Start a session on a `width` x `height` field.
    ///
    /// Fails before creating any state when the field is below the minimum size.
    pub fn new(config: GameConfig, width: u16, height: u16) -> Result<Self, GameError> {
        check_field_size(width, height)?;

        let width = width as i32;
        let height = height as i32;
        let mut rng = SimpleRng::new(config.seed);

        let mut stars = Vec::with_capacity(config.star_count);
        for _ in 0..config.star_count {
            stars.push(Star {
                x: rng.range_inclusive(0, width - 1),
                y: rng.range_inclusive(1, height - BOTTOM_MARGIN_OFFSET - 1),
                speed: rng.range_inclusive(1, 3),
            });
        }

        let level = level_for_score(0);
        let session = Self {
            player: Player {
                x: width / 2,
                y: height - PLAYER_ROW_OFFSET,
                cooldown_ms: 0,
            },
            bullets: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            stars,
            score: 0,
            level,
            lives: config.lives,
            paused: false,
            game_over: config.lives == 0,
            boss_spawned: false,
            clock_ms: 0,
            power_until_ms: 0,
            star_acc_ms: 0,
            spawn_acc: 0.0,
            power_up_acc: 0.0,
            enemy_acc_ms: 0,
            power_up_move_acc_ms: 0,
            spawn_rate: config.spawn_rate_for_level(level),
            enemy_step_ms: config.enemy_step_for_level(level),
            rng,
            width,
            height,
            config,
        };
        info!(
            width,
            height,
            lives = session.lives,
            seed = session.config.seed,
            "session started"
        );
        Ok(session)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn power_ups_mut(&mut self) -> &mut Vec<PowerUp> {
        &mut self.power_ups
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current level, derived from score.
    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn boss_spawned(&self) -> bool {
        self.boss_spawned
    }

    pub fn boss_alive(&self) -> bool {
        self.enemies.iter().any(|e| e.is_boss)
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn power_until_ms(&self) -> u64 {
        self.power_until_ms
    }

    pub fn power_active(&self) -> bool {
        self.clock_ms < self.power_until_ms
    }

    /// Milliseconds left in the power-active window (0 when inactive).
    pub fn power_remaining_ms(&self) -> u64 {
        self.power_until_ms.saturating_sub(self.clock_ms)
    }

    /// Current enemy step period.
    pub fn enemy_step_ms(&self) -> u32 {
        self.enemy_step_ms
    }

    /// Rightmost column the ship's center may occupy.
    pub fn player_max_x(&self) -> i32 {
        self.width - 4
    }

    /// Row at which enemies and power-ups leave the field.
    pub fn bottom_margin(&self) -> i32 {
        self.height - BOTTOM_MARGIN_OFFSET
    }

    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
    }

    /// Add points. Score never decreases.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Open (or restart) the power-active window at `now_ms`.
    ///
    /// A second pickup resets the expiry rather than extending it.
    pub fn activate_power(&mut self, now_ms: u64) {
        self.power_until_ms = now_ms + self.config.power_duration_ms;
    }

    /// Lose one life; marks game over when none remain.
    ///
    /// No-op once the session is over, so lives never go below zero.
    pub fn lose_life(&mut self) {
        if self.game_over {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        debug!(lives = self.lives, "life lost");
        if self.lives == 0 {
            self.game_over = true;
            info!(score = self.score, level = self.level(), "game over");
        }
    }

    /// Advance the simulation by one tick of `elapsed_ms`.
    ///
    /// Does nothing while paused or after game over.
    pub fn step(&mut self, elapsed_ms: u32, input: FrameInput) -> TickCues {
        let mut cues = TickCues::new();
        if self.paused || self.game_over {
            return cues;
        }

        self.clock_ms += elapsed_ms as u64;
        let elapsed_s = elapsed_ms as f32 / 1000.0;

        self.move_player(input);
        self.fire_control(elapsed_ms, input.fire, &mut cues);
        self.drift_stars(elapsed_ms);
        self.spawn_enemies(elapsed_s);
        self.spawn_power_ups(elapsed_s);
        self.move_bullets();
        self.move_enemies(elapsed_ms);
        self.move_power_ups(elapsed_ms);
        self.collect_power_ups();
        self.resolve_bullet_hits(&mut cues);
        self.resolve_player_hits(&mut cues);
        self.update_level(&mut cues);

        cues
    }

    fn move_player(&mut self, input: FrameInput) {
        // Both directions in one tick cancel out.
        if input.right {
            self.player.x += self.config.move_step;
        }
        if input.left {
            self.player.x -= self.config.move_step;
        }
        self.player.x = self.player.x.clamp(PLAYER_MIN_X, self.player_max_x());
    }

    fn fire_control(&mut self, elapsed_ms: u32, fire: bool, cues: &mut TickCues) {
        self.player.cooldown_ms = self
            .player
            .cooldown_ms
            .saturating_sub(elapsed_ms.min(i32::MAX as u32) as i32);
        if !fire || !self.player.can_fire() {
            return;
        }

        let y = self.player.y - 1;
        for &offset in self.config.bullet_offsets {
            let x = self.player.x + offset;
            if (1..=self.width - 2).contains(&x) {
                self.bullets.push(Bullet::new(x, y));
            }
        }

        self.player.cooldown_ms = if self.power_active() {
            self.config.powered_cooldown_ms
        } else {
            self.config.fire_cooldown_ms
        };
        let _ = cues.try_push(SoundCue::Shoot);
    }

    fn drift_stars(&mut self, elapsed_ms: u32) {
        let threshold = self.config.star_drift_ms.max(1);
        self.star_acc_ms = self.star_acc_ms.saturating_add(elapsed_ms);
        if self.star_acc_ms < threshold {
            return;
        }
        let steps = self.star_acc_ms / threshold;
        self.star_acc_ms %= threshold;

        for _ in 0..steps {
            for star in &mut self.stars {
                star.y += star.speed;
                if star.y >= self.height {
                    star.y = 0;
                    star.x = self.rng.range_inclusive(0, self.width - 1);
                    star.speed = self.rng.range_inclusive(1, 3);
                }
            }
        }
    }

    fn spawn_enemies(&mut self, elapsed_s: f32) {
        if self.boss_alive() {
            return;
        }
        self.spawn_acc += elapsed_s * self.spawn_rate;
        while self.spawn_acc >= 1.0 {
            self.spawn_acc -= 1.0;
            let x = self.rng.range_inclusive(2, self.width - 3);
            let tier = if self.rng.chance(self.config.tier2_chance) {
                Tier::Tough
            } else {
                Tier::Basic
            };
            self.enemies.push(Enemy::new(x, TOP_MARGIN, tier));
        }
    }

    fn spawn_power_ups(&mut self, elapsed_s: f32) {
        if !self.config.power_ups_enabled {
            return;
        }
        self.power_up_acc += elapsed_s * self.config.power_up_rate;
        if self.power_up_acc < 1.0 {
            return;
        }
        self.power_up_acc -= 1.0;
        if self.rng.chance(self.config.power_up_gate) {
            let x = self.rng.range_inclusive(2, self.width - 3);
            self.power_ups.push(PowerUp { x, y: TOP_MARGIN });
        }
    }

    fn move_bullets(&mut self) {
        let speed = self.config.bullet_speed;
        for bullet in &mut self.bullets {
            bullet.y0 = bullet.y;
            bullet.y -= speed;
        }
        self.bullets.retain(|b| b.y >= TOP_MARGIN);
    }

    fn move_enemies(&mut self, elapsed_ms: u32) {
        let period = self.enemy_step_ms.max(1);
        self.enemy_acc_ms = self.enemy_acc_ms.saturating_add(elapsed_ms);
        let mut steps = 0;
        while self.enemy_acc_ms >= period {
            self.enemy_acc_ms -= period;
            steps += 1;
        }
        if steps == 0 {
            return;
        }
        for enemy in &mut self.enemies {
            enemy.y += steps;
        }

        let bottom = self.bottom_margin();
        let mut i = 0;
        while i < self.enemies.len() {
            if self.enemies[i].y >= bottom {
                self.enemies.remove(i);
                self.lose_life();
            } else {
                i += 1;
            }
        }
    }

    fn move_power_ups(&mut self, elapsed_ms: u32) {
        let period = self.config.power_up_step_ms.max(1);
        self.power_up_move_acc_ms = self.power_up_move_acc_ms.saturating_add(elapsed_ms);
        let mut steps = 0;
        while self.power_up_move_acc_ms >= period {
            self.power_up_move_acc_ms -= period;
            steps += 1;
        }
        if steps == 0 {
            return;
        }
        for power_up in &mut self.power_ups {
            power_up.y += steps;
        }
        let bottom = self.bottom_margin();
        self.power_ups.retain(|p| p.y < bottom);
    }

    fn collect_power_ups(&mut self) {
        let px = self.player.x - 1;
        let py = self.player.y;
        let mut i = 0;
        while i < self.power_ups.len() {
            let p = self.power_ups[i];
            if rect_hit(px, py, SPRITE_W, SPRITE_H, p.x, p.y, 1, 1) {
                self.power_ups.remove(i);
                self.activate_power(self.clock_ms);
                debug!(until_ms = self.power_until_ms, "power-up collected");
            } else {
                i += 1;
            }
        }
    }

    fn resolve_bullet_hits(&mut self, cues: &mut TickCues) {
        let mut bi = 0;
        while bi < self.bullets.len() {
            let bullet = self.bullets[bi];
            let Some(ei) = self
                .enemies
                .iter()
                .position(|e| bullet_hits_enemy(&bullet, e))
            else {
                bi += 1;
                continue;
            };

            let enemy = &mut self.enemies[ei];
            enemy.hp = enemy.hp.saturating_sub(1);
            if enemy.hp == 0 {
                let dead = self.enemies.remove(ei);
                let points = match dead.tier {
                    Tier::Basic => self.config.score_tier1_kill,
                    Tier::Tough => self.config.score_tier2_kill,
                };
                self.award(points);
                if dead.is_boss {
                    self.award(self.config.score_boss_bonus);
                    let _ = cues.try_push(SoundCue::BossDefeat);
                    info!(score = self.score, "boss defeated");
                }
            } else {
                self.award(self.config.score_partial_hit);
            }
            self.bullets.remove(bi);
        }
    }

    fn resolve_player_hits(&mut self, cues: &mut TickCues) {
        let (px, py) = (self.player.x, self.player.y);
        let mut i = 0;
        while i < self.enemies.len() {
            let e = self.enemies[i];
            if sprites_hit(px, py, e.x, e.y) {
                self.enemies.remove(i);
                let _ = cues.try_push(SoundCue::PlayerHit);
                self.lose_life();
            } else {
                i += 1;
            }
        }
    }

    fn update_level(&mut self, cues: &mut TickCues) {
        let level = level_for_score(self.score);
        if level == self.level {
            return;
        }
        let previous = self.level;
        self.level = level;
        debug!(previous, level, score = self.score, "level changed");

        if self.config.boss_enabled && !self.boss_spawned && previous < 2 && level >= 2 {
            self.enemies
                .push(Enemy::boss(self.width / 2, TOP_MARGIN, self.config.boss_hp));
            self.boss_spawned = true;
            let _ = cues.try_push(SoundCue::BossSpawn);
            info!(hp = self.config.boss_hp, "boss spawned");
        }

        self.spawn_rate = self.config.spawn_rate_for_level(level);
        self.enemy_step_ms = self.config.enemy_step_for_level(level);
    }
}
