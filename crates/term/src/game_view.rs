//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Enemy, Session, Tier};
use crate::fb::FrameBuffer;
use crate::types::ColorTag;

const PLAYER_TOP: &str = "^";
const PLAYER_BASE: &str = "/#\\";
const BASIC_TOP: &str = "<V>";
const BASIC_BASE: &str = "/ \\";
const TOUGH_TOP: &str = "{O}";
const TOUGH_BASE: &str = "/W\\";
const BOSS_TOP: &str = "[@]";
const BOSS_BASE: &str = "\\M/";

const CONTROLS: &str = "Left/Right or A/D move   Space fire   P pause   Q quit";

const TITLE_ART: [&str; 3] = [
    "+================================+",
    "|    S T A R    S H O O T E R    |",
    "+================================+",
];

/// Session summary shown on the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalStats {
    pub score: u32,
    pub level: u32,
}

impl From<&Session> for FinalStats {
    fn from(session: &Session) -> Self {
        Self {
            score: session.score(),
            level: session.level(),
        }
    }
}

/// A lightweight terminal renderer for the shooter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the play-field, HUD and pause overlay into `fb`.
    ///
    /// The framebuffer is resized to the session's field and fully redrawn.
    pub fn render_into(&self, session: &Session, fb: &mut FrameBuffer) {
        fb.resize(session.width() as u16, session.height() as u16);
        fb.clear();

        for star in session.stars() {
            let ch = if star.speed >= 3 { '+' } else { '.' };
            fb.set(star.x, star.y, ch, ColorTag::Star);
        }
        for p in session.power_ups() {
            fb.set(p.x, p.y, '$', ColorTag::PowerUp);
        }
        for enemy in session.enemies() {
            draw_enemy(fb, enemy);
        }
        for b in session.bullets() {
            fb.set(b.x, b.y, '|', ColorTag::Bullet);
        }

        let p = session.player();
        fb.draw_text(p.x, p.y, PLAYER_TOP, ColorTag::Player);
        fb.draw_text(p.x - 1, p.y + 1, PLAYER_BASE, ColorTag::Player);

        self.draw_hud(fb, session);

        if session.paused() {
            let mid = session.height() / 2;
            fb.draw_text_centered(mid - 1, "=== PAUSED ===", ColorTag::Title);
            fb.draw_text_centered(mid + 1, "press P to resume", ColorTag::Hud);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session) -> FrameBuffer {
        let mut fb = FrameBuffer::new(session.width() as u16, session.height() as u16);
        self.render_into(session, &mut fb);
        fb
    }

    /// Static title screen.
    pub fn render_title_into(&self, width: u16, height: u16, fb: &mut FrameBuffer) {
        fb.resize(width, height);
        fb.clear();

        let top = (height as i32 - 14).max(0) / 2;
        for (i, line) in TITLE_ART.iter().enumerate() {
            fb.draw_text_centered(top + i as i32, line, ColorTag::Title);
        }

        let legend = top + TITLE_ART.len() as i32 + 1;
        fb.draw_text_centered(legend, CONTROLS, ColorTag::Hud);

        let sprites = legend + 2;
        let col = (width as i32 - 36) / 2;
        let rows: [(&str, &str, ColorTag); 4] = [
            (BASIC_TOP, "basic enemy   20 pts", ColorTag::EnemyTier1),
            (TOUGH_TOP, "tough enemy   5 + 40 pts", ColorTag::EnemyTier2),
            (BOSS_TOP, "boss          appears at level 2", ColorTag::EnemyTier2),
            ("$", "power-up      faster fire", ColorTag::PowerUp),
        ];
        for (i, (sprite, text, tag)) in rows.iter().enumerate() {
            let y = sprites + i as i32;
            fb.draw_text(col, y, sprite, *tag);
            fb.draw_text(col + 5, y, text, ColorTag::Star);
        }

        fb.draw_text_centered(
            sprites + rows.len() as i32 + 2,
            "Press ENTER to start, Q to quit",
            ColorTag::Player,
        );
    }

    /// Static game-over screen.
    pub fn render_game_over_into(
        &self,
        width: u16,
        height: u16,
        stats: FinalStats,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(width, height);
        fb.clear();

        let mid = height as i32 / 2;
        fb.draw_text_centered(mid - 3, "+--------------------+", ColorTag::EnemyTier2);
        fb.draw_text_centered(mid - 2, "|     GAME  OVER     |", ColorTag::EnemyTier2);
        fb.draw_text_centered(mid - 1, "+--------------------+", ColorTag::EnemyTier2);
        fb.draw_text_centered(
            mid + 1,
            &format!("Final score: {:>6}", stats.score),
            ColorTag::Hud,
        );
        fb.draw_text_centered(
            mid + 2,
            &format!("Level reached: {:>4}", stats.level),
            ColorTag::Hud,
        );
        fb.draw_text_centered(mid + 4, "Press ENTER or Q to exit", ColorTag::Player);
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, session: &Session) {
        let left = format!(
            "SCORE {:>6}   LEVEL {:>2}   LIVES {}",
            session.score(),
            session.level(),
            session.lives()
        );
        fb.draw_text(1, 0, &left, ColorTag::Hud);

        let remaining = session.power_remaining_ms();
        if remaining > 0 {
            let power = format!("POWER {:>2}s", remaining.div_ceil(1000));
            let x = fb.width() as i32 - power.len() as i32 - 1;
            fb.draw_text(x, 0, &power, ColorTag::PowerUp);
        }

        fb.draw_text(1, session.height() - 1, CONTROLS, ColorTag::Star);
    }
}

fn draw_enemy(fb: &mut FrameBuffer, enemy: &Enemy) {
    let (top, base, tag) = match (enemy.is_boss, enemy.tier) {
        (true, _) => (BOSS_TOP, BOSS_BASE, ColorTag::EnemyTier2),
        (false, Tier::Basic) => (BASIC_TOP, BASIC_BASE, ColorTag::EnemyTier1),
        (false, Tier::Tough) => (TOUGH_TOP, TOUGH_BASE, ColorTag::EnemyTier2),
    };
    fb.draw_text(enemy.x - 1, enemy.y, top, tag);
    fb.draw_text(enemy.x - 1, enemy.y + 1, base, tag);
}
