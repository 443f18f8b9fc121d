//! Hit tests on the integer grid.
//!
//! Spans are inclusive: a rectangle at `x` with width `w` covers columns
//! `x..=x+w-1`. Rectangles sharing an edge cell overlap.

use crate::entities::{Bullet, Enemy, SPRITE_H, SPRITE_W};

/// Axis-aligned rectangle overlap.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn rect_hit(ax: i32, ay: i32, aw: i32, ah: i32, bx: i32, by: i32, bw: i32, bh: i32) -> bool {
    !(ax + aw - 1 < bx || bx + bw - 1 < ax || ay + ah - 1 < by || by + bh - 1 < ay)
}

/// Swept bullet-vs-enemy test.
///
/// The bullet covers column `x` and every row between `y0` and `y` this tick,
/// so a multi-row jump cannot skip over a 2-row enemy.
#[inline]
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    let top = bullet.y0.min(bullet.y);
    let bottom = bullet.y0.max(bullet.y);
    let in_column = bullet.x >= enemy.x - 1 && bullet.x <= enemy.x + 1;
    in_column && top <= enemy.y + 1 && bottom >= enemy.y
}

/// Overlap of two 3x2 sprites centered on `ax` / `bx`.
#[inline]
pub fn sprites_hit(ax: i32, ay: i32, bx: i32, by: i32) -> bool {
    rect_hit(
        ax - 1,
        ay,
        SPRITE_W,
        SPRITE_H,
        bx - 1,
        by,
        SPRITE_W,
        SPRITE_H,
    )
}
