//! Terminal colors for each [`ColorTag`].
//!
//! Only the 16 named ANSI colors are used so the same palette works for the
//! escape-stream backend and for legacy consoles.

use crossterm::style::Color;

use crate::types::ColorTag;

pub fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::None => Color::Reset,
        ColorTag::Star => Color::DarkGrey,
        ColorTag::Player => Color::White,
        ColorTag::Bullet => Color::Cyan,
        ColorTag::EnemyTier1 => Color::Green,
        ColorTag::EnemyTier2 => Color::Red,
        ColorTag::Hud => Color::Yellow,
        ColorTag::Title => Color::Magenta,
        ColorTag::PowerUp => Color::Blue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_map_to_distinct_colors() {
        let mut seen = Vec::new();
        for tag in ColorTag::ALL {
            let color = tag_color(tag);
            assert!(!seen.contains(&color), "{tag:?} reuses {color:?}");
            seen.push(color);
        }
    }
}
