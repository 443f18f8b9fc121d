//! Screen state machine: `Title -> Playing <-> Paused -> GameOver -> Exit`.

use tracing::info;

use crate::core::{GameConfig, GameError, Session, TickCues};
use crate::term::{FinalStats, FrameBuffer, GameView};
use crate::types::{FrameInput, GameAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Title,
    Playing,
    Paused,
    GameOver,
    Exit,
}

/// Owns the session for its lifetime and routes per-tick input to it.
#[derive(Debug)]
pub struct App {
    config: GameConfig,
    phase: Phase,
    session: Option<Session>,
    final_stats: Option<FinalStats>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::Title,
            session: None,
            final_stats: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Score and level of the finished session, once it has ended.
    pub fn final_stats(&self) -> Option<FinalStats> {
        self.final_stats
    }

    /// Apply one tick worth of input.
    ///
    /// `size` is the terminal size sampled this tick. A running session whose
    /// field no longer matches it fails with [`GameError::TerminalResized`].
    pub fn update(
        &mut self,
        actions: &[GameAction],
        elapsed_ms: u32,
        size: (u16, u16),
    ) -> Result<TickCues, GameError> {
        let quit = actions.contains(&GameAction::Quit);
        let confirm = actions.contains(&GameAction::Confirm);

        match self.phase {
            Phase::Title => {
                if quit {
                    self.phase = Phase::Exit;
                } else if confirm {
                    let session = Session::new(self.config.clone(), size.0, size.1)?;
                    info!(width = size.0, height = size.1, "session started");
                    self.session = Some(session);
                    self.phase = Phase::Playing;
                }
                Ok(TickCues::new())
            }
            Phase::Playing | Phase::Paused => {
                if quit {
                    self.finish();
                    self.phase = Phase::Exit;
                    return Ok(TickCues::new());
                }
                self.play(actions, elapsed_ms, size)
            }
            Phase::GameOver => {
                // The last play-field frame has been shown; keep only the stats.
                self.session = None;
                if quit || confirm {
                    self.phase = Phase::Exit;
                }
                Ok(TickCues::new())
            }
            Phase::Exit => Ok(TickCues::new()),
        }
    }

    /// Compose the frame for the current phase into `fb`.
    ///
    /// The tick that ends the session still draws the play-field; the
    /// game-over screen follows from the next tick.
    pub fn render_into(&self, view: &GameView, size: (u16, u16), fb: &mut FrameBuffer) {
        match (self.phase, &self.session) {
            (Phase::Playing | Phase::Paused | Phase::GameOver, Some(session)) => {
                view.render_into(session, fb)
            }
            (Phase::GameOver, None) => {
                let stats = self.final_stats.unwrap_or(FinalStats { score: 0, level: 1 });
                view.render_game_over_into(size.0, size.1, stats, fb);
            }
            _ => view.render_title_into(size.0, size.1, fb),
        }
    }

    fn play(
        &mut self,
        actions: &[GameAction],
        elapsed_ms: u32,
        size: (u16, u16),
    ) -> Result<TickCues, GameError> {
        let Some(session) = self.session.as_mut() else {
            self.phase = Phase::Title;
            return Ok(TickCues::new());
        };

        let (width, height) = (session.width() as u16, session.height() as u16);
        if size != (width, height) {
            return Err(GameError::TerminalResized {
                width,
                height,
                new_width: size.0,
                new_height: size.1,
            });
        }

        for _ in actions.iter().filter(|a| **a == GameAction::Pause) {
            session.toggle_pause();
        }

        let cues = session.step(elapsed_ms, FrameInput::from_actions(actions));

        if session.game_over() {
            self.final_stats = Some(FinalStats::from(&*session));
            self.phase = Phase::GameOver;
        } else if session.paused() {
            self.phase = Phase::Paused;
        } else {
            self.phase = Phase::Playing;
        }
        Ok(cues)
    }

    /// Record the final stats and drop the session.
    fn finish(&mut self) {
        if let Some(session) = self.session.take() {
            self.final_stats = Some(FinalStats::from(&session));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Enemy, Tier};
    use crate::types::SoundCue;

    const SIZE: (u16, u16) = (80, 30);

    fn started() -> App {
        let mut app = App::new(GameConfig::arcade().with_seed(3));
        app.update(&[GameAction::Confirm], 33, SIZE).unwrap();
        assert_eq!(app.phase(), Phase::Playing);
        app
    }

    #[test]
    fn title_ignores_gameplay_keys() {
        let mut app = App::new(GameConfig::default());
        app.update(&[GameAction::Fire, GameAction::Pause, GameAction::MoveLeft], 33, SIZE)
            .unwrap();
        assert_eq!(app.phase(), Phase::Title);
        assert!(app.session().is_none());
    }

    #[test]
    fn title_quit_exits_without_session() {
        let mut app = App::new(GameConfig::default());
        app.update(&[GameAction::Quit], 33, SIZE).unwrap();
        assert_eq!(app.phase(), Phase::Exit);
        assert!(app.final_stats().is_none());
    }

    #[test]
    fn start_refuses_small_terminal() {
        let mut app = App::new(GameConfig::default());
        let err = app.update(&[GameAction::Confirm], 33, (40, 20)).unwrap_err();
        assert!(matches!(err, GameError::FieldTooSmall { .. }));
        assert_eq!(app.phase(), Phase::Title);
    }

    #[test]
    fn pause_toggles_and_freezes_clock() {
        let mut app = started();
        app.update(&[GameAction::Pause], 33, SIZE).unwrap();
        assert_eq!(app.phase(), Phase::Paused);
        let clock = app.session().unwrap().clock_ms();

        app.update(&[], 33, SIZE).unwrap();
        assert_eq!(app.session().unwrap().clock_ms(), clock);

        app.update(&[GameAction::Pause], 33, SIZE).unwrap();
        assert_eq!(app.phase(), Phase::Playing);
        assert_eq!(app.session().unwrap().clock_ms(), clock + 33);
    }

    #[test]
    fn quit_is_honored_while_paused() {
        let mut app = started();
        app.update(&[GameAction::Pause], 33, SIZE).unwrap();
        app.update(&[GameAction::Quit], 33, SIZE).unwrap();
        assert_eq!(app.phase(), Phase::Exit);
        assert!(app.session().is_none());
        assert!(app.final_stats().is_some());
    }

    #[test]
    fn resize_mid_session_is_fatal() {
        let mut app = started();
        let err = app.update(&[], 33, (100, 40)).unwrap_err();
        assert_eq!(
            err,
            GameError::TerminalResized {
                width: 80,
                height: 30,
                new_width: 100,
                new_height: 40,
            }
        );
    }

    #[test]
    fn game_over_waits_for_confirm() {
        let mut app = started();
        let session = app.session_mut().unwrap();
        session.award(120);
        for _ in 0..3 {
            session.lose_life();
        }
        app.update(&[], 33, SIZE).unwrap();
        assert_eq!(app.phase(), Phase::GameOver);
        assert_eq!(
            app.final_stats(),
            Some(FinalStats {
                score: 120,
                level: 1
            })
        );

        app.update(&[GameAction::Fire], 33, SIZE).unwrap();
        assert_eq!(app.phase(), Phase::GameOver);
        app.update(&[GameAction::Confirm], 33, SIZE).unwrap();
        assert_eq!(app.phase(), Phase::Exit);
    }

    #[test]
    fn final_tick_still_draws_the_play_field() {
        let view = GameView::new();
        let mut fb = FrameBuffer::new(0, 0);
        let mut app = started();

        let session = app.session_mut().unwrap();
        session.lose_life();
        session.lose_life();
        let (x, y) = (session.player().x, session.player().y);
        session.enemies_mut().push(Enemy::new(x, y, Tier::Basic));

        let cues = app.update(&[], 33, SIZE).unwrap();
        assert_eq!(cues.as_slice(), &[SoundCue::PlayerHit]);
        assert_eq!(app.phase(), Phase::GameOver);
        app.render_into(&view, SIZE, &mut fb);
        assert!(fb.row_text(0).contains("LIVES 0"));

        app.update(&[], 33, SIZE).unwrap();
        assert!(app.session().is_none());
        app.render_into(&view, SIZE, &mut fb);
        assert!((0..SIZE.1).any(|y| fb.row_text(y).contains("GAME  OVER")));
        assert!(!fb.row_text(0).contains("LIVES"));
    }

    #[test]
    fn render_follows_phase() {
        let view = GameView::new();
        let mut fb = FrameBuffer::new(0, 0);

        let mut app = App::new(GameConfig::default());
        app.render_into(&view, SIZE, &mut fb);
        assert!((0..SIZE.1).any(|y| fb.row_text(y).contains("Press ENTER to start")));

        app.update(&[GameAction::Confirm], 33, SIZE).unwrap();
        app.render_into(&view, SIZE, &mut fb);
        assert!(fb.row_text(0).contains("SCORE"));
        assert_eq!(fb.cells().len(), 80 * 30);
    }
}
