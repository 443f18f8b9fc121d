//! Fixed-timestep loop driving an [`App`] against a [`Frontend`].

use std::io;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::app::{App, Phase};
use crate::clock::{frame_sleep, sanitize_elapsed};
use crate::input::ActionBatch;
use crate::term::{FinalStats, FrameBuffer, GameView};
use crate::types::SoundCue;

/// Everything the loop needs from the outside world.
pub trait Frontend {
    /// Take over the screen before the first tick.
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    /// Give the screen back. Runs on every exit path, even when `enter` failed.
    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    /// Monotonic-ish wall clock in milliseconds. May jump backwards.
    fn now_ms(&mut self) -> i64;

    /// Drain pending input without blocking.
    fn poll_actions(&mut self) -> Result<ActionBatch>;

    /// Current terminal size as `(columns, rows)`.
    fn size(&mut self) -> Result<(u16, u16)>;

    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;

    /// Best-effort audio. The loop discards the result.
    fn play(&mut self, cue: SoundCue) -> io::Result<()>;

    fn sleep(&mut self, duration: Duration);
}

/// Enter the frontend, run the loop, and always exit the frontend again.
pub fn run_session<F: Frontend>(
    app: &mut App,
    frontend: &mut F,
    frame_ms: u32,
) -> Result<Option<FinalStats>> {
    let result = frontend
        .enter()
        .and_then(|()| run_loop(app, frontend, frame_ms));

    // Always try to restore terminal state.
    if let Err(err) = frontend.exit() {
        warn!(error = %err, "failed to restore the terminal");
    }
    result
}

/// Run until the app reaches [`Phase::Exit`] or a fatal error occurs.
///
/// Returns the final stats when a session was played.
pub fn run_loop<F: Frontend>(
    app: &mut App,
    frontend: &mut F,
    frame_ms: u32,
) -> Result<Option<FinalStats>> {
    let view = GameView::new();
    let frame = Duration::from_millis(frame_ms as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = frontend.now_ms();
    let mut phase = app.phase();

    while app.phase() != Phase::Exit {
        let start = frontend.now_ms();
        let elapsed = sanitize_elapsed(start - last, frame_ms);
        last = start;

        let actions = frontend.poll_actions()?;
        let size = frontend.size()?;
        let cues = app.update(&actions, elapsed, size)?;
        for cue in cues {
            let _ = frontend.play(cue);
        }

        if app.phase() != phase {
            debug!(from = ?phase, to = ?app.phase(), "phase changed");
            phase = app.phase();
        }
        if phase == Phase::Exit {
            break;
        }

        app.render_into(&view, size, &mut fb);
        frontend.present(&fb)?;

        let spent = (frontend.now_ms() - start).max(0) as u64;
        frontend.sleep(frame_sleep(frame, Duration::from_millis(spent)));
    }

    if let Some(stats) = app.final_stats() {
        info!(score = stats.score, level = stats.level, "session finished");
    }
    Ok(app.final_stats())
}
