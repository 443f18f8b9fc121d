//! Best-effort audio cues.
//!
//! A terminal cannot play an arbitrary tone, so [`TerminalBell`] rings the
//! bell for the cues that matter and only logs the tone each cue asks for.
//! Callers treat every sink as fire-and-forget and discard its errors.

use std::io::{self, Write};

use tracing::debug;

use crate::types::SoundCue;

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue) -> io::Result<()>;
}

/// Rings the terminal bell (`BEL`).
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
    /// Ring for shots too; off by default because it fires several times a second.
    ring_on_shoot: bool,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            ring_on_shoot: false,
        }
    }

    pub fn with_ring_on_shoot(mut self, ring: bool) -> Self {
        self.ring_on_shoot = ring;
        self
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) -> io::Result<()> {
        if cue == SoundCue::Shoot && !self.ring_on_shoot {
            return Ok(());
        }
        debug!(
            ?cue,
            frequency_hz = cue.frequency_hz(),
            duration_ms = cue.duration_ms(),
            "bell"
        );
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

/// Discards every cue (`--mute`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: SoundCue) -> io::Result<()> {
        Ok(())
    }
}
