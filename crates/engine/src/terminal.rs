//! The real terminal as a [`Frontend`].

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::input::{drain_actions, ActionBatch};
use crate::runner::Frontend;
use crate::term::{terminal_size, AudioSink, FrameBuffer, TerminalRenderer};
use crate::types::SoundCue;

pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    audio: Box<dyn AudioSink>,
    epoch: Instant,
}

impl TerminalFrontend {
    pub fn new(renderer: TerminalRenderer, audio: Box<dyn AudioSink>) -> Self {
        Self {
            renderer,
            audio,
            epoch: Instant::now(),
        }
    }
}

impl Frontend for TerminalFrontend {
    fn enter(&mut self) -> Result<()> {
        self.renderer.enter().context("failed to set up the terminal")
    }

    fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn now_ms(&mut self) -> i64 {
        i64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(i64::MAX)
    }

    fn poll_actions(&mut self) -> Result<ActionBatch> {
        drain_actions().context("failed to read terminal input")
    }

    fn size(&mut self) -> Result<(u16, u16)> {
        terminal_size().context("failed to query terminal size")
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.renderer.draw(fb)
    }

    fn play(&mut self, cue: SoundCue) -> io::Result<()> {
        self.audio.play(cue)
    }

    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
