//! Terminal shooter runner (default binary).
//!
//! Parses the command line, checks the terminal, then hands the screen to the
//! fixed-timestep engine. The terminal is restored on every exit path,
//! including panics.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::EnvFilter;

use tui_shooter::core::{check_field_size, GameConfig};
use tui_shooter::engine::{run_session, App, TerminalFrontend};
use tui_shooter::term::{
    detect_rich_color, restore_terminal, terminal_size, AudioSink, RenderMode, Silent,
    TerminalBell, TerminalRenderer,
};
use tui_shooter::types::FRAME_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// Fan fire, power-ups and a boss
    Arcade,
    /// Single bullet, one-cell moves, no power-ups or boss
    Classic,
}

#[derive(Parser)]
#[command(name = "tui-shooter")]
#[command(about = "Arcade shooter in the terminal")]
struct Args {
    /// Rule preset
    #[arg(long, value_enum, default_value_t = Preset::Arcade)]
    preset: Preset,

    /// Starting lives
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=9))]
    lives: Option<u32>,

    /// RNG seed; defaults to the current time
    #[arg(long)]
    seed: Option<u32>,

    /// Force the cursor-positioned renderer even on rich-color terminals
    #[arg(long)]
    plain: bool,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,

    /// Ring the bell on every shot as well
    #[arg(long, conflicts_with = "mute")]
    bell_on_shoot: bool,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Target frames per second
    #[arg(long, value_parser = clap::value_parser!(u32).range(10..=120))]
    fps: Option<u32>,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = match self.preset {
            Preset::Arcade => GameConfig::arcade(),
            Preset::Classic => GameConfig::classic(),
        };
        if let Some(lives) = self.lives {
            config = config.with_lives(lives);
        }
        config.with_seed(self.seed.unwrap_or_else(time_seed))
    }

    fn frame_ms(&self) -> u32 {
        self.fps.map_or(FRAME_MS, |fps| 1000 / fps)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let (width, height) = terminal_size()?;
    check_field_size(width, height)?;

    let config = args.config();
    tracing::info!(preset = ?args.preset, seed = config.seed, width, height, "starting");

    let mode = if args.plain {
        RenderMode::RunGrouped
    } else {
        RenderMode::for_capability(detect_rich_color())
    };
    let audio: Box<dyn AudioSink> = if args.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::new().with_ring_on_shoot(args.bell_on_shoot))
    };

    install_panic_hook();
    let mut frontend = TerminalFrontend::new(TerminalRenderer::new(mode), audio);
    let mut app = App::new(config);

    match run_session(&mut app, &mut frontend, args.frame_ms()) {
        Ok(Some(stats)) => {
            println!("Final score: {} (level {})", stats.score, stats.level);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(err) => {
            tracing::error!(error = %err, "session aborted");
            eprintln!("error: {err:#}");
            wait_for_enter();
            std::process::exit(1);
        }
    }
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // stdout belongs to the renderer, so events go to a file or nowhere.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
        wait_for_enter();
    }));
}

fn wait_for_enter() {
    eprint!("press Enter to exit");
    let _ = io::stderr().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
