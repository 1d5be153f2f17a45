use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use signal_hook::consts::{SIGINT, SIGTERM};
use textanim::terminal::{CrosstermSize, CrosstermSurface};
use textanim::{read_animation, CancelToken, PlaybackOutcome, PlaybackSettings, Player};

/// Play a text animation file, centered in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Animation text file (frames separated by the separator)
    file: PathBuf,

    /// Seconds between frames [default: 0.1]
    #[arg(short, long, allow_hyphen_values = true)]
    delay: Option<f64>,

    /// Number of passes to play, 0 loops forever [default: 0]
    #[arg(short = 'l', long = "loop")]
    loops: Option<u32>,

    /// Frame separator [default: #]
    #[arg(short, long)]
    separator: Option<String>,

    /// Draw frames at the top-left corner instead of centering them
    #[arg(long)]
    no_center: bool,

    /// TOML settings file; command-line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging (written to stderr)
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Layer command-line flags over the settings file, then defaults.
    fn settings(&self) -> Result<PlaybackSettings> {
        let mut settings = match &self.config {
            Some(path) => PlaybackSettings::load(path)?,
            None => PlaybackSettings::default(),
        };
        if let Some(delay) = self.delay {
            settings.delay_secs = delay;
        }
        if let Some(loops) = self.loops {
            settings.loops = loops;
        }
        if let Some(separator) = &self.separator {
            settings.separator = separator.clone();
        }
        if self.no_center {
            settings.center = false;
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout is the render target, so logs go to stderr
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let settings = cli.settings()?;
    let options = settings.player_options()?;
    let animation = read_animation(&cli.file, &settings.separator)?;

    let cancel = CancelToken::new();
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, cancel.flag())
            .with_context(|| format!("failed to install handler for signal {signal}"))?;
    }

    let mut surface = CrosstermSurface::stdout();
    let summary = Player::new(options)
        .play(&animation, &CrosstermSize, &mut surface, &cancel)
        .with_context(|| format!("failed to play {}", cli.file.display()))?;

    if summary.outcome == PlaybackOutcome::Cancelled {
        // Leave the shell prompt on a fresh line
        let mut stdout = surface.into_inner();
        writeln!(stdout).context("failed to write to terminal")?;
        stdout.flush().context("failed to write to terminal")?;
    }

    Ok(())
}
