mod config;
mod lyrics;
mod player;
mod store;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;

use store::GenerateOutcome;

#[derive(Debug, Parser)]
#[command(name = "cadence", version, about = "Synchronized lyrics toolkit")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a lyrics file and print its timeline (headless).
    Parse {
        file: PathBuf,
        /// Track duration in seconds, so plain lyrics get synthetic timing.
        #[arg(long)]
        duration: Option<f64>,
        /// Dump the timeline as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate a synthetic-timing lyrics artifact for one track.
    Generate {
        /// Audio file whose base name names the artifact.
        audio: PathBuf,
        /// Plain lyrics text file, one display line per line.
        lyrics: PathBuf,
        /// Track duration in seconds.
        #[arg(long)]
        duration: f64,
        /// Write here instead of the configured lyrics directory.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the stored lyrics artifact for an audio file.
    Show {
        audio: PathBuf,
    },
    /// Print the lyric line active at a playback position.
    Active {
        file: PathBuf,
        /// Playback position in seconds.
        #[arg(long)]
        position: f64,
        /// Track duration in seconds, so plain lyrics get synthetic timing.
        #[arg(long)]
        duration: Option<f64>,
    },
    /// Replay a lyrics file against a simulated playback clock.
    Follow {
        file: PathBuf,
        /// Start position in seconds.
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        /// Track duration in seconds, so plain lyrics get synthetic timing.
        #[arg(long)]
        duration: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command {
        Command::Parse {
            file,
            duration,
            json,
        } => {
            let timeline = load_timeline(&file, duration)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
            } else {
                print_timeline(&timeline);
            }
        }
        Command::Generate {
            audio,
            lyrics,
            duration,
            out_dir,
        } => {
            let plain = std::fs::read_to_string(&lyrics)
                .with_context(|| format!("read {}", lyrics.display()))?;
            let dir = out_dir.unwrap_or(cfg.paths.lyrics_dir);
            match store::LyricsStore::new(dir).generate(&audio, &plain, duration)? {
                GenerateOutcome::Written(path) => println!("Wrote {}", path.display()),
                GenerateOutcome::Skipped(reason) => {
                    println!("Skipped {}: {}", audio.display(), reason)
                }
            }
        }
        Command::Show { audio } => {
            let store = store::LyricsStore::new(cfg.paths.lyrics_dir);
            match store.read(&audio)? {
                Some(text) => print!("{text}"),
                None => println!("No lyrics artifact for {}", audio.display()),
            }
        }
        Command::Active {
            file,
            position,
            duration,
        } => {
            let timeline = load_timeline(&file, duration)?;
            match timeline.active_index(position) {
                Some(i) => println!("{:03}  {}", i, timeline.lines()[i].text),
                None => println!("no active line"),
            }
        }
        Command::Follow {
            file,
            from,
            duration,
        } => {
            let timeline = load_timeline(&file, duration)?;
            if timeline.is_empty() {
                println!("No timed lyrics in {}", file.display());
                return Ok(());
            }
            let tick = Duration::from_millis(cfg.playback.tick_ms.max(1));
            player::follow(&timeline, from, tick, |i, line| {
                println!("{:>8.2}s  {:03}  {}", line.time, i, line.text);
            })
            .await;
        }
    }

    Ok(())
}

fn load_timeline(file: &Path, duration: Option<f64>) -> anyhow::Result<lyrics::Timeline> {
    let raw =
        std::fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
    Ok(lyrics::timeline_from_text(&raw, duration))
}

fn print_timeline(timeline: &lyrics::Timeline) {
    for (i, line) in timeline.lines().iter().enumerate() {
        println!("{:03}  {:>8.2}s  {}", i, line.time, line.text);
    }
}
