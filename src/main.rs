use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use telex::{AccentStyle, Engine, EngineConfig, Mode};
use tracing_subscriber::EnvFilter;

#[derive(clap::ValueEnum, Clone, Copy)]
enum Accent {
    Legacy,
    Modern,
}

impl From<Accent> for AccentStyle {
    fn from(accent: Accent) -> Self {
        match accent {
            Accent::Legacy => AccentStyle::Legacy,
            Accent::Modern => AccentStyle::Modern,
        }
    }
}

/// Reads Telex keystrokes from stdin, one line at a time, and prints the Vietnamese text.
#[derive(Parser)]
#[command(name = "telex")]
#[command(version)]
struct Cli {
    /// TOML file with engine options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tone placement style, overrides the config file
    #[arg(long, value_enum)]
    accent: Option<Accent>,

    /// Pass keys through untouched
    #[arg(long)]
    english: bool,

    /// Print the edit produced by every key instead of the final line
    #[arg(long)]
    deltas: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true);

    if subscriber.try_init().is_ok() {
        tracing::debug!("tracing initialized");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(accent) = cli.accent {
        config.accent = accent.into();
    }

    let mode = if cli.english { Mode::ENGLISH } else { Mode::empty() };
    let mut engine = Engine::with_config(config);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    for line in stdin.lines() {
        let line = line.context("reading stdin")?;
        engine.reset();

        if cli.deltas {
            for key in line.chars() {
                let delta = engine.process_key_delta(key, mode);
                writeln!(
                    stdout,
                    "{key:?}\t-{}\t{:?}{}",
                    delta.delete_count,
                    delta.insert_text,
                    if delta.use_paste { "\tpaste" } else { "" }
                )?;
            }
        } else {
            engine.process_string(&line, mode);
        }
        writeln!(stdout, "{}", engine.processed_string())?;
    }

    Ok(())
}
