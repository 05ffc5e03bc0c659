use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{style::Stylize, tty::IsTty};
use numbernames_core::config::RunConfig;
use numbernames_core::persistence::{load_cache_or_new, save_to_disk};
use numbernames_core::{GroupSeparator, MemoCache, NamingError, NumberNamer, INVALID_INPUT_SENTINEL};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Reads digit strings from stdin, one per line, and writes their English
/// names (Conway & Guy short scale) to stdout.
#[derive(Parser)]
#[command(name = "numbernames", version, about)]
struct Cli {
    /// Put every zillion group of a name on its own line
    #[arg(short = 'n', long = "newline")]
    newline: bool,

    /// Echo each input line to stderr and report "Done" after naming it
    #[arg(short = 's', long = "progress")]
    progress: bool,

    /// Recompute every name instead of memoizing
    #[arg(long)]
    no_cache: bool,

    /// Warm-start the memo cache from this file and save it back at exit
    #[arg(long, value_name = "PATH")]
    cache_file: Option<PathBuf>,

    /// JSON run configuration; flags given here override it
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply_to(self, mut config: RunConfig) -> RunConfig {
        if self.newline {
            config.separator = GroupSeparator::Newline;
        }
        if self.progress {
            config.progress = true;
        }
        if self.no_cache {
            config.use_cache = false;
        }
        if self.cache_file.is_some() {
            config.cache_file = self.cache_file;
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => RunConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RunConfig::default(),
    };
    let config = cli.apply_to(base);

    let cache = if !config.use_cache {
        MemoCache::disabled()
    } else if let Some(path) = &config.cache_file {
        load_cache_or_new(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring unreadable cache snapshot");
            MemoCache::in_memory()
        })
    } else {
        MemoCache::in_memory()
    };
    let namer = NumberNamer::with_cache(cache);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();
    let styled_marker = err.is_tty();
    let mut lines = 0u64;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if config.progress {
            writeln!(err, "{line}")?;
        }

        let name = match namer.name_of(line.trim(), config.separator.as_str()) {
            Ok(name) => name,
            Err(NamingError::InvalidInput { input }) => {
                warn!(%input, "input is not a digit string");
                INVALID_INPUT_SENTINEL.to_string()
            }
        };
        writeln!(out, "{name}")?;
        out.flush()?;
        lines += 1;

        if config.progress {
            if styled_marker {
                writeln!(err, "{}", "Done".green())?;
            } else {
                writeln!(err, "Done")?;
            }
            err.flush()?;
        }
    }
    info!(lines, "end of input");

    if config.use_cache {
        if let Some(path) = &config.cache_file {
            if let Err(e) = save_to_disk(namer.cache(), path) {
                warn!(path = %path.display(), error = %e, "could not save cache snapshot");
            }
        }
    }
    Ok(())
}
