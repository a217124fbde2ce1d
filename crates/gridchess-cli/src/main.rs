mod command;
mod config;
mod host;

use anyhow::Context;
use clap::Parser;
use command::Command;
use config::HostConfig;
use gridchess_engine::Rules;
use host::{Flow, Host};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridchess")]
#[command(about = "Play chess on a text board")]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = HostConfig::DEFAULT_PATH)]
    config: PathBuf,

    /// Save file used by `save`, `load` and autosave
    #[arg(short, long)]
    save_file: Option<PathBuf>,

    /// Movement rules: classic or strict
    #[arg(short, long)]
    rules: Option<Rules>,

    /// Only let the side to move play
    #[arg(long)]
    enforce_turns: bool,

    /// Start from the save file instead of a new game
    #[arg(long)]
    load: bool,
}

impl Args {
    /// Applies command-line overrides on top of the file configuration.
    fn apply(&self, config: &mut HostConfig) {
        if let Some(path) = &self.save_file {
            config.save_file = path.clone();
        }
        if let Some(rules) = self.rules {
            config.rules = rules;
        }
        if self.enforce_turns {
            config.enforce_turns = true;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = HostConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    args.apply(&mut config);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(rules = %config.rules, save_file = %config.save_file.display(), "starting");

    let stdout = io::stdout();
    let mut host = Host::new(config, stdout.lock());
    host.start(args.load)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        match Command::parse(&line) {
            Ok(Some(cmd)) => {
                if host.handle(cmd)? == Flow::Quit {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(e) => println!("{} (type 'help' for commands)", e),
        }
        io::stdout().flush()?;
    }

    // End of input behaves like `quit`.
    host.handle(Command::Quit)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_untouched() {
        let args = Args::try_parse_from(["gridchess"]).unwrap();
        assert_eq!(args.config, PathBuf::from("gridchess.toml"));
        let mut config = HostConfig::default();
        args.apply(&mut config);
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let args = Args::try_parse_from([
            "gridchess",
            "--rules",
            "strict",
            "--save-file",
            "game.json",
            "--enforce-turns",
        ])
        .unwrap();
        let mut config = HostConfig::default();
        args.apply(&mut config);
        assert_eq!(config.rules, Rules::Strict);
        assert_eq!(config.save_file, PathBuf::from("game.json"));
        assert!(config.enforce_turns);
    }

    #[test]
    fn unknown_rules_are_rejected() {
        assert!(Args::try_parse_from(["gridchess", "--rules", "fischer"]).is_err());
    }
}
