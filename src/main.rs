#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

use clap::{Parser, ValueEnum};
use gitseg::{
    Config, DefaultClock, DefaultFsOps, DefaultGitRunner, GitEnv, Options, Theme, collect_segment,
    default_config_path, init_logging, load_config,
    output::{Shell, format_prompt, to_json},
    segment_pieces,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Prompt,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Render a git status segment for a shell prompt.")]
struct Args {
    /// Working tree to inspect (default: current directory)
    dir: Option<PathBuf>,

    /// Shell whose prompt escapes to emit
    #[arg(long, value_enum, default_value_t = Shell::Bash)]
    shell: Shell,

    /// Output format: prompt text (default) or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Prompt)]
    output: OutputFormat,

    /// Config file (default: ~/.config/gitseg/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Never start a background fetch
    #[arg(long)]
    no_fetch: bool,

    /// Seconds after the last fetch before a new one is started
    #[arg(long, value_name = "SECS")]
    fetch_timeout: Option<u64>,

    /// Print debug diagnostics to stderr
    #[arg(long)]
    debug: bool,
}

fn read_config(explicit: Option<&PathBuf>) -> Config {
    let path = match explicit {
        Some(path) => path.clone(),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => return Config::default(),
        },
    };
    match load_config(&path) {
        Ok(config) => {
            debug!(path = %path.display(), ?config, "config loaded");
            config
        }
        Err(err) => {
            warn!("{err}; using defaults");
            Config::default()
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let config = read_config(args.config.as_ref());
    let mut fetch = config.fetch_settings();
    if args.no_fetch {
        fetch.enabled = false;
    }
    if let Some(secs) = args.fetch_timeout {
        fetch.timeout = Duration::from_secs(secs);
    }
    let opts = Options {
        dir: args.dir.unwrap_or_else(|| PathBuf::from(".")),
        fetch,
    };

    let git = DefaultGitRunner::new(GitEnv::from_process());
    let data = collect_segment(&opts, &git, &DefaultFsOps, &DefaultClock);
    match args.output {
        OutputFormat::Prompt => {
            let pieces = segment_pieces(&data.status, &Theme::default());
            print!("{}", format_prompt(&pieces, args.shell));
        }
        OutputFormat::Json => println!("{}", to_json(&data)),
    }
}
