// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! story-viewer: headless narrative viewer. Loads the four datasets, replays
//! an input script through the engine and writes one SVG frame per render cycle.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use story_app_core::notice::NoticeService;
use tracing_subscriber::EnvFilter;

mod inspect;
mod play;
mod script;
mod session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Story viewer: step through the CO2 narrative as SVG frames")]
struct Cli {
    /// Settings directory (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the data, replay a script and write frame-NNNN.svg per render cycle
    Play {
        /// Directory holding the four dataset files
        #[arg(long)]
        data: PathBuf,
        /// Directory frames are written to
        #[arg(long)]
        out: PathBuf,
        /// Script file (reads stdin when omitted)
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// Print dataset sizes and boundary regions that fail to join
    Inspect {
        /// Directory holding the four dataset files
        #[arg(long)]
        data: PathBuf,
    },
    /// Print the effective settings
    Config {
        /// Persist default settings to the config store first
        #[arg(long)]
        write_defaults: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut notices = NoticeService::new();
    let session = session::Session::open(cli.config.as_deref(), &mut notices);

    let result = match cli.command {
        Command::Play { data, out, script } => {
            play::run(&session, &mut notices, &data, &out, script.as_deref()).await
        }
        Command::Inspect { data } => inspect::run(&session, &data).await,
        Command::Config { write_defaults } => session.show(write_defaults),
    };
    session::report_notices(&notices)?;
    result
}
