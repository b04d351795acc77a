// src/cli/dispatch.rs
use super::args::{Cli, Commands};
use super::handlers;
use super::input;
use crate::config::PipelineConfig;
use crate::error::TitleGraphError;
use crate::exit::TitleGraphExit;
use crate::pipeline::Pipeline;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Routes a parsed command line to its handler.
///
/// # Errors
/// Returns error if config, stop-word or input loading fails.
pub fn execute(cli: &Cli, command: &Commands) -> Result<TitleGraphExit> {
    let config = PipelineConfig::load(&cli.config)?;
    let mut pipeline = Pipeline::new(config)?;
    if let Some(path) = &cli.stopwords {
        pipeline = pipeline.with_stopwords(&input::load_stopwords(path)?);
    }

    match command {
        Commands::Cooccurrence(args) => handlers::handle_cooccurrence(&pipeline, args),
        Commands::Keywords(args) => handlers::handle_keywords(&pipeline, args),
        Commands::TopWords(args) => handlers::handle_top_words(&pipeline, args),
        Commands::Report { input, json } => handlers::handle_report(&pipeline, input, *json),
    }
}

/// Maps a failure to its exit code. Bad input and unknown communities get their own code.
#[must_use]
pub fn exit_for(err: &anyhow::Error) -> TitleGraphExit {
    match err.downcast_ref::<TitleGraphError>() {
        Some(
            TitleGraphError::Json(_)
            | TitleGraphError::UnknownCommunity(_)
            | TitleGraphError::AmbiguousCommunity(_)
            | TitleGraphError::InvalidConfig { .. }
            | TitleGraphError::Toml(_),
        ) => TitleGraphExit::InvalidInput,
        _ => TitleGraphExit::Error,
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "titlegraph_core=debug"
    } else {
        "titlegraph_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
