use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(name = "titlegraph", version, about = "Word graphs over community post titles")]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    /// Extra stop words, one per line
    #[arg(long, global = true, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Words that appear together in the same titles
    Cooccurrence(InputArgs),
    /// Terms with correlated TF-IDF usage across titles
    Keywords(InputArgs),
    /// Most frequent words in a community
    TopWords(InputArgs),
    /// Stats, top words, authors and both graphs for every community
    Report {
        /// JSON object mapping community name to its documents
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON object mapping community name to its documents
    pub input: PathBuf,
    /// Community to use when the input holds several
    #[arg(long, short)]
    pub community: Option<String>,
    #[arg(long)]
    pub json: bool,
}
