use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use repoprep_acquirer::{Acquirer, RepoCache};
use repoprep_chunker::{ChunkerConfig, RepoChunker, DEFAULT_MAX_CHUNK_SIZE};
use std::path::PathBuf;

use manifest::{render_text, Manifest};

mod manifest;

#[derive(Parser)]
#[command(name = "repoprep")]
#[command(about = "Prepare a codebase for chunked analysis", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a target and partition its files into chunks
    Chunk(ChunkArgs),

    /// Resolve a target into a local working copy and print its path
    Resolve(ResolveArgs),
}

#[derive(Args)]
struct ChunkArgs {
    /// Local directory or remote repository URL
    target: String,

    /// Maximum chunk size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_CHUNK_SIZE)]
    max_chunk_size: u64,

    /// Cache directory for remote working copies
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Replace the default ignore patterns (repeatable)
    #[arg(long = "ignore", value_name = "PATTERN")]
    ignore_patterns: Vec<String>,

    /// Emit the manifest as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ResolveArgs {
    /// Local directory or remote repository URL
    target: String,

    /// Cache directory for remote working copies
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Chunk(args) => chunk(args),
        Commands::Resolve(args) => resolve(args),
    }
}

fn acquirer_for(cache_dir: Option<PathBuf>) -> Acquirer {
    let cache = cache_dir.map_or_else(RepoCache::default, RepoCache::new);
    Acquirer::new(cache)
}

fn chunk(args: ChunkArgs) -> Result<()> {
    let resolution = acquirer_for(args.cache_dir).resolve(&args.target)?;

    let mut config = ChunkerConfig::default().with_max_chunk_size(args.max_chunk_size);
    if !args.ignore_patterns.is_empty() {
        config = config.with_ignore_patterns(args.ignore_patterns);
    }

    let chunker = RepoChunker::new(config)?;
    let plan = chunker.chunk_directory(resolution.path())?;
    let manifest = Manifest::new(&resolution, plan);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
    } else {
        print!("{}", render_text(&manifest));
    }
    Ok(())
}

fn resolve(args: ResolveArgs) -> Result<()> {
    let resolution = acquirer_for(args.cache_dir).resolve(&args.target)?;
    if let Some(warning) = resolution.warning() {
        log::warn!("Using stale cache: {warning}");
    }
    println!("{}", resolution.path().display());
    Ok(())
}
