//! Crawl-Sieve main entry point
//!
//! A command-line harness around the decision engine: validate a
//! configuration, check URLs against the crawl scope, or replay saved pages
//! through the engine and print the links it would hand back to a crawler.

use anyhow::{anyhow, Context};
use clap::Parser;
use crawl_sieve::config::{load_config_with_hash, Config};
use crawl_sieve::{PageResponse, Sieve};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Crawl-Sieve: duplicate, trap, and scope decisions for a focused crawler
#[derive(Parser, Debug)]
#[command(name = "crawl-sieve")]
#[command(version)]
#[command(about = "Decides which crawled pages to keep and which links to follow", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and print the effective settings
    #[arg(long, conflicts_with_all = ["check_url", "page"])]
    dry_run: bool,

    /// Print whether a URL is in scope (repeatable)
    #[arg(long, value_name = "URL")]
    check_url: Vec<String>,

    /// Process a saved page as a 200 response, given as URL=PATH (repeatable)
    #[arg(long, value_name = "URL=PATH")]
    page: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let mut sieve = Sieve::new(config);

    if !cli.check_url.is_empty() {
        handle_check_urls(&sieve, &cli.check_url);
    }

    if !cli.page.is_empty() {
        handle_pages(&mut sieve, &cli.page)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawl_sieve=info,warn"),
            1 => EnvFilter::new("crawl_sieve=debug,info"),
            2 => EnvFilter::new("crawl_sieve=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Crawl-Sieve Dry Run ===\n");

    println!("Scope:");
    println!("  Allowed domains: {}", config.scope.allowed_domains.join(", "));
    println!("  Root domain: {}", config.scope.root_domain);
    println!(
        "  Blocked extensions: {}",
        config.scope.blocked_extensions.len()
    );
    println!(
        "  Trap path substrings: {}",
        config.scope.trap_path_substrings.join(", ")
    );
    println!("  Trap query keys: {}", config.scope.trap_query_keys.join(", "));

    println!("\nContent:");
    println!("  Minimum tokens: {}", config.content.min_tokens);
    match &config.content.stop_words {
        Some(words) => println!("  Stop words: {} configured", words.len()),
        None => println!("  Stop words: built-in English list"),
    }

    println!("\nDuplicates:");
    println!(
        "  Near-duplicate threshold: {}",
        config.dedup.near_duplicate_threshold
    );
    println!("  Shingle size: {}", config.dedup.shingle_size);
    match config.dedup.max_fingerprints {
        Some(max) => println!("  Max fingerprints: {}", max),
        None => println!("  Max fingerprints: unbounded"),
    }
    println!("  Gate order: {:?}", config.dedup.gate_order);

    println!("\nTraps:");
    println!(
        "  URL similarity threshold: {}",
        config.traps.url_similarity_threshold
    );
    println!("  Window size: {}", config.traps.window_size);

    println!("\nOutput:");
    match &config.output.report_path {
        Some(path) => println!("  Report: {}", path),
        None => println!("  Report: disabled"),
    }
    println!("  Top words: {}", config.output.top_words);

    println!("\n✓ Configuration is valid");
}

/// Handles --check-url: prints the scope verdict for each URL
fn handle_check_urls(sieve: &Sieve, urls: &[String]) {
    for url in urls {
        match sieve.is_valid(url) {
            Ok(true) => println!("in scope      {}", url),
            Ok(false) => println!("out of scope  {}", url),
            Err(e) => println!("error         {} ({})", url, e),
        }
    }
}

/// Handles --page: replays saved pages through the engine
fn handle_pages(sieve: &mut Sieve, pages: &[String]) -> anyhow::Result<()> {
    let mut duplicates = 0usize;
    let mut early_exits = 0usize;

    for entry in pages {
        let (url, path) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected URL=PATH, got '{}'", entry))?;

        let content =
            std::fs::read(path).with_context(|| format!("failed to read page file {}", path))?;
        let response = PageResponse::ok(url, content);

        let report = sieve.process_page(url, Some(&response))?;
        println!("{} {}", report.outcome, url);
        if report.outcome.is_duplicate() {
            duplicates += 1;
        } else if report.outcome.is_early_exit() {
            early_exits += 1;
        }
        for link in &report.links {
            println!("  {}", link);
        }
    }

    let report = sieve.report();
    tracing::info!(
        "Replay finished: {} unique URLs, {} pages crawled, {} duplicates, {} skipped",
        report.unique_urls,
        report.crawled_pages,
        duplicates,
        early_exits
    );

    Ok(())
}
