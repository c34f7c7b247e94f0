//! Configuration module for Crawl-Sieve
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; an empty file yields the default UCI crawl scope.
//!
//! # Example
//!
//! ```no_run
//! use crawl_sieve::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sieve.toml")).unwrap();
//! println!("Quality gate: {} tokens", config.content.min_tokens);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ContentConfig, DedupConfig, GateOrder, OutputConfig, ScopeConfig, TrapConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
