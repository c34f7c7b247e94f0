use crate::config::types::{
    Config, ContentConfig, DedupConfig, OutputConfig, ScopeConfig, TrapConfig,
};
use crate::url::matches_domain_suffix;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scope_config(&config.scope)?;
    validate_content_config(&config.content)?;
    validate_dedup_config(&config.dedup)?;
    validate_trap_config(&config.traps)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates scope configuration
fn validate_scope_config(config: &ScopeConfig) -> Result<(), ConfigError> {
    if config.allowed_domains.is_empty() {
        return Err(ConfigError::Validation(
            "allowed_domains must list at least one domain".to_string(),
        ));
    }

    for domain in &config.allowed_domains {
        validate_domain_string(domain)?;
    }

    validate_domain_string(&config.root_domain)?;

    let root = config.root_domain.to_lowercase();
    if !config
        .allowed_domains
        .iter()
        .any(|d| matches_domain_suffix(&d.to_lowercase(), &root))
    {
        return Err(ConfigError::Validation(format!(
            "root_domain '{}' is not covered by any allowed domain",
            config.root_domain
        )));
    }

    for ext in &config.blocked_extensions {
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(format!(
                "blocked extension must be alphanumeric without a leading dot, got '{}'",
                ext
            )));
        }
    }

    if config.trap_path_substrings.iter().any(|s| s.is_empty()) {
        return Err(ConfigError::Validation(
            "trap_path_substrings cannot contain empty strings".to_string(),
        ));
    }

    if config.trap_query_keys.iter().any(|s| s.is_empty()) {
        return Err(ConfigError::Validation(
            "trap_query_keys cannot contain empty strings".to_string(),
        ));
    }

    Ok(())
}

/// Validates content configuration
fn validate_content_config(config: &ContentConfig) -> Result<(), ConfigError> {
    if let Some(words) = &config.stop_words {
        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "stop_words cannot contain empty strings".to_string(),
            ));
        }
    }
    Ok(())
}

/// Validates duplicate detection configuration
fn validate_dedup_config(config: &DedupConfig) -> Result<(), ConfigError> {
    validate_ratio("near_duplicate_threshold", config.near_duplicate_threshold)?;

    if config.shingle_size < 1 {
        return Err(ConfigError::Validation(format!(
            "shingle_size must be >= 1, got {}",
            config.shingle_size
        )));
    }

    if config.max_fingerprints == Some(0) {
        return Err(ConfigError::Validation(
            "max_fingerprints must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates trap detection configuration
fn validate_trap_config(config: &TrapConfig) -> Result<(), ConfigError> {
    validate_ratio("url_similarity_threshold", config.url_similarity_threshold)?;

    if config.window_size < 1 {
        return Err(ConfigError::Validation(format!(
            "window_size must be >= 1, got {}",
            config.window_size
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if matches!(&config.report_path, Some(path) if path.is_empty()) {
        return Err(ConfigError::Validation(
            "report_path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Similarity thresholds live in (0, 1]
fn validate_ratio(name: &str, value: f64) -> Result<(), ConfigError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(ConfigError::Validation(format!(
            "{} must be in (0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validates a domain string
fn validate_domain_string(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::InvalidPattern(
            "Domain cannot be empty".to_string(),
        ));
    }

    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' contains invalid characters",
            domain
        )));
    }

    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' cannot start or end with '.' or '-'",
            domain
        )));
    }

    if domain.contains("..") {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' cannot contain consecutive dots",
            domain
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' must contain at least one dot (e.g., 'example.edu')",
            domain
        )));
    }

    Ok(())
}
