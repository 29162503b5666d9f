//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("commands.markers must list at least one marker")]
    NoMarkers,
    #[error("commands.lower must not be empty")]
    EmptySegmentDelimiter,
    #[error("commands.upper must not be empty")]
    EmptyArgumentDelimiter,
    #[error("commands.lower and commands.upper must differ, both are {0:?}")]
    SameDelimiters(String),
    #[error("limits.max_line_length must be greater than zero")]
    ZeroLineLength,
    #[error("limits.outgoing_queue must be greater than zero")]
    ZeroOutgoingQueue,
    #[error("duplicate oper block name: {0}")]
    DuplicateOper(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    }

    let commands = &config.commands;
    if commands.markers.is_empty() {
        errors.push(ValidationError::NoMarkers);
    }
    if commands.delimiters.lower.is_empty() {
        errors.push(ValidationError::EmptySegmentDelimiter);
    }
    if commands.delimiters.upper.is_empty() {
        errors.push(ValidationError::EmptyArgumentDelimiter);
    }
    if !commands.delimiters.lower.is_empty() && commands.delimiters.lower == commands.delimiters.upper
    {
        errors.push(ValidationError::SameDelimiters(
            commands.delimiters.lower.clone(),
        ));
    }

    if config.limits.max_line_length == 0 {
        errors.push(ValidationError::ZeroLineLength);
    }
    if config.limits.outgoing_queue == 0 {
        errors.push(ValidationError::ZeroOutgoingQueue);
    }

    let mut seen = HashSet::new();
    for block in &config.oper {
        if !seen.insert(block.name.as_str()) {
            errors.push(ValidationError::DuplicateOper(block.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
