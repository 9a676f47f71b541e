//! Command-line / environment configuration.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use fundraiser_observability::LogFormat;

use crate::render::{JsonRenderer, Renderer, TextRenderer};

/// Printed on a malformed invocation.
pub const USAGE: &str = "usage: fundraiser item-file member-file";

const ITEM_FILE_PREFIX: &str = "items-";
const MEMBER_FILE_PREFIX: &str = "members-";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "fundraiser")]
#[command(about = "Track fundraiser items, members and sales interactively")]
#[command(version)]
pub struct Config {
    /// Item file: one `<id> <cost> <name>` record per line.
    #[arg(value_name = "ITEM_FILE")]
    pub item_file: PathBuf,

    /// Member file: one `<id> <name>` record per line.
    #[arg(value_name = "MEMBER_FILE")]
    pub member_file: PathBuf,

    /// How command results are written to stdout.
    #[arg(long, value_enum, env = "FUNDRAISER_OUTPUT", default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Emit logs as JSON instead of human-readable lines.
    #[arg(long, env = "FUNDRAISER_LOG_JSON")]
    pub log_json: bool,

    /// Do not print the `cmd> ` prompt or echo commands.
    #[arg(long, env = "FUNDRAISER_NO_PROMPT")]
    pub no_prompt: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Can't open file: {0}")]
    BadFileName(String),
}

impl Config {
    /// Item files must be named `items-*`, member files `members-*`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_prefix(&self.item_file, ITEM_FILE_PREFIX)?;
        check_prefix(&self.member_file, MEMBER_FILE_PREFIX)
    }

    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self.output {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
        }
    }

    pub fn prompt(&self) -> bool {
        !self.no_prompt
    }
}

fn check_prefix(path: &Path, prefix: &str) -> Result<(), ConfigError> {
    let named_ok = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(prefix));

    if named_ok {
        Ok(())
    } else {
        Err(ConfigError::BadFileName(path.display().to_string()))
    }
}
