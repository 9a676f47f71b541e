//! Fundraiser app: configuration, command parsing, session, rendering and the
//! interactive shell around the domain crates.

pub mod command;
pub mod config;
pub mod render;
pub mod session;
pub mod shell;

pub use command::Command;
pub use config::{Config, ConfigError, OutputFormat, USAGE};
pub use render::{JsonRenderer, Renderer, TextRenderer};
pub use session::{Outcome, Session};
pub use shell::Shell;
