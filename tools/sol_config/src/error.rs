use std::io;

use thiserror::Error;

/// Everything that can stop a configuration from being produced.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A flag or prompt answer did not name any known choice.
    #[error("unknown {kind} `{token}`, expected one of: {expected}")]
    UnknownToken {
        /// The setting being parsed, e.g. `arch`.
        kind: &'static str,
        /// The text that was given.
        token: String,
        /// The accepted spellings.
        expected: String,
    },
    /// The MSVC toolchain environment only exists for Windows targets.
    #[error("the msvc environment requires `--os windows`")]
    MsvcRequiresWindows,
    /// No Rust target triple exists for the selection.
    #[error("no Rust target for {0}")]
    UnsupportedTarget(String),
    /// Standard input ended before every setting was answered.
    #[error("input ended while prompting for {0}")]
    UnexpectedEof(&'static str),
    /// Reading the answers or writing the prompts failed.
    #[error("could not prompt for settings")]
    Io(#[from] io::Error),
    /// The config fragment could not be serialized.
    #[error("could not serialize the cargo config")]
    Toml(#[from] toml::ser::Error),
}
