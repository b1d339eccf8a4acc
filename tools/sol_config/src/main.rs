//! Resolves the target triple, cargo features and codegen flags for building
//! Sol, from flags or by asking on stdin.
//!
//! ```text
//! sol_config --arch x86 --os nix --env gnu --bits 64 --simd native --float 64 \
//!     --opt fast --format shell
//! ```
//!
//! Prompts go to stderr so the resolved command or config can be captured from
//! stdout. Set `RUST_LOG=info` to see how each choice was resolved.

#![expect(clippy::print_stdout, clippy::print_stderr, reason = "Allowed in tools.")]

mod config;
mod error;
mod prompt;

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Arch, Bits, Choice, Env, Float, Format, Opt, Os, Settings, Simd},
    error::ConfigError,
    prompt::Prompter,
};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Instruction set: x86 or arm
    #[arg(long)]
    arch: Option<Arch>,

    /// Operating system: nix or windows
    #[arg(long)]
    os: Option<Os>,

    /// Toolchain environment: gnu or msvc
    #[arg(long)]
    env: Option<Env>,

    /// Pointer width: 32 or 64
    #[arg(long)]
    bits: Option<Bits>,

    /// Backend strategy: auto, portable, loop or native
    #[arg(long)]
    simd: Option<Simd>,

    /// Scalar width: 32 or 64
    #[arg(long)]
    float: Option<Float>,

    /// Optimization goal: fast, balanced or small
    #[arg(long)]
    opt: Option<Opt>,

    /// Output: shell or toml
    #[arg(long)]
    format: Option<Format>,

    /// Use defaults for missing settings instead of prompting
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            if let Some(source) = core::error::Error::source(&err) {
                eprintln!("  caused by: {source}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, ConfigError> {
    let stdin = io::stdin();
    let mut prompter = (!args.no_prompt).then(|| Prompter::new(stdin.lock(), io::stderr()));
    let host = Settings::host();

    // Same order as the questions are asked.
    let os = pick(args.os, host.os, &mut prompter)?;
    let env = pick(args.env, host.env, &mut prompter)?;
    let arch = pick(args.arch, host.arch, &mut prompter)?;
    let simd = pick(args.simd, host.simd, &mut prompter)?;
    let bits = pick(args.bits, host.bits, &mut prompter)?;
    let float = pick(args.float, host.float, &mut prompter)?;
    let opt = pick(args.opt, host.opt, &mut prompter)?;
    let format = pick(args.format, Format::Shell, &mut prompter)?;

    let settings = Settings {
        arch,
        os,
        env,
        bits,
        simd,
        float,
        opt,
    };
    debug!(?settings, %format, "settings complete");

    let plan = config::resolve(&settings)?;
    match format {
        Format::Shell => Ok(plan.shell_command()),
        Format::Toml => plan.cargo_config(),
    }
}

/// The flag value if given, otherwise an answer from the prompter, otherwise
/// `default`.
fn pick<T: Choice, R: BufRead, W: Write>(
    given: Option<T>,
    default: T,
    prompter: &mut Option<Prompter<R, W>>,
) -> Result<T, ConfigError> {
    match (given, prompter) {
        (Some(value), _) => Ok(value),
        (None, Some(prompter)) => prompter.ask(),
        (None, None) => {
            debug!(kind = T::KIND, %default, "using default");
            Ok(default)
        }
    }
}
