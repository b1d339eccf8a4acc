//! Turning a set of build choices into a target triple, cargo features and
//! codegen flags.

use core::{fmt, str::FromStr};
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// A setting chosen from a fixed set of spellings.
pub trait Choice: FromStr<Err = ConfigError> + Copy + fmt::Display {
    /// Name of the setting, as used in flags and prompts.
    const KIND: &'static str;
    /// The canonical spelling of every choice.
    const CHOICES: &'static [&'static str];
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl Choice for $name {
            const KIND: &'static str = $kind;
            const CHOICES: &'static [&'static str] = &[$($token),+];
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($token $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(ConfigError::UnknownToken {
                        kind: $kind,
                        token: s.trim().to_owned(),
                        expected: Self::CHOICES.join(", "),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $token),+
                })
            }
        }
    };
}

choice!(
    /// Instruction set family.
    Arch, "arch" {
        /// x86 or x86_64.
        X86 => "x86" | "x" | "x86_64",
        /// ARM or AArch64.
        Arm => "arm" | "a" | "aarch64",
    }
);

choice!(
    /// Operating system family.
    Os, "os" {
        /// Linux and other Unix-likes.
        Nix => "nix" | "n" | "linux",
        /// Windows.
        Windows => "windows" | "w",
    }
);

choice!(
    /// Toolchain environment of the target.
    Env, "env" {
        /// GNU toolchain and libc.
        Gnu => "gnu" | "g",
        /// Microsoft Visual C++ toolchain.
        Msvc => "msvc" | "m",
    }
);

choice!(
    /// Pointer width.
    Bits, "bits" {
        /// 32-bit target.
        B32 => "32",
        /// 64-bit target.
        B64 => "64",
    }
);

choice!(
    /// Arithmetic backend strategy.
    Simd, "simd" {
        /// Let `sol_math` pick the best tier for the target.
        Auto => "auto" | "a",
        /// Force the per-field backend.
        Portable => "portable" | "p",
        /// Force the loop backend.
        Loop => "loop" | "l",
        /// Use the SIMD tier and enable the registers it wants.
        Native => "native" | "n",
    }
);

choice!(
    /// Scalar width.
    Float, "float" {
        /// Single precision.
        F32 => "32" | "f32",
        /// Double precision.
        F64 => "64" | "f64",
    }
);

choice!(
    /// Optimization goal.
    Opt, "opt" {
        /// `opt-level=3`.
        Fast => "fast" | "f",
        /// `opt-level=2`.
        Balanced => "balanced" | "b",
        /// `opt-level=s`.
        Small => "small" | "s",
    }
);

choice!(
    /// How the resolved configuration is printed.
    Format, "format" {
        /// A `cargo build` command line.
        Shell => "shell",
        /// A `.cargo/config.toml` fragment.
        Toml => "toml",
    }
);

/// Every choice needed to resolve a build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Instruction set family.
    pub arch: Arch,
    /// Operating system family.
    pub os: Os,
    /// Toolchain environment.
    pub env: Env,
    /// Pointer width.
    pub bits: Bits,
    /// Backend strategy.
    pub simd: Simd,
    /// Scalar width.
    pub float: Float,
    /// Optimization goal.
    pub opt: Opt,
}

impl Settings {
    /// Settings matching the machine this tool was built for, with automatic
    /// SIMD, single precision and full optimization.
    pub fn host() -> Self {
        Self {
            arch: if cfg!(any(target_arch = "aarch64", target_arch = "arm")) {
                Arch::Arm
            } else {
                Arch::X86
            },
            os: if cfg!(windows) { Os::Windows } else { Os::Nix },
            env: if cfg!(target_env = "msvc") {
                Env::Msvc
            } else {
                Env::Gnu
            },
            bits: if cfg!(target_pointer_width = "32") {
                Bits::B32
            } else {
                Bits::B64
            },
            simd: Simd::Auto,
            float: Float::F32,
            opt: Opt::Fast,
        }
    }
}

/// A fully resolved build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildPlan {
    /// Rust target triple.
    pub target: &'static str,
    /// `sol` cargo features to enable.
    pub features: Vec<&'static str>,
    /// Flags passed to `rustc`, as `-C` argument pairs.
    pub rustflags: Vec<String>,
}

/// Resolves `settings` into a [`BuildPlan`], rejecting combinations no
/// toolchain can build.
pub fn resolve(settings: &Settings) -> Result<BuildPlan, ConfigError> {
    let target = target_triple(settings)?;
    debug!(target, "resolved target triple");

    let mut features = Vec::new();
    let mut rustflags = vec![
        "-C".to_owned(),
        format!(
            "opt-level={}",
            match settings.opt {
                Opt::Fast => "3",
                Opt::Balanced => "2",
                Opt::Small => "s",
            }
        ),
    ];

    if settings.float == Float::F64 {
        features.push("f64");
    }

    match settings.simd {
        Simd::Auto => {}
        Simd::Portable => features.push("scalar-math"),
        Simd::Loop => features.push("loop-math"),
        Simd::Native => match native_tier(settings) {
            NativeTier::Native(None) => {}
            NativeTier::Native(Some(feature)) => {
                rustflags.push("-C".to_owned());
                rustflags.push(format!("target-feature={feature}"));
            }
            NativeTier::Fallback(feature) => features.push(feature),
        },
    }

    info!(target, ?features, ?rustflags, "resolved build");
    Ok(BuildPlan {
        target,
        features,
        rustflags,
    })
}

fn target_triple(settings: &Settings) -> Result<&'static str, ConfigError> {
    let Settings {
        arch,
        os,
        env,
        bits,
        ..
    } = *settings;

    match (arch, os, env, bits) {
        (_, Os::Nix, Env::Msvc, _) => Err(ConfigError::MsvcRequiresWindows),
        (Arch::X86, Os::Nix, Env::Gnu, Bits::B64) => Ok("x86_64-unknown-linux-gnu"),
        (Arch::X86, Os::Nix, Env::Gnu, Bits::B32) => Ok("i686-unknown-linux-gnu"),
        (Arch::X86, Os::Windows, Env::Gnu, Bits::B64) => Ok("x86_64-pc-windows-gnu"),
        (Arch::X86, Os::Windows, Env::Gnu, Bits::B32) => Ok("i686-pc-windows-gnu"),
        (Arch::X86, Os::Windows, Env::Msvc, Bits::B64) => Ok("x86_64-pc-windows-msvc"),
        (Arch::X86, Os::Windows, Env::Msvc, Bits::B32) => Ok("i686-pc-windows-msvc"),
        (Arch::Arm, Os::Nix, Env::Gnu, Bits::B64) => Ok("aarch64-unknown-linux-gnu"),
        (Arch::Arm, Os::Nix, Env::Gnu, Bits::B32) => Ok("armv7-unknown-linux-gnueabihf"),
        (Arch::Arm, Os::Windows, Env::Gnu, Bits::B64) => Ok("aarch64-pc-windows-gnullvm"),
        (Arch::Arm, Os::Windows, Env::Msvc, Bits::B64) => Ok("aarch64-pc-windows-msvc"),
        (Arch::Arm, Os::Windows, _, Bits::B32) => Err(ConfigError::UnsupportedTarget(format!(
            "32-bit arm on windows ({env})"
        ))),
    }
}

/// How a `native` SIMD request is built for the selected target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NativeTier {
    /// The register tier, with the extra target feature it needs, if any.
    Native(Option<&'static str>),
    /// The target has no stable intrinsics; build the named weaker tier.
    Fallback(&'static str),
}

fn native_tier(settings: &Settings) -> NativeTier {
    match (settings.arch, settings.bits, settings.float) {
        (Arch::Arm, Bits::B32, _) => {
            warn!("32-bit ARM has no stable NEON intrinsics, falling back to the loop tier");
            NativeTier::Fallback("loop-math")
        }
        (Arch::Arm, Bits::B64, _) => NativeTier::Native(Some("+neon")),
        (Arch::X86, Bits::B64, Float::F64) => NativeTier::Native(Some("+avx")),
        (Arch::X86, Bits::B32, Float::F64) => {
            warn!("32-bit x86 keeps SSE2: double precision Vec3/Vec4 use paired 128-bit registers");
            NativeTier::Native(None)
        }
        (Arch::X86, _, Float::F32) => NativeTier::Native(None),
    }
}

impl BuildPlan {
    /// A `cargo build` invocation for this plan.
    pub fn shell_command(&self) -> String {
        let mut command = format!(
            "RUSTFLAGS=\"{}\" cargo build --release --target {}",
            self.rustflags.join(" "),
            self.target
        );
        if !self.features.is_empty() {
            command.push_str(" --features ");
            command.push_str(&self.features.join(","));
        }
        command
    }

    /// A `.cargo/config.toml` fragment that pins the target and flags, with a
    /// `build-sol` alias carrying the features.
    pub fn cargo_config(&self) -> Result<String, ConfigError> {
        #[derive(Serialize)]
        struct CargoConfig<'a> {
            build: BuildTable<'a>,
            alias: BTreeMap<&'static str, String>,
        }

        #[derive(Serialize)]
        struct BuildTable<'a> {
            target: &'a str,
            rustflags: &'a [String],
        }

        let mut alias = "build --release".to_owned();
        if !self.features.is_empty() {
            alias.push_str(" --features ");
            alias.push_str(&self.features.join(","));
        }

        let config = CargoConfig {
            build: BuildTable {
                target: self.target,
                rustflags: &self.rustflags,
            },
            alias: BTreeMap::from([("build-sol", alias)]),
        };
        Ok(toml::to_string(&config)?)
    }
}
