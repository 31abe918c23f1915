//! Runner configuration from command-line arguments.

use anyhow::{anyhow, Result};

use crate::types::{DEFAULT_FALL_MS, LINE_CLEAR_STAGE_MS, MIN_FALL_MS};

pub const USAGE: &str = "usage: blockfall [--seed <u32>] [--fall-ms <u32>] [--clear-ms <u32>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Fixed seed for a reproducible piece sequence; random when `None`.
    pub seed: Option<u32>,
    /// Gravity interval in milliseconds.
    pub fall_ms: u32,
    /// How long full rows stay on screen before they are removed.
    pub clear_ms: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fall_ms: DEFAULT_FALL_MS,
            clear_ms: LINE_CLEAR_STAGE_MS,
        }
    }
}

impl RunConfig {
    /// Parse arguments (without the program name).
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn parse_args(args: &[String]) -> Result<Option<Self>> {
        let mut config = Self::default();
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => return Ok(None),
                "--seed" => {
                    i += 1;
                    config.seed = Some(flag_value(args, i, "--seed")?);
                }
                "--fall-ms" => {
                    i += 1;
                    config.fall_ms = flag_value::<u32>(args, i, "--fall-ms")?.max(MIN_FALL_MS);
                }
                "--clear-ms" => {
                    i += 1;
                    config.clear_ms = flag_value(args, i, "--clear-ms")?;
                }
                other => return Err(anyhow!("unknown argument: {}\n{}", other, USAGE)),
            }
            i += 1;
        }
        Ok(Some(config))
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn flag_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = args
        .get(i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
    raw.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, raw))
}
