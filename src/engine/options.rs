/// Configuration options for the engine
use anyhow::{bail, Context, Result};

use crate::heuristics::WeightMode;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Whether malformed referee messages end the match
    pub strict_mode: bool,
    /// How the evaluator's weight table is built
    pub weights: WeightMode,
    /// Seed for randomised weights, drawn from the OS when absent
    pub seed: Option<u64>,
}

impl EngineOptions {
    pub fn new(strict_mode: bool, weights: WeightMode, seed: Option<u64>) -> Self {
        Self {
            strict_mode,
            weights,
            seed,
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "strictmode" => self.strict_mode = value.parse().context("invalid strictmode")?,
            "weights" => self.weights = value.parse()?,
            "seed" => self.seed = match value {
                "none" => None,
                seed => Some(seed.parse().context("invalid seed")?),
            },
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict_mode: true,
            weights: WeightMode::Fixed,
            seed: None,
        }
    }
}
