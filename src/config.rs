use std::{
    fs,
    path::{Path, PathBuf},
};

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{MlErr, Result, arch::Linear};

/// Everything needed to reproduce a training run.
///
/// Missing fields take their default value, so `{}` is a valid configuration. A missing `seed`
/// takes one from the OS and `history_path` is where the history gets dumped as JSON, if set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    pub samples: usize,
    pub true_weight: f32,
    pub true_bias: f32,
    pub noise_std: f32,
    pub initial_weight: f32,
    pub initial_bias: f32,
    pub learning_rate: f32,
    pub epochs: usize,
    pub seed: Option<u64>,
    pub history_path: Option<PathBuf>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            true_weight: 3.0,
            true_bias: 2.0,
            noise_std: 1.0,
            initial_weight: 5.0,
            initial_bias: 0.0,
            learning_rate: 0.1,
            epochs: 10,
            seed: None,
            history_path: None,
        }
    }
}

impl TrainingConfig {
    /// Loads and validates a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration can produce a well defined run.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(MlErr::InvalidConfig("samples must be at least 1".into()));
        }

        if self.epochs == 0 {
            return Err(MlErr::InvalidConfig("epochs must be at least 1".into()));
        }

        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MlErr::InvalidConfig(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }

        if !(self.noise_std.is_finite() && self.noise_std >= 0.0) {
            return Err(MlErr::InvalidConfig(format!(
                "noise_std must be non-negative and finite, got {}",
                self.noise_std
            )));
        }

        let params = [
            ("true_weight", self.true_weight),
            ("true_bias", self.true_bias),
            ("initial_weight", self.initial_weight),
            ("initial_bias", self.initial_bias),
        ];

        if let Some((name, value)) = params.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MlErr::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }

        Ok(())
    }

    /// Returns the model the run starts from.
    pub fn initial_model(&self) -> Linear {
        Linear::new(self.initial_weight, self.initial_bias)
    }

    /// Returns the random number generator for the dataset.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
