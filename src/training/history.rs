use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, arch::Linear};

/// The parameters and loss of a model observed right before a training step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochRecord {
    pub epoch: usize,
    pub weight: f32,
    pub bias: f32,
    pub loss: f32,
}

impl fmt::Display for EpochRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Epoch {:2}: W={:1.2} b={:1.2}, loss={:2.5}",
            self.epoch, self.weight, self.bias, self.loss
        )
    }
}

/// Append-only record of a training run, one entry per epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    weights: Vec<f32>,
    biases: Vec<f32>,
    losses: Vec<f32>,
}

impl History {
    pub fn with_capacity(epochs: usize) -> Self {
        Self {
            weights: Vec::with_capacity(epochs),
            biases: Vec::with_capacity(epochs),
            losses: Vec::with_capacity(epochs),
        }
    }

    /// Records the current parameters of `model` along with the loss they produce.
    pub fn push(&mut self, model: &Linear, loss: f32) {
        self.weights.push(model.weight());
        self.biases.push(model.bias());
        self.losses.push(loss);
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn biases(&self) -> &[f32] {
        &self.biases
    }

    pub fn losses(&self) -> &[f32] {
        &self.losses
    }

    pub fn get(&self, epoch: usize) -> Option<EpochRecord> {
        Some(EpochRecord {
            epoch,
            weight: *self.weights.get(epoch)?,
            bias: *self.biases.get(epoch)?,
            loss: *self.losses.get(epoch)?,
        })
    }

    pub fn last(&self) -> Option<EpochRecord> {
        self.get(self.len().checked_sub(1)?)
    }

    pub fn records(&self) -> impl Iterator<Item = EpochRecord> + '_ {
        (0..self.len()).filter_map(|epoch| self.get(epoch))
    }

    /// Writes the history as pretty-printed JSON.
    ///
    /// # Arguments
    /// * `path` - Where to write the file, it gets overwritten if it exists.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
