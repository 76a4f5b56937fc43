use ndarray::{Array1, ArrayView1};

use super::LossFn;
use crate::{MlErr, Result};

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    fn check_batch(y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<()> {
        if y_pred.len() != y.len() {
            return Err(MlErr::SizeMismatch {
                a: "predictions",
                b: "targets",
                got: y_pred.len(),
                expected: y.len(),
            });
        }

        if y.is_empty() {
            return Err(MlErr::EmptyBatch);
        }

        Ok(())
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<f32> {
        Self::check_batch(y_pred, y)?;

        let loss = (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default();

        Ok(loss)
    }

    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<Array1<f32>> {
        Self::check_batch(y_pred, y)?;
        Ok((&y_pred - &y) * (2.0 / y_pred.len() as f32))
    }
}
