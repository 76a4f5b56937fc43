use ndarray::{Array1, ArrayView1};

use crate::Result;

/// A scalar measure of the error between predictions and targets.
pub trait LossFn {
    /// Computes the loss of `y_pred` against `y`.
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<f32>;

    /// Computes the derivative of the loss with respect to each prediction.
    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<Array1<f32>>;
}
