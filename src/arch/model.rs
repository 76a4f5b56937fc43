use ndarray::{Array1, ArrayView1};

use crate::Result;

/// A differentiable model whose parameters live in a flat slice.
pub trait Model {
    /// Returns the amount of parameters in the model.
    fn size(&self) -> usize;

    /// Returns the model's parameters as a flat slice.
    fn params(&self) -> &[f32];

    /// Returns the model's parameters as a mutable flat slice, so optimizers can update them
    /// in place.
    fn params_mut(&mut self) -> &mut [f32];

    /// Makes a forward pass over a batch of inputs.
    ///
    /// # Arguments
    /// * `x` - The input batch.
    ///
    /// # Returns
    /// One prediction per input.
    fn forward(&self, x: ArrayView1<f32>) -> Array1<f32>;

    /// Back-propagates the error signal `d` (the derivative of the loss with respect to each
    /// prediction) into the parameters' gradient.
    ///
    /// Implementations must add to `grad` rather than overwrite it.
    ///
    /// # Arguments
    /// * `x` - The input batch the predictions were made with.
    /// * `d` - The error signal, one entry per input.
    /// * `grad` - The gradient buffer, with one entry per parameter.
    ///
    /// # Returns
    /// An error if `d` and `x` or `grad` and the parameters differ in size.
    fn backward(&self, x: ArrayView1<f32>, d: ArrayView1<f32>, grad: &mut [f32]) -> Result<()>;
}
