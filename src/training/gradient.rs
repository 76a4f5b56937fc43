use log::trace;
use ndarray::ArrayView1;

use crate::{
    Result,
    arch::{Model, loss::LossFn},
};

/// Computes the gradient of the loss with respect to every parameter of `model`, evaluated at
/// its current parameters.
///
/// `grad` is zeroed first, so every entry is computed from the same parameter values.
///
/// # Arguments
/// * `model` - The model to differentiate.
/// * `loss_fn` - The loss function.
/// * `x` - The input batch.
/// * `y` - The expected outputs.
/// * `grad` - A buffer with one entry per parameter where the gradient gets written.
///
/// # Returns
/// The loss at the current parameters, or an error if the batch or buffer sizes are invalid.
pub fn gradient<M, L>(
    model: &M,
    loss_fn: &L,
    x: ArrayView1<f32>,
    y: ArrayView1<f32>,
    grad: &mut [f32],
) -> Result<f32>
where
    M: Model,
    L: LossFn,
{
    grad.fill(0.0);

    let y_pred = model.forward(x);
    let loss = loss_fn.loss(y_pred.view(), y)?;
    let d = loss_fn.loss_prime(y_pred.view(), y)?;
    model.backward(x, d.view(), grad)?;

    trace!("loss={loss} grad={grad:?}");
    Ok(loss)
}
