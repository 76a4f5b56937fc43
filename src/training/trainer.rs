use log::{debug, info};
use ndarray::ArrayView1;

use super::{History, gradient};
use crate::{
    Result,
    arch::{
        Linear, Model,
        loss::{LossFn, Mse},
    },
    dataset::Dataset,
    optimization::{GradientDescent, Optimizer},
};

/// Runs full-batch training: every step differentiates the loss over the whole dataset and
/// then lets the optimizer update the parameters once.
pub struct Trainer<O: Optimizer, L: LossFn> {
    optimizer: O,
    loss_fn: L,
    grad: Vec<f32>,
}

impl<O: Optimizer, L: LossFn> Trainer<O, L> {
    /// Creates a new `Trainer`.
    ///
    /// # Arguments
    /// * `optimizer` - Dictates how the parameters are updated from the gradient.
    /// * `loss_fn` - Measures the difference between the model's output and the expected one.
    pub fn new(optimizer: O, loss_fn: L) -> Self {
        Self {
            optimizer,
            loss_fn,
            grad: Vec::new(),
        }
    }

    /// Performs a single update of `model`'s parameters.
    ///
    /// The whole gradient is computed before any parameter is touched.
    ///
    /// # Arguments
    /// * `model` - The model to train.
    /// * `x` - The input batch.
    /// * `y` - The expected outputs.
    ///
    /// # Returns
    /// The loss before the update.
    pub fn step<M: Model>(
        &mut self,
        model: &mut M,
        x: ArrayView1<f32>,
        y: ArrayView1<f32>,
    ) -> Result<f32> {
        self.grad.resize(model.size(), 0.0);

        let loss = gradient(&*model, &self.loss_fn, x, y, &mut self.grad)?;
        self.optimizer.update_params(model.params_mut(), &self.grad)?;

        Ok(loss)
    }

    /// Trains `model` for exactly `epochs` steps over `dataset`.
    ///
    /// Before each step the current parameters and loss are appended to the returned history.
    /// The first error aborts the run.
    pub fn fit(&mut self, model: &mut Linear, dataset: &Dataset, epochs: usize) -> Result<History> {
        let mut history = History::with_capacity(epochs);
        info!(
            "training for {epochs} epoch(s) over {} sample(s)",
            dataset.len()
        );

        for epoch in 0..epochs {
            let before = *model;
            let loss = self.step(model, dataset.inputs(), dataset.targets())?;
            history.push(&before, loss);

            debug!(
                epoch = epoch, weight = before.weight(), bias = before.bias(), loss = loss;
                "epoch finished"
            );
        }

        if let Some(last) = history.last() {
            info!("finished training, last recorded loss {}", last.loss);
        }

        Ok(history)
    }
}

/// Applies one gradient descent step of mean squared error to `model`.
///
/// # Arguments
/// * `model` - The model whose parameters get updated in place.
/// * `inputs` - The input batch.
/// * `targets` - The expected outputs, same length as `inputs`.
/// * `learning_rate` - The step size, must be positive.
///
/// # Returns
/// An error if the learning rate is invalid or the batch is empty or mismatched.
pub fn train_step(
    model: &mut Linear,
    inputs: ArrayView1<f32>,
    targets: ArrayView1<f32>,
    learning_rate: f32,
) -> Result<()> {
    let optimizer = GradientDescent::new(learning_rate)?;
    Trainer::new(optimizer, Mse).step(model, inputs, targets)?;
    Ok(())
}
