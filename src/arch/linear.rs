use ndarray::{Array1, ArrayView1};

use super::Model;
use crate::{MlErr, Result};

const WEIGHT: usize = 0;
const BIAS: usize = 1;
const SIZE: usize = 2;

/// A scalar linear model, `y = weight * x + bias`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    params: [f32; SIZE],
}

impl Linear {
    /// Creates a new `Linear`.
    ///
    /// # Arguments
    /// * `weight` - The initial slope.
    /// * `bias` - The initial intercept.
    ///
    /// # Returns
    /// A new `Linear` instance.
    pub fn new(weight: f32, bias: f32) -> Self {
        let mut params = [0.0; SIZE];
        params[WEIGHT] = weight;
        params[BIAS] = bias;
        Self { params }
    }

    pub fn weight(&self) -> f32 {
        self.params[WEIGHT]
    }

    pub fn bias(&self) -> f32 {
        self.params[BIAS]
    }

    /// Calls the model on a batch, same as [`predict`].
    pub fn evaluate(&self, x: ArrayView1<f32>) -> Array1<f32> {
        predict(self, x)
    }
}

/// Applies the linear transform of `model` element-wise over `x`.
///
/// # Arguments
/// * `model` - The model holding the current parameters.
/// * `x` - The input batch.
///
/// # Returns
/// A batch of predictions with the same length as `x`.
pub fn predict(model: &Linear, x: ArrayView1<f32>) -> Array1<f32> {
    let (w, b) = (model.weight(), model.bias());
    x.mapv(|x| w * x + b)
}

impl Model for Linear {
    fn size(&self) -> usize {
        SIZE
    }

    fn params(&self) -> &[f32] {
        &self.params
    }

    fn params_mut(&mut self) -> &mut [f32] {
        &mut self.params
    }

    fn forward(&self, x: ArrayView1<f32>) -> Array1<f32> {
        predict(self, x)
    }

    fn backward(&self, x: ArrayView1<f32>, d: ArrayView1<f32>, grad: &mut [f32]) -> Result<()> {
        if grad.len() != SIZE {
            return Err(MlErr::SizeMismatch {
                a: "grad",
                b: "params",
                got: grad.len(),
                expected: SIZE,
            });
        }

        if d.len() != x.len() {
            return Err(MlErr::SizeMismatch {
                a: "error signal",
                b: "input",
                got: d.len(),
                expected: x.len(),
            });
        }

        // dy/dw = x, dy/db = 1
        grad[WEIGHT] += d.dot(&x);
        grad[BIAS] += d.sum();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn predict_single_input() {
        let model = Linear::new(5.0, 0.0);
        let y = predict(&model, array![3.0].view());
        assert_eq!(y, array![15.0]);
    }

    #[test]
    fn predict_is_linear() {
        let model = Linear::new(-1.5, 0.25);
        let x = array![-2.0, 0.0, 1.0, 4.0];
        let y = predict(&model, x.view());

        let expected = &x * -1.5_f32 + 0.25_f32;
        assert_eq!(y, expected);
    }

    #[test]
    fn predict_is_idempotent() {
        let model = Linear::new(2.0, 1.0);
        let x = array![0.5, -0.5, 3.0];

        let first = predict(&model, x.view());
        let second = predict(&model, x.view());

        assert_eq!(first, second);
        assert_eq!(model, Linear::new(2.0, 1.0));
    }

    #[test]
    fn evaluate_matches_predict() {
        let model = Linear::new(0.3, -7.0);
        let x = array![1.0, 2.0, 3.0];
        assert_eq!(model.evaluate(x.view()), predict(&model, x.view()));
        assert_eq!(model.forward(x.view()), predict(&model, x.view()));
    }

    #[test]
    fn params_are_weight_then_bias() {
        let mut model = Linear::new(5.0, -1.0);
        assert_eq!(model.params(), &[5.0, -1.0]);

        model.params_mut()[1] = 2.0;
        assert_eq!(model.bias(), 2.0);
        assert_eq!(model.size(), model.params().len());
    }

    #[test]
    fn predict_empty_batch() {
        let model = Linear::new(1.0, 1.0);
        let y = predict(&model, Array1::<f32>::zeros(0).view());
        assert!(y.is_empty());
    }

    #[test]
    fn backward_accumulates() {
        let model = Linear::new(1.0, 0.0);
        let x = array![1.0, 2.0];
        let d = array![0.5, -1.0];
        let mut grad = [1.0, 1.0];

        model.backward(x.view(), d.view(), &mut grad).unwrap();

        // 1 + (0.5 * 1 - 1 * 2), 1 + (0.5 - 1)
        assert_eq!(grad, [-0.5, 0.5]);
    }

    #[test]
    fn backward_rejects_wrong_grad_size() {
        let model = Linear::new(1.0, 0.0);
        let x = array![1.0];
        let mut grad = [0.0; 3];

        let err = model.backward(x.view(), x.view(), &mut grad).unwrap_err();
        assert!(matches!(err, MlErr::SizeMismatch { got: 3, expected: 2, .. }));
    }

    #[test]
    fn backward_rejects_wrong_signal_size() {
        let model = Linear::new(1.0, 0.0);
        let x = array![1.0, 2.0];
        let d = array![1.0];
        let mut grad = [0.0; 2];

        let err = model.backward(x.view(), d.view(), &mut grad).unwrap_err();
        assert!(matches!(err, MlErr::SizeMismatch { got: 1, expected: 2, .. }));
    }
}
