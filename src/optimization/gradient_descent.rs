use super::Optimizer;
use crate::{MlErr, Result};

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Creates a new `GradientDescent` optimizer.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    ///
    /// # Returns
    /// An error if `learning_rate` is not positive and finite.
    pub fn new(learning_rate: f32) -> Result<Self> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(MlErr::InvalidLearningRate(learning_rate));
        }

        Ok(Self { learning_rate })
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    /// Makes a step in the opposite direction of the gradient, with a length of
    /// `learning_rate`.
    fn update_params(&mut self, params: &mut [f32], grad: &[f32]) -> Result<()> {
        if grad.len() != params.len() {
            return Err(MlErr::SizeMismatch {
                a: "grad",
                b: "params",
                got: grad.len(),
                expected: params.len(),
            });
        }

        let lr = self.learning_rate;

        for (p, g) in params.iter_mut().zip(grad) {
            *p -= lr * g;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_against_gradient() {
        let mut optimizer = GradientDescent::new(0.1).unwrap();
        let mut params = [5.0, 0.0];

        optimizer.update_params(&mut params, &[2.0, -4.0]).unwrap();

        assert!((params[0] - 4.8).abs() < 1e-6);
        assert!((params[1] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn keeps_learning_rate() {
        let optimizer = GradientDescent::new(0.25).unwrap();
        assert_eq!(optimizer.learning_rate(), 0.25);
    }

    #[test]
    fn rejects_size_mismatch() {
        let mut optimizer = GradientDescent::new(0.1).unwrap();
        let mut params = [1.0, 1.0];

        let err = optimizer.update_params(&mut params, &[1.0]).unwrap_err();
        assert!(matches!(err, MlErr::SizeMismatch { got: 1, expected: 2, .. }));
        assert_eq!(params, [1.0, 1.0]);
    }

    #[test]
    fn rejects_invalid_learning_rates() {
        for lr in [0.0, -0.1, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                GradientDescent::new(lr),
                Err(MlErr::InvalidLearningRate(_))
            ));
        }
    }
}
