use ndarray::{Array1, ArrayView1};
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::{Normal, StandardNormal};

use crate::{MlErr, Result};

/// A fixed batch of scalar inputs and their targets.
#[derive(Debug, Clone)]
pub struct Dataset {
    inputs: Array1<f32>,
    targets: Array1<f32>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `inputs` - The input samples.
    /// * `targets` - The expected output for each input.
    ///
    /// # Returns
    /// An error if `inputs` and `targets` differ in length.
    pub fn new(inputs: Array1<f32>, targets: Array1<f32>) -> Result<Self> {
        if inputs.len() != targets.len() {
            return Err(MlErr::SizeMismatch {
                a: "inputs",
                b: "targets",
                got: inputs.len(),
                expected: targets.len(),
            });
        }

        Ok(Self { inputs, targets })
    }

    /// Generates `samples` points of a noisy line.
    ///
    /// Inputs are drawn from a standard normal and the targets are
    /// `inputs * true_weight + true_bias + noise`, with `noise ~ N(0, noise_std)`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `samples` - The amount of points to generate.
    /// * `true_weight` - The slope of the underlying line.
    /// * `true_bias` - The intercept of the underlying line.
    /// * `noise_std` - The standard deviation of the additive noise.
    ///
    /// # Returns
    /// An error if `noise_std` is not finite.
    pub fn synthetic<R: Rng + ?Sized>(
        rng: &mut R,
        samples: usize,
        true_weight: f32,
        true_bias: f32,
        noise_std: f32,
    ) -> Result<Self> {
        let noise_distr = Normal::new(0.0, noise_std)?;

        let inputs = Array1::<f32>::random_using(samples, StandardNormal, rng);
        let noise = Array1::<f32>::random_using(samples, noise_distr, rng);
        let targets = &inputs * true_weight + true_bias + noise;

        Self::new(inputs, targets)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> ArrayView1<'_, f32> {
        self.inputs.view()
    }

    pub fn targets(&self) -> ArrayView1<'_, f32> {
        self.targets.view()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn rejects_unequal_lengths() {
        let err = Dataset::new(array![1.0, 2.0], array![1.0]).unwrap_err();
        assert!(matches!(err, MlErr::SizeMismatch { got: 2, expected: 1, .. }));
    }

    #[test]
    fn synthetic_has_requested_len() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = Dataset::synthetic(&mut rng, 100, 3.0, 2.0, 1.0).unwrap();

        assert_eq!(dataset.len(), 100);
        assert_eq!(dataset.inputs().len(), dataset.targets().len());
    }

    #[test]
    fn synthetic_is_reproducible() {
        let a = Dataset::synthetic(&mut StdRng::seed_from_u64(7), 16, 3.0, 2.0, 1.0).unwrap();
        let b = Dataset::synthetic(&mut StdRng::seed_from_u64(7), 16, 3.0, 2.0, 1.0).unwrap();

        assert_eq!(a.inputs(), b.inputs());
        assert_eq!(a.targets(), b.targets());
    }

    #[test]
    fn synthetic_follows_line_without_noise() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = Dataset::synthetic(&mut rng, 32, 3.0, 2.0, 0.0).unwrap();

        for (x, y) in dataset.inputs().iter().zip(dataset.targets()) {
            assert!((x * 3.0 + 2.0 - y).abs() < 1e-5);
        }
    }

    #[test]
    fn synthetic_rejects_invalid_noise() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = Dataset::synthetic(&mut rng, 8, 3.0, 2.0, f32::NAN).unwrap_err();
        assert!(matches!(err, MlErr::Distribution(_)));
    }
}
