use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, StandardUniform};

/// Draw a `rows x cols` matrix of independent uniform variates in `[0, 1)`.
///
/// Rows index repetitions and columns index stimuli. Cells are filled in row-major order.
pub fn sample_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Array2<f64> {
    Array2::from_shape_simple_fn((rows, cols), || StandardUniform.sample(rng))
}
