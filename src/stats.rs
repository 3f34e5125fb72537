use crate::error::SimError;
use ndarray::{Array1, Array2};

/// Compute the proportion of correct responses for every stimulus column.
///
/// # Errors
/// Returns [`SimError::EmptyInput`] if `responses` has no rows.
pub fn proportions(responses: &Array2<u8>) -> Result<Array1<f64>, SimError> {
    let n_rows = responses.nrows();
    if n_rows == 0 {
        return Err(SimError::EmptyInput);
    }

    let mut sum = Array1::<f64>::zeros(responses.ncols());
    for row in responses.rows() {
        for (acc, &val) in sum.iter_mut().zip(row.iter()) {
            *acc += f64::from(val);
        }
    }

    Ok(sum / n_rows as f64)
}

/// Standard error of a proportion `prob` estimated from `n_trials` Bernoulli trials.
pub fn binomial_std_err(prob: f64, n_trials: usize) -> f64 {
    if n_trials == 0 {
        return f64::NAN;
    }
    (prob * (1.0 - prob) / n_trials as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Axis, array};
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn column_means_are_exact() {
        let responses = array![[1u8, 0, 1], [1, 0, 0], [1, 1, 0], [1, 0, 0]];
        let props = proportions(&responses).unwrap();
        assert_eq!(props, array![1.0, 0.25, 0.25]);
    }

    #[test]
    fn row_order_does_not_matter() {
        let mut rng = ChaCha12Rng::seed_from_u64(11);
        let responses =
            Array2::from_shape_fn((100, 20), |(r, c)| u8::from((r * 7 + c * 13) % 5 < 3));

        let mut order: Vec<usize> = (0..responses.nrows()).collect();
        order.shuffle(&mut rng);
        let shuffled = responses.select(Axis(0), &order);

        assert_eq!(
            proportions(&responses).unwrap(),
            proportions(&shuffled).unwrap()
        );
    }

    #[test]
    fn proportions_are_bounded() {
        let responses = Array2::from_shape_fn((37, 6), |(r, c)| u8::from(r % (c + 1) == 0));
        let props = proportions(&responses).unwrap();
        assert!(props.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn zero_rows_are_rejected() {
        let responses = Array2::<u8>::zeros((0, 5));
        assert_eq!(proportions(&responses), Err(SimError::EmptyInput));
    }

    #[test]
    fn std_err_of_reference_threshold() {
        let std_err = binomial_std_err(0.75, 100);
        assert!((std_err - 0.0433).abs() < 1e-4);
        assert_eq!(binomial_std_err(1.0, 100), 0.0);
        assert!(binomial_std_err(0.5, 0).is_nan());
    }
}
