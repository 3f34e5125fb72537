use crate::error::SimError;
use ndarray::{Array1, Array2, Zip};

/// Convert uniform draws into binary responses.
///
/// A trial is correct (`1`) when its draw falls below the probability of its stimulus column.
///
/// # Errors
/// Returns [`SimError::Shape`] if the number of columns of `trials`
/// differs from the length of `probs`.
pub fn generate(trials: &Array2<f64>, probs: &Array1<f64>) -> Result<Array2<u8>, SimError> {
    if trials.ncols() != probs.len() {
        return Err(SimError::Shape {
            expected: probs.len(),
            found: trials.ncols(),
        });
    }

    let probs = probs.broadcast(trials.dim()).ok_or(SimError::Shape {
        expected: probs.len(),
        found: trials.ncols(),
    })?;

    Ok(Zip::from(trials)
        .and(&probs)
        .map_collect(|&u, &prob| u8::from(u < prob)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn draw_below_probability_is_correct() {
        let trials = array![[0.1, 0.9, 0.5], [0.6, 0.2, 0.49]];
        let probs = array![0.5, 0.5, 0.5];
        let responses = generate(&trials, &probs).unwrap();
        assert_eq!(responses, array![[1u8, 0, 0], [0, 1, 1]]);
    }

    #[test]
    fn zero_draws_follow_probability_sign() {
        let trials = Array2::zeros((4, 3));
        let probs = array![0.0, 0.3, 1.0];
        let responses = generate(&trials, &probs).unwrap();
        for row in responses.rows() {
            assert_eq!(row.to_vec(), vec![0u8, 1, 1]);
        }
    }

    #[test]
    fn cells_are_binary() {
        let trials = Array2::from_shape_fn((10, 4), |(r, c)| ((r * 4 + c) as f64) / 40.0);
        let probs = array![0.2, 0.4, 0.6, 0.8];
        let responses = generate(&trials, &probs).unwrap();
        assert!(responses.iter().all(|&v| v == 0 || v == 1));
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let trials = Array2::zeros((2, 3));
        let probs = array![0.5, 0.5];
        assert_eq!(
            generate(&trials, &probs),
            Err(SimError::Shape {
                expected: 2,
                found: 3
            })
        );
    }
}
