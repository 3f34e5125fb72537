use crate::error::SimError;
use ndarray::Array1;

/// Psychophysical parameters of the Weibull psychometric function.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct WeibullParams {
    /// Probability of a correct guess (`PG`), `1 / alternatives` for an unbiased observer.
    pub chance_rate: f64,
    /// Probability of an attention lapse (`PL`).
    pub lapse_rate: f64,
    /// Probability of a correct response reached at `threshold_mean` (`PINUM`).
    pub slope_criterion_prob: f64,
    /// Stimulus intensity at which `slope_criterion_prob` is reached (`MEAN`).
    pub threshold_mean: f64,
    /// Spread controlling the slope of the curve (`SD`).
    pub spread_sd: f64,
    /// Distance from the floor and ceiling used to derive the slope (`D`).
    pub distance_d: f64,
}

/// Weibull psychometric function.
///
/// The scale `a` and slope `b` depend only on the parameters and are computed once.
#[derive(Debug, Clone)]
pub struct WeibullModel {
    params: WeibullParams,
    a: f64,
    b: f64,
}

impl WeibullModel {
    /// Derive the scale and slope of the curve from `params`.
    ///
    /// # Errors
    /// Returns [`SimError::Parameters`] if the derived scale or slope
    /// is not a finite positive number.
    pub fn new(params: WeibullParams) -> Result<Self, SimError> {
        let WeibullParams {
            chance_rate: pg,
            lapse_rate: pl,
            slope_criterion_prob: pinum,
            threshold_mean: mean,
            spread_sd: sd,
            distance_d: d,
        } = params;

        let range = 1.0 - pl - pg;

        // Slope: base-10 logarithm of a ratio of natural logarithms.
        let first = (d / range).ln();
        let second = ((range - d) / range).ln();
        let b = (1.0 / sd) * (first / second).log10();
        if !b.is_finite() || b <= 0.0 {
            return Err(SimError::Parameters(format!(
                "slope must be finite and positive, but is {b}"
            )));
        }

        let um = (range / (1.0 - pl - pinum)).ln();
        let a = mean * um.powf(-1.0 / b);
        if !a.is_finite() || a <= 0.0 {
            return Err(SimError::Parameters(format!(
                "scale must be finite and positive, but is {a}"
            )));
        }

        Ok(Self { params, a, b })
    }

    pub fn params(&self) -> &WeibullParams {
        &self.params
    }

    /// Scale `a` of the curve.
    pub fn scale(&self) -> f64 {
        self.a
    }

    /// Slope `b` of the curve.
    pub fn slope(&self) -> f64 {
        self.b
    }

    /// Probability of a correct response at stimulus intensity `x`.
    ///
    /// # Errors
    /// Returns [`SimError::Domain`] if `x` is not finite, if `x` is negative
    /// while the slope is not an integer, or if the result is not a number.
    pub fn probability_correct(&self, x: f64) -> Result<f64, SimError> {
        if !x.is_finite() || (x < 0.0 && self.b.fract() != 0.0) {
            return Err(SimError::Domain { x });
        }

        let WeibullParams {
            chance_rate: pg,
            lapse_rate: pl,
            ..
        } = self.params;

        let d2 = -(x / self.a).powf(self.b);
        let prob = 1.0 - pl - (1.0 - pl - pg) * d2.exp();
        if prob.is_nan() {
            return Err(SimError::Domain { x });
        }

        Ok(prob)
    }

    /// Evaluate the model at every intensity of `xs`, stopping at the first failure.
    pub fn curve(&self, xs: &Array1<f64>) -> Result<Array1<f64>, SimError> {
        let probs = xs
            .iter()
            .map(|&x| self.probability_correct(x))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Array1::from(probs))
    }
}
