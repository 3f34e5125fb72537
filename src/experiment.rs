use crate::config::Config;
use crate::model::WeibullModel;
use crate::response::generate;
use crate::sampler::sample_matrix;
use crate::stats::{binomial_std_err, proportions};
use crate::stimulus::sequence;
use anyhow::{Context, Result};
use ndarray::Array1;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

/// Stimulus intensities paired with one value per intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub stimuli: Array1<f64>,
    pub values: Array1<f64>,
}

/// Simulated n-AFC experiment.
///
/// Holds the configuration, the psychometric model and the random number generator.
pub struct Experiment {
    cfg: Config,
    model: WeibullModel,
    rng: ChaCha12Rng,
    seed: u64,
}

impl Experiment {
    /// Create a new `Experiment` from a validated configuration.
    ///
    /// Without a `seed` one is drawn from the operating system.
    pub fn new(cfg: Config, seed: Option<u64>) -> Result<Self> {
        let model = WeibullModel::new(cfg.observer.weibull_params())
            .context("failed to construct Weibull model")?;
        log::debug!("{:?}", model.params());
        log::debug!("scale = {}, slope = {}", model.scale(), model.slope());

        let seed = seed.unwrap_or_else(rand::random);
        log::info!("seed = {seed}");
        let rng = ChaCha12Rng::seed_from_u64(seed);

        Ok(Self {
            cfg,
            model,
            rng,
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Evaluate the psychometric function on the theoretical curve intensities.
    pub fn theoretical_curve(&self) -> Result<Curve> {
        let stim = &self.cfg.stimulus;
        let stimuli = sequence(stim.initial, stim.step, stim.curve_length);
        let values = self
            .model
            .curve(&stimuli)
            .context("failed to evaluate psychometric function")?;
        Ok(Curve { stimuli, values })
    }

    /// Present every stimulus `repetitions` times and compute the proportion of correct responses.
    pub fn run_experiment(&mut self) -> Result<Curve> {
        let stim = &self.cfg.stimulus;
        let n_rep = self.cfg.experiment.repetitions;

        let stimuli = sequence(stim.initial, stim.step, stim.stimulus_count);
        let probs = self
            .model
            .curve(&stimuli)
            .context("failed to evaluate psychometric function")?;

        let trials = sample_matrix(n_rep, stimuli.len(), &mut self.rng);
        log::info!("sampled {} trials", trials.len());

        let responses = generate(&trials, &probs).context("failed to generate responses")?;

        let values = proportions(&responses).context("failed to compute proportions")?;
        for (i_stim, &prob) in values.iter().enumerate() {
            log::debug!(
                "stimulus {i_stim}: proportion = {prob:.4} +/- {:.4}",
                binomial_std_err(prob, n_rep)
            );
        }

        Ok(Curve { stimuli, values })
    }
}
