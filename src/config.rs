use crate::model::WeibullParams;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Experiment configuration.
///
/// [`Config::default`] reproduces the reference experiment.
/// See [`Config::from_file`] for loading.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub stimulus: StimulusConfig,
    pub observer: ObserverConfig,
    pub experiment: ExperimentConfig,
}

/// Stimulus intensity sequences.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StimulusConfig {
    /// First stimulus intensity.
    pub initial: f64,
    /// Increment between consecutive intensities.
    pub step: f64,
    /// Number of points of the theoretical curve.
    pub curve_length: usize,
    /// Number of stimuli presented throughout the experiment.
    pub stimulus_count: usize,
}

/// Simulated observer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    /// Number of alternatives of the forced-choice task.
    pub alternatives: usize,
    pub chance_rate: f64,
    pub lapse_rate: f64,
    pub slope_criterion_prob: f64,
    pub threshold_mean: f64,
    pub spread_sd: f64,
    pub distance_d: f64,
}

/// Experiment repetitions.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Number of presentations of each stimulus.
    pub repetitions: usize,
}

impl Default for StimulusConfig {
    fn default() -> Self {
        Self {
            initial: 0.0,
            step: 0.05,
            curve_length: 21,
            stimulus_count: 20,
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            alternatives: 2,
            chance_rate: 0.5,
            lapse_rate: 0.05,
            slope_criterion_prob: 0.75,
            threshold_mean: 0.5,
            spread_sd: 0.3,
            distance_d: 0.01,
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self { repetitions: 100 }
    }
}

impl ObserverConfig {
    pub fn weibull_params(&self) -> WeibullParams {
        WeibullParams {
            chance_rate: self.chance_rate,
            lapse_rate: self.lapse_rate,
            slope_criterion_prob: self.slope_criterion_prob,
            threshold_mean: self.threshold_mean,
            spread_sd: self.spread_sd,
            distance_d: self.distance_d,
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// Missing fields take their reference values.
    /// Performs validation on all parameters before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents).context("failed to deserialize config")?;
        cfg.validate().context("failed to validate config")?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let stim = &self.stimulus;
        check_finite(stim.initial).context("invalid initial intensity")?;
        check_num(stim.initial, 0.0..).context("invalid initial intensity")?;
        check_finite(stim.step).context("invalid intensity step")?;
        if stim.step <= 0.0 {
            bail!("intensity step must be positive, but is {:?}", stim.step);
        }
        check_num(stim.curve_length, 1..10_000).context("invalid curve length")?;
        check_num(stim.stimulus_count, 1..10_000).context("invalid number of stimuli")?;

        let obs = &self.observer;
        check_num(obs.alternatives, 2..100).context("invalid number of alternatives")?;
        check_num(obs.chance_rate, 0.0..1.0).context("invalid chance rate")?;
        check_num(obs.lapse_rate, 0.0..1.0).context("invalid lapse rate")?;
        let ceiling = 1.0 - obs.lapse_rate;
        if obs.chance_rate >= ceiling {
            bail!(
                "chance rate must be below 1 - lapse rate ({ceiling:?}), but is {:?}",
                obs.chance_rate
            );
        }
        // Exclusive on both ends.
        if !(obs.slope_criterion_prob > obs.chance_rate && obs.slope_criterion_prob < ceiling) {
            bail!(
                "slope criterion probability must be in the range ({:?}, {ceiling:?}), but is {:?}",
                obs.chance_rate,
                obs.slope_criterion_prob
            );
        }
        check_finite(obs.threshold_mean).context("invalid threshold mean")?;
        if obs.threshold_mean <= 0.0 {
            bail!("threshold mean must be positive, but is {:?}", obs.threshold_mean);
        }
        check_finite(obs.spread_sd).context("invalid spread")?;
        if obs.spread_sd <= 0.0 {
            bail!("spread must be positive, but is {:?}", obs.spread_sd);
        }
        let range = ceiling - obs.chance_rate;
        if !(obs.distance_d > 0.0 && obs.distance_d < range) {
            bail!(
                "distance must be in the range (0.0, {range:?}), but is {:?}",
                obs.distance_d
            );
        }
        let unbiased = 1.0 / obs.alternatives as f64;
        if (obs.chance_rate - unbiased).abs() > 1e-9 {
            log::warn!(
                "chance rate {:?} differs from 1/{} for a {}-AFC task",
                obs.chance_rate,
                obs.alternatives,
                obs.alternatives
            );
        }

        check_num(self.experiment.repetitions, 1..1_000_000)
            .context("invalid number of repetitions")?;

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

fn check_finite(num: f64) -> Result<()> {
    if !num.is_finite() {
        bail!("number must be finite, but is {num:?}");
    }
    Ok(())
}
