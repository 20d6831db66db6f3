use std::f64::consts::TAU;
use std::fmt;

use crate::foundation::error::{PhasorError, PhasorResult};

/// Periodic base function of a [`Wave`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TrigFunction {
    #[default]
    Sine,
    Cosine,
}

impl TrigFunction {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Sine => t.sin(),
            Self::Cosine => t.cos(),
        }
    }

    /// Short name used in equations (`sin` / `cos`).
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sine => "sin",
            Self::Cosine => "cos",
        }
    }
}

/// `amplitude * f(frequency * (x - phase_shift)) + vertical_shift`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Wave {
    pub function: TrigFunction,
    pub amplitude: f64,
    pub frequency: f64,
    pub phase_shift: f64,
    pub vertical_shift: f64,
}

impl Default for Wave {
    fn default() -> Self {
        Self::unit(TrigFunction::Sine)
    }
}

impl Wave {
    /// Unshifted wave with amplitude and frequency 1.
    pub fn unit(function: TrigFunction) -> Self {
        Self {
            function,
            amplitude: 1.0,
            frequency: 1.0,
            phase_shift: 0.0,
            vertical_shift: 0.0,
        }
    }

    /// Unshifted wave with the given amplitude and frequency.
    pub fn scaled(function: TrigFunction, amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
            ..Self::unit(function)
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.amplitude * self.function.apply(self.frequency * (x - self.phase_shift))
            + self.vertical_shift
    }

    pub fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    pub fn period_length(&self) -> PhasorResult<f64> {
        period_length(self.frequency)
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} × {}({:.2} × (x - {:.2})) + {:.2}",
            self.amplitude,
            self.function.symbol(),
            self.frequency,
            self.phase_shift,
            self.vertical_shift
        )
    }
}

/// Span of x after which a wave of `frequency` repeats, for a base period of `interval`.
pub fn period(interval: f64, frequency: f64) -> PhasorResult<f64> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(PhasorError::InvalidFrequency(frequency));
    }
    Ok(interval / frequency)
}

/// `2π / frequency`.
pub fn period_length(frequency: f64) -> PhasorResult<f64> {
    period(TAU, frequency)
}

/// `n` evenly spaced samples over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/wave.rs"]
mod tests;
