use std::collections::BTreeMap;

use crate::animation::wave::TrigFunction;
use crate::foundation::error::{PhasorError, PhasorResult};
use crate::scene::props::{SceneParams, SceneProp, SceneValue};
use crate::state::shared::SharedState;

/// Valid range of one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub fn check(&self, value: f64) -> PhasorResult<()> {
        if !value.is_finite() || value < self.min || value > self.max {
            return Err(PhasorError::validation(format!(
                "{} must be within [{}, {}] (got {value})",
                self.label, self.min, self.max
            )));
        }
        Ok(())
    }

    /// Clamp into range and round to the nearest multiple of the slider step.
    pub fn snap(&self, value: f64) -> f64 {
        let per_unit = (1.0 / self.step).round();
        let clamped = value.clamp(self.min, self.max);
        ((clamped * per_unit).round() / per_unit).clamp(self.min, self.max)
    }
}

pub const PHASE_SHIFT_RANGE: SliderRange = SliderRange {
    label: "phase",
    min: -2.0,
    max: 2.0,
    step: 0.05,
};

pub const VERTICAL_SHIFT_RANGE: SliderRange = SliderRange {
    label: "vertical shift",
    min: -2.0,
    max: 2.0,
    step: 0.05,
};

pub const FREQUENCY_RANGE: SliderRange = SliderRange {
    label: "frequency",
    min: 0.5,
    max: 2.0,
    step: 0.05,
};

pub const AMPLITUDE_RANGE: SliderRange = SliderRange {
    label: "amplitude",
    min: -2.0,
    max: 2.0,
    step: 0.05,
};

/// Values of the trig toggle and the four sliders.
///
/// Controls always report together: [`Controls::apply`] writes all five values in one
/// `set_multiple`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Controls {
    pub trig_function: TrigFunction,
    pub phase_shift: f64,
    pub vertical_shift: f64,
    pub frequency: f64,
    pub amplitude: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self::from(SceneParams::default())
    }
}

impl From<SceneParams> for Controls {
    fn from(p: SceneParams) -> Self {
        Self {
            trig_function: p.trig_function,
            phase_shift: p.phase_shift,
            vertical_shift: p.vertical_shift,
            frequency: p.horizontal_scalar,
            amplitude: p.vertical_scalar,
        }
    }
}

impl From<Controls> for SceneParams {
    fn from(c: Controls) -> Self {
        Self {
            trig_function: c.trig_function,
            phase_shift: c.phase_shift,
            vertical_shift: c.vertical_shift,
            horizontal_scalar: c.frequency,
            vertical_scalar: c.amplitude,
        }
    }
}

impl Controls {
    pub fn validate(&self) -> PhasorResult<()> {
        PHASE_SHIFT_RANGE.check(self.phase_shift)?;
        VERTICAL_SHIFT_RANGE.check(self.vertical_shift)?;
        FREQUENCY_RANGE.check(self.frequency)?;
        AMPLITUDE_RANGE.check(self.amplitude)?;
        Ok(())
    }

    /// Same controls with every slider clamped and snapped to its step.
    pub fn snapped(self) -> Self {
        Self {
            trig_function: self.trig_function,
            phase_shift: PHASE_SHIFT_RANGE.snap(self.phase_shift),
            vertical_shift: VERTICAL_SHIFT_RANGE.snap(self.vertical_shift),
            frequency: FREQUENCY_RANGE.snap(self.frequency),
            amplitude: AMPLITUDE_RANGE.snap(self.amplitude),
        }
    }

    /// Validate, snap to the slider steps and push every bound value into `state` at once.
    pub fn apply(
        &self,
        state: &SharedState<SceneProp, SceneValue>,
    ) -> PhasorResult<BTreeMap<SceneProp, SceneValue>> {
        self.validate()?;
        Ok(state.set_multiple(SceneParams::from(self.snapped()).to_values()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/controls.rs"]
mod tests;
