use std::collections::BTreeMap;
use std::fmt;

use crate::animation::driver::AsScalar;
use crate::animation::wave::{TrigFunction, Wave};
use crate::foundation::error::{PhasorError, PhasorResult};
use crate::state::container::State;

/// Keys of the sinusoid scene state.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneProp {
    TrigFunction,
    PhaseShift,
    VerticalShift,
    /// Frequency.
    HorizontalScalar,
    /// Amplitude.
    VerticalScalar,
}

impl fmt::Display for SceneProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TrigFunction => "trig_function",
            Self::PhaseShift => "phase_shift",
            Self::VerticalShift => "vertical_shift",
            Self::HorizontalScalar => "horizontal_scalar",
            Self::VerticalScalar => "vertical_scalar",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SceneValue {
    Trig(TrigFunction),
    Scalar(f64),
}

impl AsScalar for SceneValue {
    fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Trig(_) => None,
        }
    }
}

impl From<f64> for SceneValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<TrigFunction> for SceneValue {
    fn from(v: TrigFunction) -> Self {
        Self::Trig(v)
    }
}

pub type SceneState = State<SceneProp, SceneValue>;

/// Typed snapshot of the scene state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneParams {
    pub trig_function: TrigFunction,
    pub phase_shift: f64,
    pub vertical_shift: f64,
    pub horizontal_scalar: f64,
    pub vertical_scalar: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            trig_function: TrigFunction::Sine,
            phase_shift: 0.0,
            vertical_shift: 0.0,
            horizontal_scalar: 1.0,
            vertical_scalar: 1.0,
        }
    }
}

impl SceneParams {
    /// Read every scene property out of a `get_all()` snapshot.
    pub fn from_values(values: &BTreeMap<SceneProp, SceneValue>) -> PhasorResult<Self> {
        let scalar = |prop: SceneProp| -> PhasorResult<f64> {
            match values.get(&prop) {
                Some(SceneValue::Scalar(v)) => Ok(*v),
                Some(SceneValue::Trig(_)) => Err(PhasorError::validation(format!(
                    "scene property '{prop}' must be a number"
                ))),
                None => Err(PhasorError::key_not_found(prop)),
            }
        };
        let trig_function = match values.get(&SceneProp::TrigFunction) {
            Some(SceneValue::Trig(t)) => *t,
            Some(SceneValue::Scalar(_)) => {
                return Err(PhasorError::validation(
                    "scene property 'trig_function' must be 'sine' or 'cosine'",
                ));
            }
            None => return Err(PhasorError::key_not_found(SceneProp::TrigFunction)),
        };

        Ok(Self {
            trig_function,
            phase_shift: scalar(SceneProp::PhaseShift)?,
            vertical_shift: scalar(SceneProp::VerticalShift)?,
            horizontal_scalar: scalar(SceneProp::HorizontalScalar)?,
            vertical_scalar: scalar(SceneProp::VerticalScalar)?,
        })
    }

    /// All five bound values, in the shape `set_multiple` and `define` take.
    pub fn to_values(self) -> [(SceneProp, SceneValue); 5] {
        [
            (SceneProp::TrigFunction, self.trig_function.into()),
            (SceneProp::PhaseShift, self.phase_shift.into()),
            (SceneProp::VerticalShift, self.vertical_shift.into()),
            (SceneProp::HorizontalScalar, self.horizontal_scalar.into()),
            (SceneProp::VerticalScalar, self.vertical_scalar.into()),
        ]
    }

    /// Fresh scene state seeded with these values.
    pub fn into_state(self) -> SceneState {
        State::with_defaults(self.to_values())
    }

    /// Wave equation selected by the current parameters.
    pub fn wave(&self) -> Wave {
        Wave {
            function: self.trig_function,
            amplitude: self.vertical_scalar,
            frequency: self.horizontal_scalar,
            phase_shift: self.phase_shift,
            vertical_shift: self.vertical_shift,
        }
    }

    /// `"<equation>; T = 2π/<frequency>"`.
    pub fn title(&self) -> String {
        format!("{}; T = 2π/{:.2}", self.wave(), self.horizontal_scalar)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/props.rs"]
mod tests;
