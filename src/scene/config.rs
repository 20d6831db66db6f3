use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::driver::DriverOpts;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{PhasorError, PhasorResult};
use crate::scene::controls::Controls;

/// Control values pushed into the state right before frame `frame` is pulled.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControlEvent {
    pub frame: u64,
    pub controls: Controls,
}

/// JSON-facing description of one animation run. Every field is optional.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub canvas: Canvas,
    /// Phase advance per frame.
    pub step: f64,
    /// Tick interval of the animation scheduler.
    pub interval_ms: u32,
    /// Upper bound on frames produced by one run.
    pub max_frames: u64,
    /// Initial control values.
    pub controls: Controls,
    /// Scripted control changes, in non-decreasing frame order.
    pub events: Vec<ControlEvent>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            step: DriverOpts::default().step,
            interval_ms: 50,
            max_frames: 1500,
            controls: Controls::default(),
            events: Vec::new(),
        }
    }
}

impl SceneConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> PhasorResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PhasorError::serde(format!("parse scene config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> PhasorResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PhasorError::validation(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> PhasorResult<()> {
        self.canvas.validate()?;
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(PhasorError::validation(format!(
                "step must be finite and > 0 (got {})",
                self.step
            )));
        }
        Fps::from_interval_ms(self.interval_ms)?;
        if self.max_frames == 0 {
            return Err(PhasorError::validation("max_frames must be > 0"));
        }
        self.controls.validate()?;

        let mut last = 0;
        for (i, ev) in self.events.iter().enumerate() {
            if ev.frame < last {
                return Err(PhasorError::validation(format!(
                    "events[{i}] at frame {} comes before frame {last}",
                    ev.frame
                )));
            }
            ev.controls
                .validate()
                .map_err(|e| PhasorError::validation(format!("events[{i}]: {e}")))?;
            last = ev.frame;
        }
        Ok(())
    }

    pub fn driver_opts(&self) -> DriverOpts {
        DriverOpts { step: self.step }
    }

    pub fn fps(&self) -> PhasorResult<Fps> {
        Fps::from_interval_ms(self.interval_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
