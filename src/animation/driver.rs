use std::fmt::Debug;

use crate::animation::wave;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{PhasorError, PhasorResult};
use crate::state::container::State;
use crate::state::shared::SharedState;

/// Values the driver can read a frequency from.
pub trait AsScalar {
    fn as_scalar(&self) -> Option<f64>;
}

impl AsScalar for f64 {
    fn as_scalar(&self) -> Option<f64> {
        Some(*self)
    }
}

/// One record per animation tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub index: FrameIndex,
    /// Position within the current period, bouncing between 0 and the period length.
    pub phase: f64,
    /// Set only on the first frame after a state change was consumed.
    pub changed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverOpts {
    /// Phase advance per frame.
    pub step: f64,
}

impl Default for DriverOpts {
    fn default() -> Self {
        Self { step: 0.1 }
    }
}

/// Cursor of the infinite frame sequence.
///
/// Every pull reads the frequency fresh from the state container, so control changes apply
/// without restarting. A pending state change is consumed (acknowledged) by the pull that sees
/// it, and that pull emits `changed = true` with the phase reset to 0.
#[derive(Clone, Debug)]
pub struct FrameDriver<K> {
    frequency_key: K,
    step: f64,
    index: u64,
    x: f64,
    direction: Direction,
}

impl<K> FrameDriver<K>
where
    K: Ord + Clone + Debug,
{
    pub fn new(frequency_key: K, opts: DriverOpts) -> PhasorResult<Self> {
        if !opts.step.is_finite() || opts.step <= 0.0 {
            return Err(PhasorError::validation(format!(
                "driver step must be finite and > 0 (got {})",
                opts.step
            )));
        }
        Ok(Self {
            frequency_key,
            step: opts.step,
            index: 0,
            x: 0.0,
            direction: Direction::Forward,
        })
    }

    /// Produce the next frame record and advance the cursor.
    ///
    /// On error (missing key, non-scalar or invalid frequency) neither the cursor nor the
    /// container is modified.
    pub fn next_frame<V>(&mut self, state: &mut State<K, V>) -> PhasorResult<Frame>
    where
        V: AsScalar + Clone + PartialEq,
    {
        let frequency = state.get(&self.frequency_key)?.as_scalar().ok_or_else(|| {
            PhasorError::validation(format!(
                "frequency property {:?} does not hold a scalar",
                self.frequency_key
            ))
        })?;
        let period_length = wave::period_length(frequency)?;

        let changed = state.has_changed();
        if changed {
            self.x = 0.0;
            state.acknowledge();
            tracing::debug!(frame = self.index, frequency, "state change consumed");
        }

        let frame = Frame {
            index: FrameIndex(self.index),
            phase: self.x,
            changed,
        };

        if self.x <= 0.0 {
            self.direction = Direction::Forward;
        } else if self.x >= period_length {
            self.direction = Direction::Backward;
        }
        self.x += self.direction.sign() * self.step;
        self.index += 1;

        tracing::trace!(frame = frame.index.0, phase = frame.phase, "frame");
        Ok(frame)
    }

    /// Turn this cursor into an iterator pulling from `state`.
    pub fn frames<V>(self, state: SharedState<K, V>) -> Frames<K, V>
    where
        V: AsScalar + Clone + PartialEq,
    {
        Frames {
            driver: self,
            state,
        }
    }

    /// Index of the next frame to be produced.
    pub fn index(&self) -> FrameIndex {
        FrameIndex(self.index)
    }

    /// Phase of the next frame to be produced (before any change reset).
    pub fn phase(&self) -> f64 {
        self.x
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Infinite pull-based frame sequence over a shared container.
///
/// Never yields `None`; callers stop by no longer pulling.
#[derive(Debug)]
pub struct Frames<K, V> {
    driver: FrameDriver<K>,
    state: SharedState<K, V>,
}

impl<K, V> Frames<K, V>
where
    K: Ord + Clone + Debug,
    V: AsScalar + Clone + PartialEq,
{
    pub fn driver(&self) -> &FrameDriver<K> {
        &self.driver
    }

    pub fn state(&self) -> &SharedState<K, V> {
        &self.state
    }
}

impl<K, V> Iterator for Frames<K, V>
where
    K: Ord + Clone + Debug,
    V: AsScalar + Clone + PartialEq,
{
    type Item = PhasorResult<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        let driver = &mut self.driver;
        Some(self.state.with(|s| driver.next_frame(s)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
