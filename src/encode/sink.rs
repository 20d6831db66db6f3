use crate::animation::driver::Frame;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{PhasorError, PhasorResult};
use crate::scene::geometry::SceneGeometry;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkConfig {
    pub canvas: Canvas,
    /// Playback rate implied by the scheduler's tick interval.
    pub fps: Fps,
}

/// Rendering collaborator fed once per frame.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order between
/// one `begin` and one `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: &SinkConfig) -> PhasorResult<()>;
    /// Push one frame's record and geometry.
    fn push_frame(&mut self, frame: &Frame, scene: &SceneGeometry) -> PhasorResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> PhasorResult<()>;
}

/// Enforces the strictly increasing push order; shared by the built-in sinks.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct OrderGuard {
    last: Option<FrameIndex>,
}

impl OrderGuard {
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    pub(crate) fn check(&mut self, idx: FrameIndex) -> PhasorResult<()> {
        if let Some(last) = self.last
            && idx <= last
        {
            return Err(PhasorError::validation(format!(
                "frame {} pushed after frame {}",
                idx.0, last.0
            )));
        }
        self.last = Some(idx);
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    order: OrderGuard,
    frames: Vec<(Frame, SceneGeometry)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(Frame, SceneGeometry)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: &SinkConfig) -> PhasorResult<()> {
        self.cfg = Some(*cfg);
        self.order.reset();
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame, scene: &SceneGeometry) -> PhasorResult<()> {
        if self.cfg.is_none() {
            return Err(PhasorError::validation("push_frame called before begin"));
        }
        self.order.check(frame.index)?;
        self.frames.push((*frame, scene.clone()));
        Ok(())
    }

    fn end(&mut self) -> PhasorResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
