use crate::animation::driver::{Frame, FrameDriver, Frames};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{PhasorError, PhasorResult};
use crate::scene::config::{ControlEvent, SceneConfig};
use crate::scene::controls::Controls;
use crate::scene::geometry::{SceneGeometry, compute};
use crate::scene::props::{SceneParams, SceneProp, SceneValue};
use crate::state::shared::SharedState;

/// Summary of one [`Player::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayStats {
    /// Frames pushed into the sink.
    pub frames: u64,
    /// Frames that carried a consumed state change.
    pub changes: u64,
}

/// Animation scheduler: pulls frames, replays scripted control events and feeds a sink.
///
/// The state handle can be cloned out with [`Player::state`] so other writers can push controls
/// between pulls.
#[derive(Debug)]
pub struct Player {
    config: SceneConfig,
    frames: Frames<SceneProp, SceneValue>,
    next_event: usize,
}

impl Player {
    pub fn new(config: SceneConfig) -> PhasorResult<Self> {
        config.validate()?;
        let state = SharedState::new(SceneParams::from(config.controls.snapped()).into_state());
        let driver = FrameDriver::new(SceneProp::HorizontalScalar, config.driver_opts())?;
        Ok(Self {
            frames: driver.frames(state),
            config,
            next_event: 0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> SharedState<SceneProp, SceneValue> {
        self.frames.state().clone()
    }

    /// Index of the next frame to be pulled.
    pub fn position(&self) -> FrameIndex {
        self.frames.driver().index()
    }

    pub fn sink_config(&self) -> PhasorResult<SinkConfig> {
        Ok(SinkConfig {
            canvas: self.config.canvas,
            fps: self.config.fps()?,
        })
    }

    /// Pull one frame and compute its geometry.
    ///
    /// Scripted events due at this frame are applied first, so the frame observes them.
    /// Values written through [`Player::state`] must lie within the slider ranges; otherwise the
    /// frame is still consumed but no geometry is computed.
    pub fn step(&mut self) -> PhasorResult<(Frame, SceneGeometry)> {
        let frame = self.pull()?;
        let params = SceneParams::from_values(&self.frames.state().get_all())?;
        Controls::from(params)
            .validate()
            .map_err(|e| PhasorError::validation(format!("frame {}: {e}", frame.index.0)))?;
        Ok((frame, compute(&params, &frame)))
    }

    fn pull(&mut self) -> PhasorResult<Frame> {
        let position = self.position().0;
        if position >= self.config.max_frames {
            return Err(PhasorError::validation(format!(
                "frame {position} is past max_frames {}",
                self.config.max_frames
            )));
        }
        self.apply_due_events(position)?;

        match self.frames.next() {
            Some(frame) => frame,
            None => Err(PhasorError::validation("frame sequence ended")),
        }
    }

    /// Feed `count` frames into `sink`, wrapped in one `begin`/`end`.
    ///
    /// `end` runs even when a frame fails; the frame error takes precedence.
    #[tracing::instrument(skip(self, sink), fields(start = self.position().0))]
    pub fn run(&mut self, count: u64, sink: &mut dyn FrameSink) -> PhasorResult<PlayStats> {
        let remaining = self.config.max_frames.saturating_sub(self.position().0);
        if count > remaining {
            return Err(PhasorError::validation(format!(
                "requested {count} frames but only {remaining} remain before max_frames {}",
                self.config.max_frames
            )));
        }

        sink.begin(&self.sink_config()?)?;
        let mut stats = PlayStats::default();
        let fed = self.feed(count, sink, &mut stats);
        let ended = sink.end();
        if let Err(e) = &fed {
            tracing::warn!(frames = stats.frames, error = %e, "run aborted");
        }
        fed?;
        ended?;

        tracing::info!(frames = stats.frames, changes = stats.changes, "run finished");
        Ok(stats)
    }

    fn feed(
        &mut self,
        count: u64,
        sink: &mut dyn FrameSink,
        stats: &mut PlayStats,
    ) -> PhasorResult<()> {
        for _ in 0..count {
            let (frame, scene) = self.step()?;
            if frame.changed {
                stats.changes += 1;
            }
            sink.push_frame(&frame, &scene)?;
            stats.frames += 1;
        }
        Ok(())
    }

    /// Advance without rendering until `target` is the next frame to be pulled.
    pub fn seek(&mut self, target: FrameIndex) -> PhasorResult<()> {
        if target < self.position() {
            return Err(PhasorError::validation(format!(
                "cannot seek back from frame {} to {}",
                self.position().0,
                target.0
            )));
        }
        while self.position() < target {
            self.pull()?;
        }
        Ok(())
    }

    fn apply_due_events(&mut self, position: u64) -> PhasorResult<()> {
        while let Some(ControlEvent { frame, controls }) =
            self.config.events.get(self.next_event).copied()
        {
            if frame > position {
                break;
            }
            controls.apply(self.frames.state())?;
            tracing::debug!(frame, "control event applied");
            self.next_event += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
