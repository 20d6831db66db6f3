use std::io::Write;

use crate::animation::driver::Frame;
use crate::encode::sink::{FrameSink, OrderGuard, SinkConfig};
use crate::foundation::core::Fps;
use crate::foundation::error::{PhasorError, PhasorResult};
use crate::scene::geometry::SceneGeometry;

#[derive(serde::Serialize)]
struct FrameLine<'a> {
    index: u64,
    time_s: f64,
    phase: f64,
    changed: bool,
    scene: &'a SceneGeometry,
}

/// Writes one JSON object per frame to `W`.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
    fps: Option<Fps>,
    order: OrderGuard,
    written: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            fps: None,
            order: OrderGuard::default(),
            written: 0,
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: &SinkConfig) -> PhasorResult<()> {
        self.fps = Some(cfg.fps);
        self.order.reset();
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame, scene: &SceneGeometry) -> PhasorResult<()> {
        let Some(fps) = self.fps else {
            return Err(PhasorError::validation("push_frame called before begin"));
        };
        self.order.check(frame.index)?;

        let line = FrameLine {
            index: frame.index.0,
            time_s: fps.frames_to_secs(frame.index.0),
            phase: frame.phase,
            changed: frame.changed,
            scene,
        };
        serde_json::to_writer(&mut self.out, &line)
            .map_err(|e| PhasorError::serde(format!("encode frame {}: {e}", frame.index.0)))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| PhasorError::Other(e.into()))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> PhasorResult<()> {
        self.out.flush().map_err(|e| PhasorError::Other(e.into()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/json_lines.rs"]
mod tests;
