use std::path::{Path, PathBuf};

use crate::animation::driver::Frame;
use crate::encode::sink::{FrameSink, OrderGuard, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{PhasorError, PhasorResult};
use crate::render::cpu::{CpuRasterizer, FrameRGBA};
use crate::scene::geometry::SceneGeometry;

/// Rasterizes each frame and writes `frame_00000.png`, `frame_00001.png`, ... into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    out_dir: PathBuf,
    rasterizer: Option<CpuRasterizer>,
    order: OrderGuard,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            rasterizer: None,
            order: OrderGuard::default(),
            written: Vec::new(),
        }
    }

    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.out_dir.join(format!("frame_{:05}.png", idx.0))
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: &SinkConfig) -> PhasorResult<()> {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| {
            PhasorError::render(format!(
                "create output dir '{}': {e}",
                self.out_dir.display()
            ))
        })?;
        self.rasterizer = Some(CpuRasterizer::new(cfg.canvas)?);
        self.order.reset();
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, frame: &Frame, scene: &SceneGeometry) -> PhasorResult<()> {
        let path = self.frame_path(frame.index);
        let Some(rasterizer) = self.rasterizer.as_mut() else {
            return Err(PhasorError::validation("push_frame called before begin"));
        };
        self.order.check(frame.index)?;
        let rgba = rasterizer.render(scene)?;
        write_png(&path, &rgba)?;
        tracing::trace!(path = %path.display(), "wrote frame");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> PhasorResult<()> {
        tracing::debug!(
            frames = self.written.len(),
            dir = %self.out_dir.display(),
            "png sequence done"
        );
        Ok(())
    }
}

/// Encode `frame` as an RGBA8 PNG at `path`, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> PhasorResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            PhasorError::render(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PhasorError::render(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
