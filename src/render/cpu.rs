use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Canvas, Circle, Line, Point, Rect, Rgba8};
use crate::foundation::error::{PhasorError, PhasorResult};
use crate::render::style;
use crate::scene::geometry::{MAX_X, MAX_Y, MIN_X, MIN_Y, SceneGeometry, view_rect};

/// A rendered frame as straight-alpha RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Affine mapping `view` (y up) onto `canvas` (y down), uniformly scaled and centered.
pub fn view_transform(canvas: Canvas, view: Rect) -> Affine {
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let s = (w / view.width()).min(h / view.height());
    let ox = (w - view.width() * s) / 2.0;
    let oy = (h - view.height() * s) / 2.0;
    Affine::new([s, 0.0, 0.0, -s, ox - view.x0 * s, oy + view.y1 * s])
}

/// CPU rasterizer for [`SceneGeometry`] powered by `vello_cpu`.
pub struct CpuRasterizer {
    canvas: Canvas,
    width: u16,
    height: u16,
    to_pixels: Affine,
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: Option<vello_cpu::Pixmap>,
}

impl std::fmt::Debug for CpuRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRasterizer")
            .field("canvas", &self.canvas)
            .field("to_pixels", &self.to_pixels)
            .finish_non_exhaustive()
    }
}

impl CpuRasterizer {
    pub fn new(canvas: Canvas) -> PhasorResult<Self> {
        canvas.validate()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| PhasorError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| PhasorError::render("canvas height exceeds u16"))?;
        Ok(Self {
            canvas,
            width,
            height,
            to_pixels: view_transform(canvas, view_rect()),
            ctx: None,
            pixmap: None,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// World-to-pixel transform used for every element.
    pub fn to_pixels(&self) -> Affine {
        self.to_pixels
    }

    #[tracing::instrument(skip_all, fields(width = self.width, height = self.height))]
    pub fn render(&mut self, scene: &SceneGeometry) -> PhasorResult<FrameRGBA> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();
        let mut pixmap = match self.pixmap.take() {
            Some(p) => p,
            None => vello_cpu::Pixmap::new(self.width, self.height),
        };

        self.draw(&mut ctx, scene);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);

        self.ctx = Some(ctx);
        self.pixmap = Some(pixmap);
        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        })
    }

    fn draw(&self, ctx: &mut vello_cpu::RenderContext, scene: &SceneGeometry) {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint(style::BACKGROUND));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        self.stroke_line(
            ctx,
            Line::new((MIN_X, 0.0), (MAX_X, 0.0)),
            style::LIGHT_GRAY,
            style::THIN,
        );
        self.stroke_line(
            ctx,
            Line::new((0.0, MIN_Y), (0.0, MAX_Y)),
            style::LIGHT_GRAY,
            style::THIN,
        );

        self.stroke_polyline(ctx, &scene.theta_circle, style::GRAY, style::THIN);

        // Flatten in world units so the tolerance lands at TOLERANCE pixels.
        let world_tolerance = style::TOLERANCE / self.to_pixels.determinant().abs().sqrt();
        let circle = Circle::new(scene.circle_center, scene.circle_radius.abs());
        let circle_px = self.to_pixels * circle.to_path(world_tolerance);
        stroke(ctx, &circle_px, style::INK, style::THIN);

        self.stroke_polyline(ctx, &scene.period_wave, style::BLUE, style::THICK);
        self.stroke_polyline(ctx, &scene.full_wave, style::LIGHT_BLUE, style::THIN);

        let marker = Circle::new(self.to_pixels * scene.point, style::POINT_RADIUS);
        ctx.set_paint(paint(style::BLUE));
        ctx.fill_path(&bezpath_to_cpu(&marker.to_path(style::TOLERANCE)));

        self.stroke_line(ctx, scene.terminal_arm, style::GRAY, style::THIN);
        self.stroke_line(ctx, scene.connecting_arm, style::GRAY, style::THIN);
    }

    fn stroke_line(&self, ctx: &mut vello_cpu::RenderContext, line: Line, color: Rgba8, width: f64) {
        self.stroke_polyline(ctx, &[line.p0, line.p1], color, width);
    }

    fn stroke_polyline(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        points: &[Point],
        color: Rgba8,
        width: f64,
    ) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut path = BezPath::new();
        path.move_to(self.to_pixels * *first);
        for p in rest {
            path.line_to(self.to_pixels * *p);
        }
        stroke(ctx, &path, color, width);
    }
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn stroke(ctx: &mut vello_cpu::RenderContext, path: &BezPath, color: Rgba8, width: f64) {
    ctx.set_paint(paint(color));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
    ctx.stroke_path(&bezpath_to_cpu(path));
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
