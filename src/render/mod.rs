/// CPU rasterizer.
pub mod cpu;
/// Fixed palette and stroke widths.
pub mod style;
