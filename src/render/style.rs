use crate::foundation::core::Rgba8;

pub const BACKGROUND: Rgba8 = Rgba8::opaque_hex(0xffffe8);
pub const INK: Rgba8 = Rgba8::opaque_hex(0x000022);
pub const GRAY: Rgba8 = Rgba8::opaque_hex(0x555555);
pub const LIGHT_GRAY: Rgba8 = Rgba8::opaque_hex(0x888888);
pub const BLUE: Rgba8 = Rgba8::opaque_hex(0x1b9ce5);
pub const LIGHT_BLUE: Rgba8 = Rgba8::opaque_hex(0x36a8e8);

/// Stroke widths in pixels.
pub const THIN: f64 = 1.0;
pub const THICK: f64 = 4.0;

/// Radius of the point marker in pixels.
pub const POINT_RADIUS: f64 = 3.0;

/// Flattening tolerance for circles, in pixels.
pub const TOLERANCE: f64 = 0.1;
