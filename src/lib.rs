//! Phasor animates a circle rolling along a sinusoid.
//!
//! - Keep scene values in an observable [`State`] (shared through [`SharedState`])
//! - Pull [`Frame`] records from a [`FrameDriver`]; a pending state change resets the phase
//! - Turn each frame into [`SceneGeometry`] and push it into a [`FrameSink`]
//!
//! [`Player`] wires these together for a [`SceneConfig`].
#![forbid(unsafe_code)]

pub mod animation;
pub mod encode;
mod foundation;
pub mod render;
pub mod scene;
pub mod session;
pub mod state;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Circle, Fps, FrameIndex, Line, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{PhasorError, PhasorResult};

pub use crate::animation::driver::{AsScalar, Direction, DriverOpts, Frame, FrameDriver, Frames};
pub use crate::animation::wave::{TrigFunction, Wave, linspace, period, period_length};
pub use crate::encode::json_lines::JsonLinesSink;
pub use crate::encode::png::{PngSequenceSink, write_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::cpu::{CpuRasterizer, FrameRGBA};
pub use crate::scene::config::{ControlEvent, SceneConfig};
pub use crate::scene::controls::Controls;
pub use crate::scene::geometry::SceneGeometry;
pub use crate::scene::props::{SceneParams, SceneProp, SceneState, SceneValue};
pub use crate::session::player::{PlayStats, Player};
pub use crate::state::container::State;
pub use crate::state::shared::SharedState;
