//! Frame sinks.
//!
//! Sinks consume frame records and scene geometry in frame order and are fed by
//! [`crate::session::player::Player::run`].

/// JSON lines output.
pub mod json_lines;
/// PNG sequence output rasterized on the CPU.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
