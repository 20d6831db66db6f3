pub mod config;
pub mod controls;
pub mod geometry;
pub mod props;
