pub mod container;
pub mod shared;
