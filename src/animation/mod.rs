pub mod driver;
pub mod wave;
