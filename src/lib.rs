pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod optics;
pub mod tessellation;

pub use config::SceneConfig;
pub use error::{DropletError, Result};
