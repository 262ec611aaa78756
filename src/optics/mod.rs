mod light;
mod medium;

pub use light::Light;
pub use medium::{Medium, MediumPair};
