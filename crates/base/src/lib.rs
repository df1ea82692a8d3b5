pub mod log;
pub use log::*;

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;
