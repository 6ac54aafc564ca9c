pub mod map;
pub mod renderer;
pub mod validator;

pub use map::*;
pub use renderer::*;
pub use validator::*;
