pub mod anxiety;
pub mod audio_params;
pub mod confetti;
pub mod controller;
pub mod evasion;
pub mod geometry;
pub mod messages;
pub mod timeline;

pub use anxiety::*;
pub use controller::*;
pub use geometry::*;
