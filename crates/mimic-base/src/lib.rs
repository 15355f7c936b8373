pub mod bbox;
pub mod logging;
pub mod vec2;

pub use bbox::BoundingBox;
pub use logging::{init_stdout_logger, StdoutLogger};
pub use vec2::Vec2;

// Re-export log crate so downstream crates can use mimic_base::log::*
pub use log;
