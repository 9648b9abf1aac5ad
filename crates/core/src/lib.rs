// trim-galore-pe Core - Domain Logic & Ports
// NO process or OS dependencies (hexagonal core)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::TrimGalorePe;
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
