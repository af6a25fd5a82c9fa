mod assemble;
mod config;
mod error;

pub use assemble::*;
pub use config::*;
pub use error::*;
