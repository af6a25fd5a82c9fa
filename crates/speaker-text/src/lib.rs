mod error;
mod parse;
mod speaker;

pub use error::*;
pub use parse::*;
pub use speaker::*;
