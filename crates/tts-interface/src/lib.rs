mod error;
mod request;
mod synth;
mod voice;
mod word;

pub use error::*;
pub use request::*;
pub use synth::*;
pub use voice::*;
pub use word::*;
