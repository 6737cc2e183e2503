mod board;
mod error;
mod weather;

pub use board::*;
pub use error::*;
pub use weather::*;
