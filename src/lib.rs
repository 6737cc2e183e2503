pub mod board;
pub mod ridepath;
pub mod weather;

pub mod prelude {
    pub use crate::board::{Board, Departure, Direction, Eta, Line, Urgency};
    pub use crate::ridepath::Fetcher;
}
