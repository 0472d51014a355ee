//! Move representation and the Generator (`spec.md` §4.2).

pub mod attacks;
pub mod legality;
pub mod movegen;
pub mod perft;
pub mod types;

pub use movegen::{generate_captures, generate_legal};
pub use types::Move;
