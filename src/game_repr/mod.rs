mod apply;
mod check;
mod error;
mod history;
mod moves;
mod piece;
mod position;
mod square;
mod piece_moves;
pub mod bitboards;
pub mod encoding;

#[cfg(test)]
mod tests;

pub use bitboards::SquareSet;
pub use check::*;
pub use error::*;
pub use history::*;
pub use moves::*;
pub use piece::*;
pub use piece_moves::ImpactSets;
pub use position::*;
pub use square::*;
