//! Piece encoding primitives consumed by the board and the move generator.

pub mod cell;
pub mod core;
pub mod table;
