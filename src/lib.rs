//! Compact encoding of chess pieces shared by the board representation and
//! the move generator.
//!
//! The central type is [`chess::core::PieceKind`]: a closed enumeration whose
//! discriminants form a 3-bit field with bit 2 doubling as the "slider" flag.
//! Everything else in the crate ([`chess::core::Piece`],
//! [`chess::cell::Cell`], [`chess::table::PieceKindTable`]) is built on top of
//! that layout.

pub mod chess;
