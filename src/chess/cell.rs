//! Square-centric board storage packs the contents of each square into one
//! byte: `0` for an empty square, otherwise [`Piece::pack`]. The piece kind
//! field sits in the lower three bits, so [`FIELD_MASK`] and [`SLIDER_BIT`]
//! apply to the raw cell directly.

use std::fmt::{self, Write};

use anyhow::Context;

use crate::chess::core::{Piece, PieceKind, Player, FIELD_MASK, OWNER_SHIFT, SLIDER_BIT};

/// Contents of a single square packed into a byte.
///
/// A [`Cell`] can only be built from a [`Piece`] or through the checked
/// [`TryFrom<u8>`], so the raw bits always decode.
///
/// ```
/// use piece_codec::chess::cell::Cell;
/// use piece_codec::chess::core::{Piece, PieceKind, Player};
///
/// let cell = Cell::from(Piece::new(Player::Black, PieceKind::Queen));
/// assert_eq!(cell.bits(), 0b1111);
/// assert_eq!(cell.kind(), Some(PieceKind::Queen));
/// assert!(cell.is_slider());
/// assert!(Cell::EMPTY.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    bits: u8,
}

impl Cell {
    /// Square without a piece.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Returns raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.bits
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        Piece::unpack(self.bits)
    }

    /// Kind of the piece on the square, read through [`FIELD_MASK`].
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_id(self.bits & FIELD_MASK)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self.piece() {
            Some(piece) => Some(piece.owner),
            None => None,
        }
    }

    /// Checks the slider bit of the raw cell. Empty cells have it clear.
    #[must_use]
    pub const fn is_slider(self) -> bool {
        self.bits & SLIDER_BIT != 0
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Self { bits: piece.pack() }
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Self {
        piece.map_or(Self::EMPTY, Self::from)
    }
}

impl TryFrom<u8> for Cell {
    type Error = anyhow::Error;

    /// # Errors
    ///
    /// Returns [`anyhow::Error`] if `bits` is neither `0` nor a packed
    /// [`Piece`]: bits above the owner bit are set, the kind field holds the
    /// unused `4`, or the owner bit is set on an empty kind field.
    fn try_from(bits: u8) -> anyhow::Result<Self> {
        if bits == 0 {
            return Ok(Self::EMPTY);
        }
        Piece::try_from(bits)
            .map(Self::from)
            .with_context(|| format!("cell should be empty or hold a packed piece, got {bits:#010b}"))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.piece() {
            Some(piece) => write!(f, "{piece}"),
            None => f.write_char('.'),
        }
    }
}

// Owner bit must stay clear of the kind field.
const _: () = assert!(OWNER_SHIFT >= FIELD_MASK.count_ones());
