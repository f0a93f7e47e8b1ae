//! Chess primitives commonly used within [`crate::chess`].
//!
//! Piece kinds are identified by small integers that fit into a 3-bit field:
//!
//! | Kind   | Id | Bits  |
//! |--------|----|-------|
//! | Pawn   | 1  | `001` |
//! | Knight | 2  | `010` |
//! | King   | 3  | `011` |
//! | Bishop | 5  | `101` |
//! | Rook   | 6  | `110` |
//! | Queen  | 7  | `111` |
//!
//! `0` is reserved for "no piece" and `4` is never used. Bit 2 ([`SLIDER_BIT`])
//! is set exactly for the sliding pieces, so the move generator can choose
//! between stepping offsets and ray attacks with a single AND.

use std::fmt::{self, Write};

use anyhow::bail;

/// Number of bits occupied by the piece kind field in any packed value.
pub const FIELD_WIDTH: u32 = 3;
/// Isolates the piece kind field from a packed board cell or move record.
pub const FIELD_MASK: u8 = (1 << FIELD_WIDTH) - 1;
/// Set in the identifier of every sliding piece kind and clear otherwise.
pub const SLIDER_BIT: u8 = 0b100;
/// Number of slots in a table indexed directly by [`PieceKind::id`]. Slots `0`
/// and `4` are never addressed by a valid kind.
pub const ID_TABLE_SIZE: usize = 1 << FIELD_WIDTH;
/// Position of the owner bit in a packed [`Piece`], right above the kind field.
pub const OWNER_SHIFT: u32 = FIELD_WIDTH;

/// Returns the mask isolating the piece kind field, i.e. [`FIELD_MASK`].
///
/// ```
/// use piece_codec::chess::core::{field_mask, PieceKind};
///
/// assert_eq!(field_mask(), 7);
/// assert_eq!(PieceKind::Queen.id() & field_mask(), 7);
/// ```
#[must_use]
pub const fn field_mask() -> u8 {
    FIELD_MASK
}

/// Standard [chess pieces] without the owner.
///
/// The discriminants are the canonical identifiers embedded into board cells
/// and move records. There is no unchecked way to build a [`PieceKind`] from
/// an integer: raw values go through [`TryFrom<u8>`] or
/// [`PieceKind::decode_field`], which reject the reserved ones.
///
/// ```
/// use piece_codec::chess::core::PieceKind;
///
/// assert_eq!(PieceKind::Pawn.id(), 1);
/// assert_eq!(PieceKind::Bishop.id(), 5);
/// assert!(PieceKind::Rook.is_slider());
/// assert!(!PieceKind::King.is_slider());
/// ```
///
/// Thanks to the reserved `0`, an optional piece kind still takes one byte.
///
/// ```
/// use piece_codec::chess::core::PieceKind;
///
/// assert_eq!(std::mem::size_of::<Option<PieceKind>>(), 1);
/// ```
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    King = 3,
    Bishop = 5,
    Rook = 6,
    Queen = 7,
}

impl PieceKind {
    /// All piece kinds in the canonical order used for piece lists:
    /// Pawn, Knight, Bishop, Rook, Queen, King.
    pub const ALL: [Self; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    #[allow(missing_docs)]
    pub const COUNT: usize = Self::ALL.len();

    /// Canonical identifier, always within `1..=7` and never `4`.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Returns `true` for Bishop, Rook and Queen.
    #[must_use]
    pub const fn is_slider(self) -> bool {
        self.id() & SLIDER_BIT != 0
    }

    /// Iterates over [`PieceKind::ALL`]. Every call starts over and yields the
    /// same sequence.
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator + Clone {
        Self::ALL.into_iter()
    }

    /// Lowercase algebraic symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::King => 'k',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
        }
    }

    pub(crate) const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Pawn),
            2 => Some(Self::Knight),
            3 => Some(Self::King),
            5 => Some(Self::Bishop),
            6 => Some(Self::Rook),
            7 => Some(Self::Queen),
            _ => None,
        }
    }

    /// Extracts the piece kind field starting at bit `shift` of a packed
    /// value (e.g. the moving or the captured piece of a move record).
    ///
    /// Returns `Ok(None)` when the field holds the reserved `0`.
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] if the field does not fit into [`u32`] at
    /// given `shift` or if it holds the unused identifier `4`.
    pub fn decode_field(packed: u32, shift: u32) -> anyhow::Result<Option<Self>> {
        if shift > u32::BITS - FIELD_WIDTH {
            bail!(
                "piece kind field should fit into {} bits, got shift {shift}",
                u32::BITS
            );
        }
        let id = u8::try_from((packed >> shift) & u32::from(FIELD_MASK))?;
        match id {
            0 => Ok(None),
            _ => Self::try_from(id).map(Some),
        }
    }

    /// Places the identifier of `kind` (or the reserved `0` for [`None`]) at
    /// bit `shift`. Inverse of [`PieceKind::decode_field`].
    ///
    /// # Panics
    ///
    /// Panics if the field does not fit into [`u32`] at given `shift`.
    #[must_use]
    pub fn encode_field(kind: Option<Self>, shift: u32) -> u32 {
        assert!(
            shift <= u32::BITS - FIELD_WIDTH,
            "piece kind field should fit into {} bits, got shift {shift}",
            u32::BITS
        );
        kind.map_or(0, |kind| u32::from(kind.id()) << shift)
    }
}

// The bit layout is what the rest of the engine relies on: break it and the
// build fails.
const _: () = {
    let mut seen: u8 = 0;
    let mut i = 0;
    while i < PieceKind::COUNT {
        let kind = PieceKind::ALL[i];
        let id = kind.id();
        assert!(id != 0 && id & FIELD_MASK == id, "id out of the field");
        assert!(seen & (1 << id) == 0, "ids must be distinct");
        seen |= 1 << id;
        let slider = matches!(kind, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen);
        assert!(kind.is_slider() == slider, "slider bit mismatch");
        i += 1;
    }
    assert!(seen & (1 << SLIDER_BIT) == 0, "4 is not a piece kind");
};

impl TryFrom<u8> for PieceKind {
    type Error = anyhow::Error;

    /// Decodes an exact identifier, no masking is done.
    fn try_from(id: u8) -> anyhow::Result<Self> {
        match Self::from_id(id) {
            Some(kind) => Ok(kind),
            None => bail!("piece kind id should be one of 1, 2, 3, 5, 6, 7, got {id}"),
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = anyhow::Error;

    /// Accepts both uppercase and lowercase symbols.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol.to_ascii_lowercase() {
            'p' => Ok(Self::Pawn),
            'n' => Ok(Self::Knight),
            'b' => Ok(Self::Bishop),
            'r' => Ok(Self::Rook),
            'q' => Ok(Self::Queen),
            'k' => Ok(Self::King),
            _ => bail!("piece kind symbol should be within \"pnbrqk\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("player should be 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Represents a specific piece owned by a player.
///
/// The packed form stores the kind in bits 0..=2 and the owner in bit 3:
///
/// ```
/// use piece_codec::chess::core::{Piece, PieceKind, Player};
///
/// assert_eq!(Piece::new(Player::White, PieceKind::Rook).pack(), 0b0110);
/// assert_eq!(Piece::new(Player::Black, PieceKind::Rook).pack(), 0b1110);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Packs the piece into the lower 4 bits of a byte.
    #[must_use]
    pub const fn pack(self) -> u8 {
        ((self.owner as u8) << OWNER_SHIFT) | self.kind.id()
    }

    /// Same as [`PieceKind::is_slider`] for the piece kind.
    #[must_use]
    pub const fn is_slider(self) -> bool {
        self.kind.is_slider()
    }

    pub(crate) const fn unpack(bits: u8) -> Option<Self> {
        if bits >> (OWNER_SHIFT + 1) != 0 {
            return None;
        }
        let owner = if bits >> OWNER_SHIFT == 0 {
            Player::White
        } else {
            Player::Black
        };
        match PieceKind::from_id(bits & FIELD_MASK) {
            Some(kind) => Some(Self::new(owner, kind)),
            None => None,
        }
    }
}

impl TryFrom<u8> for Piece {
    type Error = anyhow::Error;

    fn try_from(bits: u8) -> anyhow::Result<Self> {
        match Self::unpack(bits) {
            Some(piece) => Ok(piece),
            None => bail!("packed piece should be a valid kind id with an optional owner bit, got {bits:#06b}"),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let Ok(kind) = PieceKind::try_from(symbol) else {
            bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'");
        };
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self::new(owner, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // White player: uppercase symbols.
        f.write_char(match self.owner {
            Player::White => self.kind.symbol().to_ascii_uppercase(),
            Player::Black => self.kind.symbol(),
        })
    }
}
