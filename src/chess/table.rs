//! Per-kind lookup tables addressed directly by [`PieceKind::id`], e.g.
//! material values or stepping offsets used by the move generator.

use std::ops::{Index, IndexMut};

use crate::chess::core::{PieceKind, ID_TABLE_SIZE};

/// Fixed-size table with one slot per possible identifier. Slots of the
/// reserved identifiers are kept at [`Default::default`] and are unreachable
/// through the public API.
///
/// ```
/// use piece_codec::chess::core::PieceKind;
/// use piece_codec::chess::table::PieceKindTable;
///
/// let values = PieceKindTable::from_fn(|kind| match kind {
///     PieceKind::Pawn => 100,
///     PieceKind::Knight | PieceKind::Bishop => 300,
///     PieceKind::Rook => 500,
///     PieceKind::Queen => 900,
///     PieceKind::King => 0,
/// });
/// assert_eq!(values[PieceKind::Rook], 500);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieceKindTable<T> {
    slots: [T; ID_TABLE_SIZE],
}

impl<T: Default> PieceKindTable<T> {
    /// Fills the table by calling `f` once per kind, in identifier order.
    pub fn from_fn(mut f: impl FnMut(PieceKind) -> T) -> Self {
        Self {
            slots: std::array::from_fn(|id| {
                u8::try_from(id)
                    .ok()
                    .and_then(PieceKind::from_id)
                    .map_or_else(T::default, &mut f)
            }),
        }
    }
}

impl<T> PieceKindTable<T> {
    /// Iterates over entries in the order of [`PieceKind::iter`].
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, &T)> + '_ {
        PieceKind::iter().map(move |kind| (kind, &self[kind]))
    }
}

impl<T> Index<PieceKind> for PieceKindTable<T> {
    type Output = T;

    fn index(&self, kind: PieceKind) -> &T {
        &self.slots[usize::from(kind.id())]
    }
}

impl<T> IndexMut<PieceKind> for PieceKindTable<T> {
    fn index_mut(&mut self, kind: PieceKind) -> &mut T {
        &mut self.slots[usize::from(kind.id())]
    }
}
