#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

/// A cell on a Minesweeper field.
///
/// The mine and the number are the cell's static truth and never change after the cell is created. Whether the cell is opened or flagged is the state
/// visible to the player, which only the owning [`Field`][field] may change: a flag can be toggled on a closed cell, and an opened cell stays open.
///
/// [field]: struct.Field.html "Field — a Minesweeper playfield"
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Cell {
    has_mine: bool,
    number: u8,
    pub(crate) opened: bool,
    pub(crate) flagged: bool,
}
impl Cell {
    /// The largest number a cell can display: every one of its eight neighbors holds a mine.
    pub const MAX_NUMBER: u8 = 8;

    /// Creates a closed, unflagged cell holding a mine.
    #[inline]
    pub const fn mine() -> Self {
        Self {has_mine: true, number: 0, opened: false, flagged: false}
    }
    /// Creates a closed, unflagged cell without a mine and with the given amount of neighboring mines.
    #[inline]
    pub fn safe(number: u8) -> Self {
        debug_assert!(number <= Self::MAX_NUMBER, "a cell has at most 8 neighbors, got number {}", number);
        Self {has_mine: false, number, opened: false, flagged: false}
    }

    /// Returns `true` if the cell holds a mine, `false` otherwise.
    ///
    /// Frontends should only show this once the cell is opened, which happens for every mine after an explosion.
    #[inline(always)]
    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }
    /// Returns the amount of mines among the neighbors of the cell. Always `0` for a mine.
    #[inline(always)]
    pub const fn number(&self) -> u8 {
        self.number
    }
    /// Returns `true` if the cell has been opened.
    #[inline(always)]
    pub const fn is_opened(&self) -> bool {
        self.opened
    }
    /// Returns `true` if the cell has not been opened yet.
    #[inline(always)]
    pub const fn is_closed(&self) -> bool {
        !self.opened
    }
    /// Returns `true` if the cell carries a flag.
    #[inline(always)]
    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }
    /// Returns `true` if this cell has to be opened in order to win by clearing, `false` otherwise.
    ///
    /// This is `true` only for closed cells without a mine.
    #[inline]
    pub const fn is_required_to_open(&self) -> bool {
        !self.has_mine && !self.opened
    }
    /// Returns `true` if the flag on this cell agrees with its content: a flagged mine or an unflagged safe cell.
    #[inline]
    pub(crate) const fn is_correctly_flagged(&self) -> bool {
        self.has_mine == self.flagged
    }
}
