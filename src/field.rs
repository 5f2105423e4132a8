//! The playfield of a Minesweeper game.
//!
//! This is the main point of interest for the game: mines are placed here, cells are opened and flagged here, and the win is decided here. For that reason,
//! this module is the most detailed one.

use core::{
    ops::Index,
    num::NonZeroUsize,
};
#[cfg(feature = "serialization")]
use core::fmt::{self, Formatter};
use alloc::vec::Vec;
#[cfg(feature = "serialization")]
use serde::{
    Serialize, Deserialize,
    ser::{Serializer, SerializeStruct},
    de::{Deserializer, Visitor, MapAccess, SeqAccess},
};
use tracing::{debug, trace};
use crate::{
    Cell, FieldError,
    RowIter, ColumnIter,
    FieldRowsIter, FieldColumnsIter,
    Neighbors, Positions,
};

/// Represents a playfield.
///
/// Fields in Minesweeper are matrices of [cells][cell]. `Field` objects provide the methods which implementations call when the user performs certain input
/// actions: opening a cell maps to [`open`][m_open] and placing or removing a flag maps to [`flag`][m_flag]. Both report whether the game was lost or won by
/// that action, so the caller never has to inspect the field by itself to decide when the session ends.
///
/// Opening a cell opens **exactly one** cell: clearings are not expanded.
///
/// [cell]: struct.Cell.html "Cell — a cell on a Minesweeper field"
/// [m_open]: #method.open "open — opens exactly one cell and returns the outcome of opening it"
/// [m_flag]: #method.flag "flag — toggles the flag on a closed cell"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    dimensions: FieldDimensions,
    storage: Vec<Cell>,
}
/// The dimensions of a field.
///
/// The first element specifies the width (the number of columns), while the second one specifies the height (number of rows). As required by `NonZeroUsize`, a field cannot be smaller than 1x1.
pub type FieldDimensions = [NonZeroUsize; 2];
/// The coordinates of a cell on a field.
///
/// The first element specifies the column index (X coordinate), while the second one specifies the row index (Y coordinate). This is different from `FieldDimensions`, since the coordinate system starts from zero, i.e. the coordinates `[0, 0]` correspond to the top left corner and the only cell of a 1x1 field.
pub type FieldCoordinates = [usize; 2];

/// The outcome of [opening][m_open] a cell.
///
/// [m_open]: struct.Field.html#method.open "open — opens exactly one cell and returns the outcome of opening it"
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct OpenOutcome {
    /// The opened cell held a mine. Takes precedence over `won`.
    pub exploded: bool,
    /// The field is in a winning state after the operation.
    pub won: bool,
    /// The cell was actually opened, i.e. it was neither flagged nor already open.
    pub had_effect: bool,
}
/// The outcome of [flagging][m_flag] a cell.
///
/// [m_flag]: struct.Field.html#method.flag "flag — toggles the flag on a closed cell"
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FlagOutcome {
    /// The field is in a winning state after the operation.
    pub won: bool,
    /// The flag was actually toggled, i.e. the cell was closed.
    pub had_effect: bool,
}

/// Checks the requested size and turns it into dimensions.
fn checked_dimensions(size: [usize; 2]) -> Result<FieldDimensions, FieldError> {
    let [width, height] = size;
    let dimensions = match (NonZeroUsize::new(width), NonZeroUsize::new(height)) {
        (Some(w), Some(h)) => [w, h],
        _ => return Err(FieldError::EmptyField {width, height}),
    };
    // Every other area computation relies on this one not overflowing.
    if width.checked_mul(height).is_none() {
        return Err(FieldError::TooLarge {width, height});
    }
    Ok(dimensions)
}
/// Returns an error if `mines` mines would leave no safe cell in `area` cells.
fn check_mine_count(mines: usize, area: usize) -> Result<(), FieldError> {
    if mines >= area {
        Err(FieldError::TooManyMines {mines, area})
    } else {Ok(())}
}

impl Field {
    /// Creates a field filled with closed safe cells, with the given dimensions. Numbers are left at zero.
    fn blank(dimensions: FieldDimensions) -> Self {
        let area = dimensions[0].get() * dimensions[1].get();
        let mut storage = Vec::with_capacity(area);
        storage.resize(area, Cell::default());
        Self {dimensions, storage}
    }

    /// Generates a field of the given size with `mine_count` mines placed uniformly at random, using the thread-local random number generator.
    ///
    /// See [`generate_with_rng`][gwr] for the details.
    ///
    /// [gwr]: #method.generate_with_rng "generate_with_rng — generates a field using the given random number generator"
    #[cfg(all(feature = "generation", feature = "std"))]
    pub fn generate(size: [usize; 2], mine_count: usize) -> Result<Self, FieldError> {
        Self::generate_with_rng(size, mine_count, &mut rand::rng())
    }
    /// Generates a field of the given size with `mine_count` mines placed uniformly at random, using the given random number generator.
    ///
    /// Positions are drawn uniformly over the whole field, and a position which already holds a mine is drawn again. Every cell without a mine then gets
    /// the number of mines around it. All cells start closed and unflagged.
    ///
    /// # Errors
    /// - [`EmptyField`][FieldError::EmptyField] if the field would have no cells
    /// - [`TooManyMines`][FieldError::TooManyMines] if `mine_count` would leave no cell without a mine
    ///
    /// # Usage
    /// ```
    /// # use minefield::Field;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let field = Field::generate_with_rng([16, 9], 16, &mut rng).unwrap();
    /// assert_eq!(field.mine_count(), 16);
    /// assert!(Field::generate_with_rng([4, 0], 1, &mut rng).is_err());
    /// ```
    #[cfg(feature = "generation")]
    #[tracing::instrument(level = "debug", skip(rng))]
    pub fn generate_with_rng<R>(size: [usize; 2], mine_count: usize, rng: &mut R) -> Result<Self, FieldError>
    where R: rand::Rng + ?Sized {
        let dimensions = checked_dimensions(size)?;
        let mut field = Self::blank(dimensions);
        let area = field.area();
        check_mine_count(mine_count, area)?;

        let mut mines_left = mine_count;
        let mut draws = 0_usize;
        while mines_left > 0 {
            draws += 1;
            let cell = &mut field.storage[rng.random_range(0..area)];
            if cell.has_mine() {
                continue; // Draw again without placing anything.
            }
            *cell = Cell::mine();
            mines_left -= 1;
        }
        field.place_numbers();
        debug!(draws, "generated field");
        Ok(field)
    }
    /// Creates a field of the given size with mines at the specified locations. Repeated locations count as one mine.
    ///
    /// This is the deterministic counterpart of [`generate_with_rng`][gwr], and the way to use a custom field generator.
    ///
    /// # Errors
    /// - [`EmptyField`][FieldError::EmptyField] if the field would have no cells
    /// - [`OutOfRange`][FieldError::OutOfRange] if a mine location is outside of the field
    /// - [`TooManyMines`][FieldError::TooManyMines] if every cell would hold a mine
    ///
    /// [gwr]: #method.generate_with_rng "generate_with_rng — generates a field using the given random number generator"
    pub fn from_mines<I>(size: [usize; 2], mines: I) -> Result<Self, FieldError>
    where I: IntoIterator<Item = FieldCoordinates> {
        let dimensions = checked_dimensions(size)?;
        let mut field = Self::blank(dimensions);
        for location in mines {
            let index = field.checked_index(location)?;
            field.storage[index] = Cell::mine();
        }
        check_mine_count(field.mine_count(), field.area())?;
        field.place_numbers();
        Ok(field)
    }
    /// Gives every cell without a mine the number of mines around it.
    fn place_numbers(&mut self) {
        for location in self.positions() {
            let index = self.index_of(location);
            if self.storage[index].has_mine() {continue};
            // The public neighbor query rejects 1x1 fields, which are still valid fields with a single safe cell.
            let number = Neighbors::new_unchecked(self.dimensions, location)
                .filter(|&n| self.storage[self.index_of(n)].has_mine())
                .count();
            self.storage[index] = Cell::safe(u8::try_from(number).unwrap_or(Cell::MAX_NUMBER));
        }
    }

    /// Returns the width and height of the field.
    #[inline(always)]
    pub const fn dimensions(&self) -> FieldDimensions {
        self.dimensions
    }
    /// Returns the width and height of the field as a plain tuple.
    #[inline(always)]
    pub const fn size(&self) -> (usize, usize) {
        (self.dimensions[0].get(), self.dimensions[1].get())
    }
    /// Returns the amount of columns.
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.dimensions[0].get()
    }
    /// Returns the amount of rows.
    #[inline(always)]
    pub const fn height(&self) -> usize {
        self.dimensions[1].get()
    }
    /// Returns the total amount of cells.
    #[inline(always)]
    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }
    /// Returns `true` if the coordinates lie on the field.
    #[inline]
    pub const fn contains(&self, coordinates: FieldCoordinates) -> bool {
        coordinates[0] < self.width() && coordinates[1] < self.height()
    }

    #[inline(always)]
    const fn index_of(&self, coordinates: FieldCoordinates) -> usize {
        coordinates[0] + coordinates[1] * self.width()
    }
    fn checked_index(&self, coordinates: FieldCoordinates) -> Result<usize, FieldError> {
        if self.contains(coordinates) {
            Ok(self.index_of(coordinates))
        } else {
            Err(FieldError::OutOfRange {position: coordinates, dimensions: self.dimensions})
        }
    }

    /// Returns the cell at the column `coordinates[0]` and row `coordinates[1]`, both starting at zero, or `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, coordinates: FieldCoordinates) -> Option<&Cell> {
        if self.contains(coordinates) {
            self.storage.get(self.index_of(coordinates))
        } else {None}
    }

    /// Opens **exactly one** cell and returns the outcome of opening it.
    ///
    /// Flagged and already opened cells are left as they are, which is reported through `had_effect`. Opening a mine opens every other mine as well, so
    /// that the whole minefield can be shown at once; cells without mines keep their state. The win is evaluated in every case, but an explosion always
    /// takes precedence over it.
    ///
    /// # Errors
    /// [`OutOfRange`][FieldError::OutOfRange] if the coordinates are outside of the field. The field is not modified.
    ///
    /// # Usage
    /// ```
    /// # use minefield::Field;
    /// let mut field = Field::from_mines([2, 1], [[0, 0]]).unwrap();
    /// let outcome = field.open([1, 0]).unwrap();
    /// assert!(outcome.had_effect && outcome.won && !outcome.exploded);
    /// ```
    pub fn open(&mut self, coordinates: FieldCoordinates) -> Result<OpenOutcome, FieldError> {
        let index = self.checked_index(coordinates)?;
        let cell = &mut self.storage[index];
        if cell.flagged || cell.opened {
            trace!(?coordinates, flagged = cell.flagged, "open had no effect");
            return Ok(OpenOutcome::default());
        }
        cell.opened = true;
        let exploded = cell.has_mine();
        if exploded {
            debug!(?coordinates, "opened a mine");
            self.show_mines();
        } else {
            trace!(?coordinates, number = cell.number(), "opened cell");
        }
        let won = self.is_won();
        if won && !exploded {
            debug!("field solved by opening");
        }
        Ok(OpenOutcome {exploded, won, had_effect: true})
    }
    /// Places a flag on a closed cell, or removes it if there already is one.
    ///
    /// Opened cells can't hold a flag and are left as they are, which is reported through `had_effect`.
    ///
    /// # Errors
    /// [`OutOfRange`][FieldError::OutOfRange] if the coordinates are outside of the field. The field is not modified.
    pub fn flag(&mut self, coordinates: FieldCoordinates) -> Result<FlagOutcome, FieldError> {
        let index = self.checked_index(coordinates)?;
        let cell = &mut self.storage[index];
        if cell.opened {
            trace!(?coordinates, "flag had no effect");
            return Ok(FlagOutcome::default());
        }
        cell.flagged = !cell.flagged;
        trace!(?coordinates, flagged = cell.flagged, "toggled flag");
        let won = self.is_won();
        if won {
            debug!("field solved by flagging");
        }
        Ok(FlagOutcome {won, had_effect: true})
    }
    /// Opens every cell holding a mine. Cells without mines keep their state.
    pub fn show_mines(&mut self) {
        for cell in self.storage.iter_mut().filter(|c| c.has_mine()) {
            cell.opened = true;
        }
    }
    /// Returns `true` if the field is in a winning state, `false` otherwise.
    ///
    /// The field is won when the flags sit exactly on the mines, or, failing that, when every cell without a mine has been opened.
    #[must_use = "traversing the entire field is expensive"]
    pub fn is_won(&self) -> bool {
        self.storage.iter().all(Cell::is_correctly_flagged)
            || self.storage.iter().all(|c| !c.is_required_to_open())
    }

    /// Returns an iterator over the coordinates of the cells around the specified one.
    ///
    /// # Errors
    /// - [`TooSmall`][FieldError::TooSmall] if the field has fewer than 2 cells
    /// - [`OutOfRange`][FieldError::OutOfRange] if the coordinates are outside of the field
    pub fn neighbors(&self, coordinates: FieldCoordinates) -> Result<Neighbors, FieldError> {
        if self.area() < 2 {
            return Err(FieldError::TooSmall {area: self.area()});
        }
        self.checked_index(coordinates)?;
        Ok(Neighbors::new_unchecked(self.dimensions, coordinates))
    }
    /// Counts all neighboring mines around a spot, or returns `None` if it's out of bounds.
    ///
    /// All directly and diagonally adjacent mines are considered neighboring. If the cell is a mine, the cell itself isn't counted.
    pub fn count_neighboring_mines(&self, coordinates: FieldCoordinates) -> Option<u8> {
        if !self.contains(coordinates) {
            return None;
        }
        let count = Neighbors::new_unchecked(self.dimensions, coordinates)
            .filter(|&n| self[n].has_mine())
            .count();
        u8::try_from(count).ok()
    }

    /// Returns the amount of cells holding a mine.
    #[must_use = "traversing the entire field is expensive"]
    pub fn mine_count(&self) -> usize {
        self.storage.iter().filter(|c| c.has_mine()).count()
    }
    /// Returns the amount of flags placed on the field.
    #[must_use = "traversing the entire field is expensive"]
    pub fn flag_count(&self) -> usize {
        self.storage.iter().filter(|c| c.is_flagged()).count()
    }
    /// Returns the amount of mines minus the amount of flags, which is what mine counters display. Never goes below zero.
    #[must_use = "traversing the entire field is expensive"]
    pub fn remaining_mines(&self) -> usize {
        self.mine_count().saturating_sub(self.flag_count())
    }
    /// Returns the amount of cells which have been already opened.
    #[must_use = "traversing the entire field is expensive"]
    pub fn count_open_cells(&self) -> usize {
        self.storage.iter().filter(|c| c.is_opened()).count()
    }
    /// Returns the amount of cells which have not been opened yet.
    #[must_use = "traversing the entire field is expensive"]
    pub fn count_closed_cells(&self) -> usize {
        self.area() - self.count_open_cells()
    }
    /// Returns the amount of cells which the player still needs to open in order to win by clearing.
    #[must_use = "traversing the entire field is expensive"]
    pub fn cells_to_open(&self) -> usize {
        self.storage.iter().filter(|c| c.is_required_to_open()).count()
    }

    /// Returns an iterator over a single row.
    ///
    /// Said iterator can then also be indexed, thus serving as a versatile reference to a specific row.
    ///
    /// # Panics
    /// Panics if the specified row is out of range.
    #[inline(always)]
    #[track_caller]
    pub fn row(&self, row: usize) -> RowIter<'_> {
        RowIter::new(self, row)
    }
    /// Returns an iterator over a single column.
    ///
    /// Said iterator can then also be indexed, thus serving as a versatile reference to a specific column.
    ///
    /// # Panics
    /// Panics if the specified column is out of range.
    #[inline(always)]
    #[track_caller]
    pub fn column(&self, column: usize) -> ColumnIter<'_> {
        ColumnIter::new(self, column)
    }
    /// Returns an iterator over the field's rows.
    #[inline(always)]
    pub fn rows(&self) -> FieldRowsIter<'_> {
        FieldRowsIter::new(self)
    }
    /// Returns an iterator over the field's columns.
    #[inline(always)]
    pub fn columns(&self) -> FieldColumnsIter<'_> {
        FieldColumnsIter::new(self)
    }
    /// Returns an iterator over the coordinates of every cell, row by row.
    #[inline(always)]
    pub fn positions(&self) -> Positions {
        Positions::new(self.dimensions)
    }
}
impl Index<FieldCoordinates> for Field {
    type Output = Cell;
    /// Returns the cell at the column `index[0]` and row `index[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get`.
    #[inline(always)]
    #[track_caller]
    fn index(&self, coordinates: FieldCoordinates) -> &Self::Output {
        match self.get(coordinates) {
            Some(cell) => cell,
            None => panic!("index {:?} out of bounds", coordinates),
        }
    }
}
#[cfg(feature = "serialization")]
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
       let mut s = s.serialize_struct("Field", 2)?;
       s.serialize_field("dimensions", &self.dimensions)?;
       s.serialize_field("storage", &self.storage)?;
       s.end()
    }
}
#[cfg(feature = "serialization")]
impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        use serde::de;
        const FIELDS: &[&str] = &["dimensions", "storage"];
        enum StructField { Dimensions, Storage }

        impl<'de> Deserialize<'de> for StructField {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct StructFieldVisitor;

                impl<'de> Visitor<'de> for StructFieldVisitor {
                    type Value = StructField;

                    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                        formatter.write_str("`dimensions` or `storage`")
                    }

                    fn visit_str<E: de::Error>(self, value: &str) -> Result<StructField, E> {
                        match value {
                            "dimensions" => Ok(StructField::Dimensions),
                            "storage" => Ok(StructField::Storage),
                            _ => Err(de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(StructFieldVisitor)
            }
        }

        /// Rebuilds the field, refusing storage which doesn't describe a playable field.
        fn assemble<E: de::Error>(dimensions: FieldDimensions, storage: Vec<Cell>) -> Result<Field, E> {
            let area = checked_dimensions([dimensions[0].get(), dimensions[1].get()])
                .map_err(E::custom)
                .map(|[w, h]| w.get() * h.get())?;
            if storage.len() != area {
                return Err(E::invalid_length(storage.len(), &"as many cells as the field's area"));
            }
            let field = Field {dimensions, storage};
            check_mine_count(field.mine_count(), area).map_err(E::custom)?;
            for location in field.positions() {
                let cell = field[location];
                let expected = if cell.has_mine() {0} else {
                    field.count_neighboring_mines(location).unwrap_or_default()
                };
                if cell.is_opened() && cell.is_flagged() && !cell.has_mine() {
                    return Err(E::custom(format_args!(
                        "cell [{}, {}] is both opened and flagged without holding a mine",
                        location[0], location[1],
                    )));
                }
                if cell.number() != expected {
                    return Err(E::custom(format_args!(
                        "cell [{}, {}] has number {}, but {} mines surround it",
                        location[0], location[1], cell.number(), expected,
                    )));
                }
            }
            Ok(field)
        }

        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("struct Field")
            }

            fn visit_seq<V: SeqAccess<'de>>(self, mut seq: V) -> Result<Self::Value, V::Error> {
                let dimensions = seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let storage = seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                assemble(dimensions, storage)
            }

            fn visit_map<V: MapAccess<'de>>(self, mut map: V) -> Result<Self::Value, V::Error> {
                let mut dimensions: Option<FieldDimensions> = None;
                let mut storage: Option<Vec<Cell>> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        StructField::Dimensions => {
                            if dimensions.is_some() {
                                return Err(de::Error::duplicate_field("dimensions"));
                            }
                            dimensions = Some(map.next_value()?);
                        }
                        StructField::Storage => {
                            if storage.is_some() {
                                return Err(de::Error::duplicate_field("storage"));
                            }
                            storage = Some(map.next_value()?);
                        }
                    }
                }
                let dimensions = dimensions.ok_or_else(|| de::Error::missing_field("dimensions"))?;
                let storage = storage.ok_or_else(|| de::Error::missing_field("storage"))?;
                assemble(dimensions, storage)
            }
        }
        d.deserialize_struct("Field", FIELDS, FieldVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    /// Checks that every safe cell carries the amount of mines around it.
    fn assert_numbers_consistent(field: &Field) {
        for location in field.positions() {
            let cell = field[location];
            if cell.has_mine() {
                assert_eq!(cell.number(), 0, "mine at {:?} carries a number", location);
                continue;
            }
            let around = field.neighbors(location).unwrap()
                .filter(|&n| field[n].has_mine())
                .count();
            assert_eq!(usize::from(cell.number()), around, "wrong number at {:?}", location);
        }
    }

    #[cfg(feature = "generation")]
    mod generation {
        use super::*;
        use rand::{rngs::StdRng, SeedableRng};

        #[test]
        fn exact_mine_count_and_numbers() {
            init_logging();
            let mut rng = StdRng::seed_from_u64(7);
            for &(w, h, m) in &[(8, 5, 6), (16, 9, 16), (32, 16, 84), (3, 3, 8), (2, 1, 1)] {
                let field = Field::generate_with_rng([w, h], m, &mut rng).unwrap();
                assert_eq!(field.size(), (w, h));
                assert_eq!(field.mine_count(), m);
                assert_eq!(field.count_open_cells(), 0);
                assert_eq!(field.flag_count(), 0);
                assert_numbers_consistent(&field);
            }
        }

        #[test]
        fn no_mines_means_all_zero() {
            let mut rng = StdRng::seed_from_u64(1);
            let field = Field::generate_with_rng([6, 4], 0, &mut rng).unwrap();
            assert!(field.rows().flatten().all(|c| !c.has_mine() && c.number() == 0));
        }

        #[test]
        fn densest_field_keeps_one_safe_cell() {
            let mut rng = StdRng::seed_from_u64(99);
            let field = Field::generate_with_rng([5, 5], 24, &mut rng).unwrap();
            assert_eq!(field.cells_to_open(), 1);
            assert_numbers_consistent(&field);
        }

        #[test]
        fn single_cell_field() {
            let mut rng = StdRng::seed_from_u64(3);
            let field = Field::generate_with_rng([1, 1], 0, &mut rng).unwrap();
            assert_eq!(field[[0, 0]], Cell::safe(0));
        }

        #[test]
        fn same_seed_same_field() {
            let a = Field::generate_with_rng([10, 10], 20, &mut StdRng::seed_from_u64(5)).unwrap();
            let b = Field::generate_with_rng([10, 10], 20, &mut StdRng::seed_from_u64(5)).unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn origin_can_hold_a_mine() {
            let mut rng = StdRng::seed_from_u64(11);
            let hit = (0..200).any(|_| {
                Field::generate_with_rng([2, 2], 2, &mut rng).unwrap()[[0, 0]].has_mine()
            });
            assert!(hit);
        }

        #[test]
        fn rejects_bad_arguments() {
            let mut rng = StdRng::seed_from_u64(0);
            let err = Field::generate_with_rng([0, 5], 0, &mut rng).unwrap_err();
            assert_eq!(err, FieldError::EmptyField {width: 0, height: 5});
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            let err = Field::generate_with_rng([3, 3], 9, &mut rng).unwrap_err();
            assert_eq!(err, FieldError::TooManyMines {mines: 9, area: 9});
        }

        #[cfg(feature = "std")]
        #[test]
        fn thread_rng_generation() {
            let field = Field::generate([16, 9], 16).unwrap();
            assert_eq!(field.mine_count(), 16);
        }
    }

    #[test]
    fn from_mines_derives_numbers() {
        let field = Field::from_mines([3, 3], [[0, 0], [2, 2], [0, 0]]).unwrap();
        assert_eq!(field.mine_count(), 2);
        assert_eq!(field[[1, 1]].number(), 2);
        assert_eq!(field[[1, 0]].number(), 1);
        assert_eq!(field[[2, 0]].number(), 0);
        assert_numbers_consistent(&field);
        assert_eq!(
            Field::from_mines([3, 3], [[3, 0]]).unwrap_err().kind(),
            ErrorKind::OutOfRange,
        );
        assert!(Field::from_mines([1, 1], [[0, 0]]).is_err());
    }

    #[test]
    fn strip_with_one_mine() {
        // One column, two rows, mine on top.
        let field = Field::from_mines([1, 2], [[0, 0]]).unwrap();
        assert!(field[[0, 0]].has_mine());
        assert_eq!(field[[0, 1]].number(), 1);

        let mut flagged = field.clone();
        let outcome = flagged.flag([0, 0]).unwrap();
        assert_eq!(outcome, FlagOutcome {won: true, had_effect: true});

        let mut opened = field;
        let outcome = opened.open([0, 1]).unwrap();
        assert_eq!(outcome, OpenOutcome {exploded: false, won: true, had_effect: true});
    }

    #[test]
    fn opening_every_safe_cell_wins() {
        let mut field = Field::from_mines([2, 2], [[1, 1]]).unwrap();
        let first = field.open([0, 0]).unwrap();
        assert_eq!(first, OpenOutcome {exploded: false, won: false, had_effect: true});
        assert!(!field.open([1, 0]).unwrap().won);
        let last = field.open([0, 1]).unwrap();
        assert_eq!(last, OpenOutcome {exploded: false, won: true, had_effect: true});
    }

    #[test]
    fn mine_free_field_is_won_from_the_start() {
        // No mines and no flags already means the flags sit exactly on the mines.
        let mut field = Field::from_mines([2, 2], []).unwrap();
        assert!(field.is_won());
        let first = field.open([0, 0]).unwrap();
        assert_eq!(first, OpenOutcome {exploded: false, won: true, had_effect: true});
        // A stray flag breaks the exact-flag win until every safe cell is open.
        assert!(!field.flag([1, 0]).unwrap().won);
        assert!(!field.open([0, 1]).unwrap().won);
        assert!(!field.open([1, 1]).unwrap().won);
        // Taking the flag back restores the exact-flag win.
        assert!(field.flag([1, 0]).unwrap().won);
    }

    #[test]
    fn clearing_wins_despite_partial_flags() {
        let mut field = Field::from_mines([3, 3], [[0, 0], [2, 2]]).unwrap();
        assert!(!field.flag([0, 0]).unwrap().won);
        let safe: Vec<_> = field.positions().filter(|&p| !field[p].has_mine()).collect();
        let (last, rest) = safe.split_last().unwrap();
        for &location in rest {
            let outcome = field.open(location).unwrap();
            assert!(!outcome.won && !outcome.exploded, "won early at {:?}", location);
        }
        let outcome = field.open(*last).unwrap();
        assert_eq!(outcome, OpenOutcome {exploded: false, won: true, had_effect: true});
        assert!(field[[0, 0]].is_flagged());
        assert!(field[[2, 2]].is_closed());
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let err = Field::from_mines([usize::MAX, 2], []).unwrap_err();
        assert_eq!(err, FieldError::TooLarge {width: usize::MAX, height: 2});
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn opening_flagged_or_opened_cells_does_nothing() {
        init_logging();
        let mut field = Field::from_mines([3, 1], [[0, 0]]).unwrap();
        field.flag([0, 0]).unwrap();
        let before = field.clone();
        assert_eq!(field.open([0, 0]).unwrap(), OpenOutcome::default());
        assert_eq!(field, before);

        field.flag([1, 0]).unwrap();
        assert_eq!(field.open([1, 0]).unwrap(), OpenOutcome::default());
        assert!(field[[1, 0]].is_closed());

        assert!(field.open([2, 0]).unwrap().had_effect);
        let before = field.clone();
        assert_eq!(field.open([2, 0]).unwrap(), OpenOutcome::default());
        assert_eq!(field, before);
    }

    #[test]
    fn flag_toggles_and_refuses_opened_cells() {
        let mut field = Field::from_mines([3, 3], [[2, 2]]).unwrap();
        assert!(field.flag([0, 0]).unwrap().had_effect);
        assert!(field[[0, 0]].is_flagged());
        assert!(field.flag([0, 0]).unwrap().had_effect);
        assert!(!field[[0, 0]].is_flagged());

        field.open([1, 1]).unwrap();
        assert_eq!(field.flag([1, 1]).unwrap(), FlagOutcome::default());
        assert!(!field[[1, 1]].is_flagged());
    }

    #[test]
    fn explosion_reveals_only_mines() {
        init_logging();
        let mut field = Field::from_mines([4, 4], [[0, 0], [3, 3], [2, 1]]).unwrap();
        field.open([1, 2]).unwrap();
        field.flag([3, 3]).unwrap();
        let outcome = field.open([0, 0]).unwrap();
        assert!(outcome.exploded && outcome.had_effect);
        for location in field.positions() {
            let cell = field[location];
            if cell.has_mine() {
                assert!(cell.is_opened(), "mine at {:?} stays hidden", location);
            } else {
                assert_eq!(cell.is_opened(), location == [1, 2]);
            }
        }
        assert!(field[[3, 3]].is_flagged());
    }

    #[test]
    fn flags_must_match_mines_exactly() {
        init_logging();
        let mut field = Field::from_mines([3, 3], [[0, 0], [1, 1]]).unwrap();
        assert!(!field.flag([0, 0]).unwrap().won);
        assert!(!field.flag([2, 2]).unwrap().won);
        assert!(!field.flag([1, 1]).unwrap().won); // Extra flag on [2, 2].
        assert!(field.flag([2, 2]).unwrap().won);
        assert_eq!(field.count_open_cells(), 0);
        assert_eq!(field.remaining_mines(), 0);
    }

    #[test]
    fn out_of_range_leaves_field_untouched() {
        let mut field = Field::from_mines([3, 2], [[1, 1]]).unwrap();
        let before = field.clone();
        let err = field.open([3, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(field.flag([0, 2]).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(field, before);
        assert!(field.get([0, 2]).is_none());
        assert!(field.count_neighboring_mines([5, 5]).is_none());
    }

    #[test]
    fn neighbor_query_rules() {
        let field = Field::from_mines([3, 3], []).unwrap();
        assert_eq!(field.neighbors([0, 0]).unwrap().count(), 3);
        assert_eq!(field.neighbors([2, 0]).unwrap().count(), 3);
        assert_eq!(field.neighbors([1, 1]).unwrap().count(), 8);
        assert_eq!(field.neighbors([3, 1]).unwrap_err().kind(), ErrorKind::OutOfRange);

        let tiny = Field::from_mines([1, 1], []).unwrap();
        assert_eq!(tiny.neighbors([0, 0]).unwrap_err(), FieldError::TooSmall {area: 1});
    }

    #[test]
    fn counters() {
        let mut field = Field::from_mines([4, 2], [[0, 0], [3, 1]]).unwrap();
        assert_eq!(field.area(), 8);
        assert_eq!(field.cells_to_open(), 6);
        field.open([1, 0]).unwrap();
        field.flag([0, 0]).unwrap();
        field.flag([2, 0]).unwrap();
        field.flag([3, 1]).unwrap();
        assert_eq!(field.count_open_cells(), 1);
        assert_eq!(field.count_closed_cells(), 7);
        assert_eq!(field.cells_to_open(), 5);
        assert_eq!(field.flag_count(), 3);
        assert_eq!(field.remaining_mines(), 0);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn serde_round_trip_and_validation() {
        let mut field = Field::from_mines([3, 2], [[2, 0]]).unwrap();
        field.open([0, 1]).unwrap();
        field.flag([2, 0]).unwrap();
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["storage"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<Field>(value).is_err());

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["storage"][0]["number"] = serde_json::json!(5);
        assert!(serde_json::from_value::<Field>(value).is_err());

        // An opened safe cell can't carry a flag.
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["storage"][3]["flagged"] = serde_json::json!(true);
        assert!(serde_json::from_value::<Field>(value).is_err());
    }
}
