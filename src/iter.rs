//! Iterators useful for traversing a field.
//!
//! Currently available:
//! - [`ColumnIter`][columniter] — iterates over a single field column
//! - [`RowIter`][rowiter] — iterates over a single field row
//! - [`FieldRowsIter`][fri] — iterates over the rows of a field (each item is a [`RowIter`][rowiter])
//! - [`FieldColumnsIter`][fci] — iterates over the columns of a field (each item is a [`ColumnIter`][columniter])
//! - [`Neighbors`][neighbors] — iterates over the coordinates surrounding a cell
//! - [`Positions`][positions] — iterates over every coordinate of a field in row-major order
//!
//! [rowiter]: struct.RowIter.html "RowIter — iterates over a single field row"
//! [columniter]: struct.ColumnIter.html "ColumnIter — iterates over a single field column"
//! [fri]: struct.FieldRowsIter.html "FieldRowsIter — an iterator over the rows of a field"
//! [fci]: struct.FieldColumnsIter.html "an iterator over the columns of a field"
//! [neighbors]: struct.Neighbors.html "Neighbors — the up to 8 cells around a cell"
//! [positions]: struct.Positions.html "Positions — every coordinate of a field"

use core::{
    ops::{Range, Index},
    iter::FusedIterator,
};
use crate::{
    Cell,
    Field, FieldCoordinates, FieldDimensions,
};

/// Iterates over a single field row.
///
/// Can also be indexed to pull arbitrary cells from the row, regardless of the iterator state.
///
/// # Usage
/// ```
/// # use minefield::{Field, RowIter};
/// #
/// let field = Field::from_mines([9, 4], [[8, 3]]).unwrap(); // Place a mine (remember that indicies start from 0)
/// let mut rowiter = field.row(3); // Create an iterator over the fourth row
/// let mine_cell = rowiter.nth(8) // Find the nineth element in the row
///     .unwrap(); // Get rid of the Option wrap
/// assert!(mine_cell.has_mine()); // It's a mine
/// ```
#[derive(Clone)]
pub struct RowIter<'f> {
    field: &'f Field,
    row: usize,
    index: Range<usize>,
}
impl<'f> RowIter<'f> {
    /// Creates an iterator over the specified row of the specified field.
    ///
    /// # Panics
    /// Panics if the specified row is out of range.
    #[inline]
    #[track_caller]
    pub fn new(field: &'f Field, row: usize) -> Self {
        assert!(row < field.height(), "row {} is out of range", row);
        Self {field, row, index: 0..field.width()}
    }
    /// Returns the cell at the specified column, or `None` if such a column doesn't exist. The row for which the iterator was created is used.
    #[inline(always)]
    pub fn get(&self, column: usize) -> Option<Cell> {
        self.field.get([column, self.row]).copied()
    }
    /// Returns the index of the row this iterator walks.
    #[inline(always)]
    pub fn row_index(&self) -> usize {
        self.row
    }
    /// Returns the field which the iterator iterates over.
    #[inline(always)]
    pub fn field(&self) -> &'f Field {
        self.field
    }
}
impl<'f> Iterator for RowIter<'f> {
    type Item = Cell;
    fn next(&mut self) -> Option<Self::Item> {
        let column = self.index.next()?;
        self.field.get([column, self.row]).copied()
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl<'f> DoubleEndedIterator for RowIter<'f> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let column = self.index.next_back()?;
        self.field.get([column, self.row]).copied()
    }
}
impl<'f> ExactSizeIterator for RowIter<'f> {
    /// Returns the remaining amount of cells to iterate upon.
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.len()
    }
}
impl FusedIterator for RowIter<'_> {}
impl Index<usize> for RowIter<'_> {
    type Output = Cell;
    /// Returns the cell at the specified column.
    ///
    /// Used as a convenience function, allowing you to write `field.row(y)[x]` to find specific cells.
    #[inline(always)]
    #[track_caller]
    fn index(&self, column: usize) -> &Cell {
        &self.field[[column, self.row]]
    }
}

/// Iterates over a single field column.
///
/// Can also be indexed to pull arbitrary cells from the column, regardless of the iterator state.
///
/// # Usage
/// ```
/// # use minefield::{Field, ColumnIter};
/// #
/// let field = Field::from_mines([9, 8], [[8, 7]]).unwrap();
/// let mut columniter = field.column(8); // Create an iterator over the nineth column
/// let mine_cell = columniter.nth(7) // Find the eighth element in the column
///     .unwrap();
/// assert!(mine_cell.has_mine());
/// ```
#[derive(Clone)]
pub struct ColumnIter<'f> {
    field: &'f Field,
    column: usize,
    index: Range<usize>,
}
impl<'f> ColumnIter<'f> {
    /// Creates an iterator over the specified column of the specified field.
    ///
    /// # Panics
    /// Panics if the specified column is out of range.
    #[inline]
    #[track_caller]
    pub fn new(field: &'f Field, column: usize) -> Self {
        assert!(column < field.width(), "column {} is out of range", column);
        Self {field, column, index: 0..field.height()}
    }
    /// Returns the cell at the specified row, or `None` if such a row doesn't exist. The column for which the iterator was created is used.
    #[inline(always)]
    pub fn get(&self, row: usize) -> Option<Cell> {
        self.field.get([self.column, row]).copied()
    }
    /// Returns the index of the column this iterator walks.
    #[inline(always)]
    pub fn column_index(&self) -> usize {
        self.column
    }
    /// Returns the field which the iterator iterates over.
    #[inline(always)]
    pub fn field(&self) -> &'f Field {
        self.field
    }
}
impl<'f> Iterator for ColumnIter<'f> {
    type Item = Cell;
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.index.next()?;
        self.field.get([self.column, row]).copied()
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl<'f> DoubleEndedIterator for ColumnIter<'f> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let row = self.index.next_back()?;
        self.field.get([self.column, row]).copied()
    }
}
impl<'f> ExactSizeIterator for ColumnIter<'f> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.len()
    }
}
impl FusedIterator for ColumnIter<'_> {}
impl Index<usize> for ColumnIter<'_> {
    type Output = Cell;
    /// Returns the cell at the specified row.
    ///
    /// Used as a convenience function, allowing you to write `field.column(x)[y]` to find specific cells.
    #[inline(always)]
    #[track_caller]
    fn index(&self, row: usize) -> &Cell {
        &self.field[[self.column, row]]
    }
}

/// An iterator over the rows of a field.
///
/// # Usage
/// ```
/// # use minefield::{Field, FieldRowsIter};
/// #
/// let field = Field::from_mines([9, 4], [[8, 3]]).unwrap();
/// let mut row_with_mine: Option<usize> = None; // Keep track of our findings using an Option
/// for (y, mut row) in field.rows().enumerate() { // In each row...
///     if row.any(|c| c.has_mine()) { // If the row contains a mine...
///         row_with_mine = Some(y); //...take the row number out of the loop.
///     }
/// }
/// assert_eq!(row_with_mine, Some(3)); // We indeed have found a mine in the 4th row.
/// ```
#[derive(Clone)]
pub struct FieldRowsIter<'f> {
    field: &'f Field,
    index: Range<usize>,
}
impl<'f> FieldRowsIter<'f> {
    /// Returns an iterator over the specified field's rows.
    #[inline(always)]
    pub fn new(field: &'f Field) -> Self {
        Self {
            field, index: 0..field.height()
        }
    }
}
impl<'f> Iterator for FieldRowsIter<'f> {
    type Item = RowIter<'f>;
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.index.next()?;
        Some(self.field.row(row))
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl<'f> DoubleEndedIterator for FieldRowsIter<'f> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let row = self.index.next_back()?;
        Some(self.field.row(row))
    }
}
impl<'f> ExactSizeIterator for FieldRowsIter<'f> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.len()
    }
}
impl FusedIterator for FieldRowsIter<'_> {}

/// An iterator over the columns of a field.
#[derive(Clone)]
pub struct FieldColumnsIter<'f> {
    field: &'f Field,
    index: Range<usize>,
}
impl<'f> FieldColumnsIter<'f> {
    /// Returns an iterator over the specified field's columns.
    #[inline(always)]
    pub fn new(field: &'f Field) -> Self {
        Self {
            field, index: 0..field.width()
        }
    }
}
impl<'f> Iterator for FieldColumnsIter<'f> {
    type Item = ColumnIter<'f>;
    fn next(&mut self) -> Option<Self::Item> {
        let column = self.index.next()?;
        Some(self.field.column(column))
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl<'f> DoubleEndedIterator for FieldColumnsIter<'f> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let column = self.index.next_back()?;
        Some(self.field.column(column))
    }
}
impl<'f> ExactSizeIterator for FieldColumnsIter<'f> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.len()
    }
}
impl FusedIterator for FieldColumnsIter<'_> {}

/// Offsets of the neighbors, in clockwise order starting from top-left: ↖, ↑, ↗, →, ↘, ↓, ↙, ←.
const NEIGHBOR_OFFSETS: [[isize; 2]; 8] = [
    [-1, -1], [0, -1], [1, -1],
    [1, 0],
    [1, 1], [0, 1], [-1, 1],
    [-1, 0],
];

/// Iterates over the coordinates of the up to 8 cells surrounding a cell.
///
/// Directly and diagonally adjacent cells are neighbors, the cell itself is not. Coordinates falling outside of the field are skipped. The order is
/// clockwise, starting from the top-left neighbor.
///
/// # Usage
/// ```
/// # use minefield::Field;
/// #
/// let field = Field::from_mines([3, 3], []).unwrap();
/// assert_eq!(field.neighbors([0, 0]).unwrap().count(), 3); // A corner,
/// assert_eq!(field.neighbors([1, 0]).unwrap().count(), 5); // an edge,
/// assert_eq!(field.neighbors([1, 1]).unwrap().count(), 8); // and the center.
/// ```
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: FieldCoordinates,
    dimensions: FieldDimensions,
    index: Range<usize>,
}
impl Neighbors {
    /// Creates an iterator over the neighbors of `center`, without checking that `center` itself is on the field.
    #[inline]
    pub(crate) fn new_unchecked(dimensions: FieldDimensions, center: FieldCoordinates) -> Self {
        Self {center, dimensions, index: 0..NEIGHBOR_OFFSETS.len()}
    }
    /// Returns the cell around which the iterator walks.
    #[inline(always)]
    pub fn center(&self) -> FieldCoordinates {
        self.center
    }
    fn offset(&self, index: usize) -> Option<FieldCoordinates> {
        let [dx, dy] = NEIGHBOR_OFFSETS[index];
        let x = self.center[0].checked_add_signed(dx)?;
        let y = self.center[1].checked_add_signed(dy)?;
        if x < self.dimensions[0].get() && y < self.dimensions[1].get() {
            Some([x, y])
        } else {None}
    }
}
impl Iterator for Neighbors {
    type Item = FieldCoordinates;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.index.next() {
            if let Some(location) = self.offset(index) {
                return Some(location);
            }
        }
        None
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.index.len()))
    }
}
impl FusedIterator for Neighbors {}

/// Iterates over every coordinate of a field in row-major order.
#[derive(Clone, Debug)]
pub struct Positions {
    width: usize,
    index: Range<usize>,
}
impl Positions {
    /// Returns an iterator over every coordinate of a field with the given dimensions.
    #[inline]
    pub fn new(dimensions: FieldDimensions) -> Self {
        let width = dimensions[0].get();
        Self {width, index: 0..width * dimensions[1].get()}
    }
}
impl Iterator for Positions {
    type Item = FieldCoordinates;
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.index.next()?;
        Some([i % self.width, i / self.width])
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl DoubleEndedIterator for Positions {
    fn next_back(&mut self) -> Option<Self::Item> {
        let i = self.index.next_back()?;
        Some([i % self.width, i / self.width])
    }
}
impl ExactSizeIterator for Positions {
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.len()
    }
}
impl FusedIterator for Positions {}
