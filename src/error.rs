//! Errors reported by field construction and field operations.
//!
//! Every error here is a contract violation on the caller's side (a zero-sized field, a position outside the field, more mines than cells). Nothing is
//! retried internally and no operation leaves a field half-updated when it fails.

use thiserror::Error;
use crate::{FieldCoordinates, FieldDimensions};

/// The broad category of a [`FieldError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The arguments can never describe a valid field or query.
    InvalidArgument,
    /// A position lies outside of the field it was used with.
    OutOfRange,
}

/// An error produced by a field or its configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The requested field would have no cells.
    #[error("a {width}x{height} field has no cells")]
    EmptyField {
        width: usize,
        height: usize,
    },
    /// The amount of cells of the requested field doesn't fit in a `usize`.
    #[error("a {width}x{height} field has more cells than can be addressed")]
    TooLarge {
        width: usize,
        height: usize,
    },
    /// More mines were requested than there are cells to hold them, leaving no cell to open.
    #[error("{mines} mines leave no safe cell on a field of {area} cells")]
    TooManyMines {
        mines: usize,
        area: usize,
    },
    /// The field is too small for neighbor queries.
    #[error("a field of {area} cell(s) has no neighbors to look at")]
    TooSmall {
        area: usize,
    },
    /// A position lies outside of the field.
    #[error("position [{}, {}] is outside of a {}x{} field", .position[0], .position[1], .dimensions[0], .dimensions[1])]
    OutOfRange {
        position: FieldCoordinates,
        dimensions: FieldDimensions,
    },
    /// A custom game setting is outside of the allowed range.
    #[error("{setting} must be within {min}..={max}, got {value}")]
    InvalidSetting {
        setting: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}
impl FieldError {
    /// Returns the category of the error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange {..} => ErrorKind::OutOfRange,
            Self::EmptyField {..}
          | Self::TooLarge {..}
          | Self::TooManyMines {..}
          | Self::TooSmall {..}
          | Self::InvalidSetting {..} => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::num::NonZeroUsize;

    #[test]
    fn kinds_follow_taxonomy() {
        let dims = [NonZeroUsize::new(3).unwrap(), NonZeroUsize::new(2).unwrap()];
        assert_eq!(FieldError::EmptyField {width: 0, height: 4}.kind(), ErrorKind::InvalidArgument);
        assert_eq!(FieldError::TooManyMines {mines: 9, area: 9}.kind(), ErrorKind::InvalidArgument);
        assert_eq!(FieldError::TooLarge {width: usize::MAX, height: 2}.kind(), ErrorKind::InvalidArgument);
        assert_eq!(FieldError::TooSmall {area: 1}.kind(), ErrorKind::InvalidArgument);
        assert_eq!(FieldError::OutOfRange {position: [3, 0], dimensions: dims}.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn out_of_range_message() {
        let dims = [NonZeroUsize::new(3).unwrap(), NonZeroUsize::new(2).unwrap()];
        let err = FieldError::OutOfRange {position: [5, 1], dimensions: dims};
        assert_eq!(err.to_string(), "position [5, 1] is outside of a 3x2 field");
    }
}
