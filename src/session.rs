//! A single game: the field, the cursor of the player and the clock.
//!
//! A `Session` is owned by the frontend for the duration of one game. It forwards actions to its [`Field`] and keeps track of whether the game has ended,
//! so that a frontend only has to map input to [`Session::open`], [`Session::flag`] and [`Session::move_cursor`] and then redraw.

#[cfg(feature = "std")]
use std::time::{Duration, Instant};
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::{Field, FieldCoordinates, FieldError, OpenOutcome, FlagOutcome};
#[cfg(feature = "generation")]
use crate::GameConfig;

/// Whether a game is still going on, and how it ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The game accepts actions.
    #[default]
    Playing,
    /// The player flagged exactly the mines or opened every safe cell.
    Won,
    /// The player opened a mine.
    Lost,
}
impl GameStatus {
    /// Returns `true` if the game has ended either way.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A direction in which the cursor moves by one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One game of Minesweeper.
#[derive(Clone, Debug)]
pub struct Session {
    field: Field,
    cursor: FieldCoordinates,
    status: GameStatus,
    #[cfg(feature = "std")]
    started: Instant,
    #[cfg(feature = "std")]
    stopped: Option<Instant>,
}
impl Session {
    /// Starts a game on the given field, with the cursor in the top left corner.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            cursor: [0, 0],
            status: GameStatus::Playing,
            #[cfg(feature = "std")]
            started: Instant::now(),
            #[cfg(feature = "std")]
            stopped: None,
        }
    }
    /// Generates a field with the given settings and starts a game on it.
    ///
    /// # Errors
    /// See [`Field::generate_with_rng`].
    #[cfg(all(feature = "generation", feature = "std"))]
    pub fn start(config: &GameConfig) -> Result<Self, FieldError> {
        config.generate().map(Self::new)
    }
    /// Generates a field with the given settings and random number generator, and starts a game on it.
    ///
    /// # Errors
    /// See [`Field::generate_with_rng`].
    #[cfg(feature = "generation")]
    pub fn start_with_rng<R>(config: &GameConfig, rng: &mut R) -> Result<Self, FieldError>
    where R: rand::Rng + ?Sized {
        config.generate_with_rng(rng).map(Self::new)
    }

    /// Returns the field of this game.
    #[inline(always)]
    pub fn field(&self) -> &Field {
        &self.field
    }
    /// Returns the field, ending the session.
    #[inline(always)]
    pub fn into_field(self) -> Field {
        self.field
    }
    /// Returns the position of the cursor.
    #[inline(always)]
    pub fn cursor(&self) -> FieldCoordinates {
        self.cursor
    }
    /// Returns whether the game is still going on.
    #[inline(always)]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves the cursor by one cell, stopping at the edges of the field.
    pub fn move_cursor(&mut self, direction: Direction) -> FieldCoordinates {
        let [x, y] = self.cursor;
        self.cursor = match direction {
            Direction::Up => [x, y.saturating_sub(1)],
            Direction::Down => [x, (y + 1).min(self.field.height() - 1)],
            Direction::Left => [x.saturating_sub(1), y],
            Direction::Right => [(x + 1).min(self.field.width() - 1), y],
        };
        self.cursor
    }
    /// Puts the cursor on the given cell.
    ///
    /// # Errors
    /// [`OutOfRange`][FieldError::OutOfRange] if the cell is outside of the field. The cursor stays where it was.
    pub fn set_cursor(&mut self, coordinates: FieldCoordinates) -> Result<(), FieldError> {
        if !self.field.contains(coordinates) {
            return Err(FieldError::OutOfRange {position: coordinates, dimensions: self.field.dimensions()});
        }
        self.cursor = coordinates;
        Ok(())
    }

    /// Opens the cell under the cursor.
    pub fn open(&mut self) -> OpenOutcome {
        match self.open_at(self.cursor) {
            Ok(outcome) => outcome,
            // The cursor never leaves the field.
            Err(_) => OpenOutcome::default(),
        }
    }
    /// Opens the given cell. Does nothing once the game is over.
    ///
    /// # Errors
    /// [`OutOfRange`][FieldError::OutOfRange] if the cell is outside of the field.
    pub fn open_at(&mut self, coordinates: FieldCoordinates) -> Result<OpenOutcome, FieldError> {
        if self.status.is_over() {
            return Ok(OpenOutcome::default());
        }
        let outcome = self.field.open(coordinates)?;
        if outcome.exploded {
            self.finish(GameStatus::Lost);
        } else if outcome.won {
            self.finish(GameStatus::Won);
        }
        Ok(outcome)
    }
    /// Toggles the flag on the cell under the cursor.
    pub fn flag(&mut self) -> FlagOutcome {
        match self.flag_at(self.cursor) {
            Ok(outcome) => outcome,
            Err(_) => FlagOutcome::default(),
        }
    }
    /// Toggles the flag on the given cell. Does nothing once the game is over.
    ///
    /// # Errors
    /// [`OutOfRange`][FieldError::OutOfRange] if the cell is outside of the field.
    pub fn flag_at(&mut self, coordinates: FieldCoordinates) -> Result<FlagOutcome, FieldError> {
        if self.status.is_over() {
            return Ok(FlagOutcome::default());
        }
        let outcome = self.field.flag(coordinates)?;
        if outcome.won {
            self.finish(GameStatus::Won);
        }
        Ok(outcome)
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        #[cfg(feature = "std")]
        {
            self.stopped = Some(Instant::now());
        }
        debug!(?status, "game over");
    }

    /// Returns the time spent on this game: up to now while playing, or up to the final action once the game is over.
    #[cfg(feature = "std")]
    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(Instant::now).duration_since(self.started)
    }
}
