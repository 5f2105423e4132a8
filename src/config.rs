//! Game settings: the difficulty presets and the limits of a custom game.

#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use crate::FieldError;
#[cfg(feature = "generation")]
use crate::Field;

/// The settings a field is generated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// The amount of columns.
    pub width: usize,
    /// The amount of rows.
    pub height: usize,
    /// The amount of mines.
    pub mines: usize,
}
impl GameConfig {
    /// The smallest width and height of a custom game.
    pub const MIN_SIDE: usize = 5;
    /// The largest width of a custom game.
    pub const MAX_WIDTH: usize = 64;
    /// The largest height of a custom game.
    pub const MAX_HEIGHT: usize = 32;
    /// The smallest amount of mines in a custom game.
    pub const MIN_MINES: usize = 1;

    /// Creates the settings for a custom game, checking them against the custom game limits.
    ///
    /// The width must be within `5..=64`, the height within `5..=32` and the amount of mines within `1..width * height`.
    ///
    /// # Errors
    /// [`InvalidSetting`][FieldError::InvalidSetting] naming the first setting which is out of its range. Nothing is clamped.
    ///
    /// # Usage
    /// ```
    /// # use minefield::GameConfig;
    /// let config = GameConfig::custom(20, 10, 30).unwrap();
    /// assert_eq!(config.area(), 200);
    /// assert!(GameConfig::custom(20, 10, 200).is_err()); // No safe cell left.
    /// assert!(GameConfig::custom(65, 10, 30).is_err());
    /// ```
    pub fn custom(width: usize, height: usize, mines: usize) -> Result<Self, FieldError> {
        check_setting("width", width, Self::MIN_SIDE, Self::MAX_WIDTH)?;
        check_setting("height", height, Self::MIN_SIDE, Self::MAX_HEIGHT)?;
        check_setting("mines", mines, Self::MIN_MINES, width * height - 1)?;
        Ok(Self {width, height, mines})
    }
    /// Returns the width and height as a size for [`Field::generate`][gen].
    ///
    /// [gen]: struct.Field.html#method.generate "generate — generates a field with the thread-local random number generator"
    #[inline(always)]
    pub const fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
    /// Returns the total amount of cells.
    #[inline(always)]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Generates a field with these settings, using the thread-local random number generator.
    ///
    /// # Errors
    /// See [`Field::generate_with_rng`][gwr].
    ///
    /// [gwr]: struct.Field.html#method.generate_with_rng "generate_with_rng — generates a field using the given random number generator"
    #[cfg(all(feature = "generation", feature = "std"))]
    pub fn generate(&self) -> Result<Field, FieldError> {
        Field::generate(self.size(), self.mines)
    }
    /// Generates a field with these settings, using the given random number generator.
    ///
    /// # Errors
    /// See [`Field::generate_with_rng`][gwr].
    ///
    /// [gwr]: struct.Field.html#method.generate_with_rng "generate_with_rng — generates a field using the given random number generator"
    #[cfg(feature = "generation")]
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Result<Field, FieldError>
    where R: rand::Rng + ?Sized {
        Field::generate_with_rng(self.size(), self.mines, rng)
    }
}
impl Default for GameConfig {
    /// Returns the starting point of a custom game: 16x9 with 16 mines.
    fn default() -> Self {
        Self {width: 16, height: 9, mines: 16}
    }
}
impl From<Difficulty> for GameConfig {
    #[inline]
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

fn check_setting(setting: &'static str, value: usize, min: usize, max: usize) -> Result<(), FieldError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(FieldError::InvalidSetting {setting, value, min, max})
    }
}

/// The predefined difficulty levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Difficulty {
    /// 8x5 with 6 mines.
    Easy,
    /// 16x9 with 16 mines.
    Medium,
    /// 32x16 with 84 mines.
    Hard,
}
impl Difficulty {
    /// All difficulty levels, from the easiest one.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the settings of this difficulty level.
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig {width: 8, height: 5, mines: 6},
            Self::Medium => GameConfig {width: 16, height: 9, mines: 16},
            Self::Hard => GameConfig {width: 32, height: 16, mines: 84},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_fit_custom_limits() {
        for difficulty in Difficulty::ALL {
            let preset = difficulty.config();
            assert_eq!(GameConfig::custom(preset.width, preset.height, preset.mines), Ok(preset));
        }
        let default = GameConfig::default();
        assert_eq!(GameConfig::custom(default.width, default.height, default.mines), Ok(default));
    }

    #[test]
    fn custom_rejects_out_of_range_settings() {
        assert_eq!(
            GameConfig::custom(4, 9, 10),
            Err(FieldError::InvalidSetting {setting: "width", value: 4, min: 5, max: 64}),
        );
        assert_eq!(
            GameConfig::custom(10, 33, 10),
            Err(FieldError::InvalidSetting {setting: "height", value: 33, min: 5, max: 32}),
        );
        assert_eq!(
            GameConfig::custom(5, 5, 25),
            Err(FieldError::InvalidSetting {setting: "mines", value: 25, min: 1, max: 24}),
        );
        assert!(GameConfig::custom(5, 5, 0).is_err());
        assert!(GameConfig::custom(64, 32, 64 * 32 - 1).is_ok());
    }

    #[cfg(feature = "generation")]
    #[test]
    fn generates_from_preset() {
        use rand::{rngs::StdRng, SeedableRng};
        let config = GameConfig::from(Difficulty::Hard);
        let field = config.generate_with_rng(&mut StdRng::seed_from_u64(84)).unwrap();
        assert_eq!(field.size(), (32, 16));
        assert_eq!(field.mine_count(), 84);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn config_serializes_as_plain_struct() {
        let json = serde_json::to_string(&Difficulty::Easy.config()).unwrap();
        assert_eq!(json, r#"{"width":8,"height":5,"mines":6}"#);
    }
}
