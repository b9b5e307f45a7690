use serde::{Deserialize, Serialize};

use crate::cards::UNIVERSE_SIZE;
use crate::errors::GameError;

/// Cards dealt at the start of a game; also the size at which matches are replaced in place.
pub const STANDARD_TABLE_SIZE: usize = 12;
/// Cards dealt by a single add-three action.
pub const DRAW_SIZE: usize = 3;
/// Cards in a complete selection.
pub const SELECTION_SIZE: usize = 3;

/// Tunable game parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards on the table after a new game
    pub initial_table_size: usize,
    /// Points awarded for a valid Set
    pub match_reward: u32,
    /// Points taken for an invalid triple (score never drops below zero)
    pub mismatch_penalty: u32,
    /// RNG seed for draws and shuffles; `None` picks a random seed
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_table_size: STANDARD_TABLE_SIZE,
            match_reward: 3,
            mismatch_penalty: 5,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.initial_table_size < SELECTION_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "initial_table_size must be >= {}",
                SELECTION_SIZE
            )));
        }
        if self.initial_table_size > UNIVERSE_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "initial_table_size must be <= {}",
                UNIVERSE_SIZE
            )));
        }
        Ok(())
    }

    pub fn scorer(&self) -> Scorer {
        Scorer {
            match_reward: self.match_reward,
            mismatch_penalty: self.mismatch_penalty,
        }
    }
}

/// Turns evaluation results into score changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    pub match_reward: u32,
    pub mismatch_penalty: u32,
}

impl Scorer {
    /// Applies the outcome of one evaluated triple to `score`.
    ///
    /// A valid Set adds the match reward; anything else subtracts the mismatch penalty,
    /// clamped at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use setgame_engine::rules::GameConfig;
    ///
    /// let scorer = GameConfig::default().scorer();
    /// assert_eq!(scorer.apply(0, true), 3);
    /// assert_eq!(scorer.apply(8, false), 3);
    /// assert_eq!(scorer.apply(2, false), 0);
    /// ```
    pub fn apply(&self, score: u32, is_set: bool) -> u32 {
        if is_set {
            score.saturating_add(self.match_reward)
        } else {
            score.saturating_sub(self.mismatch_penalty)
        }
    }
}
